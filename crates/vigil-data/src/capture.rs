//! Captured-session data source.
//!
//! A capture file is JSONL: one self-describing record per line, written by
//! whatever process last had a live terminal session. Loading the file gives
//! an offline [`MarketData`] that serves the monitor and the integration
//! tests without a terminal.
//!
//! ```text
//! {"kind":"series","code":"000300.SH","returns":[0.41,-0.22,1.05]}
//! {"kind":"constituents","sector_id":"a39901011i000000","members":[{"code":"600000.SH","name":"SPDB"}]}
//! {"kind":"names","entries":{"000300.SH":"CSI 300"}}
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

use vigil_models::ReturnSeries;

use crate::client::{Constituent, DataTerminal, Lookback, MarketData};
use crate::error::DataError;

/// One line of a capture file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CaptureRecord {
    /// Trailing daily percent returns for one asset, oldest first. Missing
    /// trading days are `null` (JSON has no NaN literal).
    Series {
        code: String,
        returns: Vec<Option<f64>>,
    },
    /// Sector membership snapshot.
    Constituents {
        sector_id: String,
        members: Vec<Constituent>,
    },
    /// Code to display-name mapping fragment.
    Names { entries: BTreeMap<String, String> },
}

/// In-memory view of a loaded capture file.
#[derive(Debug, Default)]
pub struct CaptureSource {
    series: BTreeMap<String, Vec<f64>>,
    constituents: BTreeMap<String, Vec<Constituent>>,
    names: BTreeMap<String, String>,
}

impl CaptureSource {
    /// Parse a capture file. A malformed line means the capture is corrupt
    /// and fails the whole load; callers treat that as a session failure.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let file = std::fs::File::open(path).map_err(|e| {
            DataError::session(format!("cannot open capture {}: {}", path.display(), e))
        })?;

        let mut source = Self::default();
        let mut line_no = 0usize;
        for line in BufReader::new(file).lines() {
            line_no += 1;
            let line = line.map_err(|e| {
                DataError::session(format!("read error at line {}: {}", line_no, e))
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let record: CaptureRecord = serde_json::from_str(&line).map_err(|e| {
                DataError::session(format!("corrupt capture at line {}: {}", line_no, e))
            })?;
            source.ingest(record);
        }

        debug!(
            series = source.series.len(),
            sectors = source.constituents.len(),
            names = source.names.len(),
            "capture loaded"
        );
        Ok(source)
    }

    fn ingest(&mut self, record: CaptureRecord) {
        match record {
            CaptureRecord::Series { code, returns } => {
                let values = returns
                    .into_iter()
                    .map(|v| v.unwrap_or(f64::NAN))
                    .collect();
                self.series.insert(code, values);
            }
            CaptureRecord::Constituents { sector_id, members } => {
                self.constituents.insert(sector_id, members);
            }
            CaptureRecord::Names { entries } => {
                self.names.extend(entries);
            }
        }
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }
}

impl MarketData for CaptureSource {
    fn return_series(&self, code: &str, lookback: Lookback) -> Result<ReturnSeries, DataError> {
        let values = self
            .series
            .get(code)
            .ok_or_else(|| DataError::unavailable(code, "not present in capture"))?;
        let mut series = ReturnSeries::new(values.clone());
        series.truncate_to_last(lookback.trading_days());
        Ok(series)
    }

    fn sector_constituents(
        &self,
        sector_id: &str,
        _as_of: NaiveDate,
    ) -> Result<Vec<Constituent>, DataError> {
        // Unresolved sector is an empty membership, not an error.
        Ok(self.constituents.get(sector_id).cloned().unwrap_or_default())
    }

    fn display_names(&self, codes: &[String]) -> Result<BTreeMap<String, String>, DataError> {
        Ok(codes
            .iter()
            .filter_map(|c| self.names.get(c).map(|n| (c.clone(), n.clone())))
            .collect())
    }
}

/// Terminal whose session is a capture file on disk.
#[derive(Debug, Clone)]
pub struct CaptureTerminal {
    path: PathBuf,
}

impl CaptureTerminal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataTerminal for CaptureTerminal {
    type Session = CaptureSource;

    fn connect(&self) -> Result<Self::Session, DataError> {
        CaptureSource::load(&self.path)
    }
}
