//! Universe-wide aggregation.

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use vigil_data::{Constituent, DataError, Lookback, MarketData};
use vigil_models::{AnomalyRecord, AssetUniverse, Resolution, UniverseEntry};

use crate::detector::{Detector, Evaluation, SkipReason};

/// Per-category tallies.
///
/// The catch-and-continue policy folds every contained failure into "zero
/// records"; these counters keep the distinction visible for logs, tests and
/// the JSON report.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub key: String,
    pub display_name: String,
    /// Assets whose series reached the detector.
    pub scanned: usize,
    pub anomalies: usize,
    pub insufficient_history: usize,
    pub degenerate: usize,
    /// Assets the source could not answer for.
    pub unavailable: usize,
    /// Sector resolution failed or returned an empty membership.
    pub resolution_failed: bool,
}

impl CategorySummary {
    fn new(entry: &UniverseEntry) -> Self {
        Self {
            key: entry.key.clone(),
            display_name: entry.display_name.clone(),
            scanned: 0,
            anomalies: 0,
            insufficient_history: 0,
            degenerate: 0,
            unavailable: 0,
            resolution_failed: false,
        }
    }
}

/// Outcome of one monitoring run.
#[derive(Debug, Clone, Serialize)]
pub struct MonitorRun {
    /// Run date used for sector resolution.
    pub as_of: NaiveDate,
    /// Flagged records across all categories, sorted by |z| descending;
    /// equal magnitudes keep encounter order.
    pub anomalies: Vec<AnomalyRecord>,
    pub categories: Vec<CategorySummary>,
}

impl MonitorRun {
    pub fn total_anomalies(&self) -> usize {
        self.anomalies.len()
    }
}

/// Walks the universe, applies the detector, aggregates the records.
#[derive(Debug, Clone)]
pub struct Monitor {
    detector: Detector,
    universe: AssetUniverse,
    lookback: Lookback,
}

impl Monitor {
    pub fn new(detector: Detector, universe: AssetUniverse, lookback: Lookback) -> Self {
        Self {
            detector,
            universe,
            lookback,
        }
    }

    pub fn detector(&self) -> &Detector {
        &self.detector
    }

    /// Run against today's date.
    pub fn run(&self, data: &impl MarketData) -> Result<MonitorRun, DataError> {
        self.run_as_of(data, Utc::now().date_naive())
    }

    /// Run with an explicit as-of date (sector membership snapshot date).
    ///
    /// Per-asset and per-category failures are contained; only
    /// [`DataError::Session`] escapes, aborting the run.
    pub fn run_as_of(
        &self,
        data: &impl MarketData,
        as_of: NaiveDate,
    ) -> Result<MonitorRun, DataError> {
        let mut anomalies = Vec::new();
        let mut categories = Vec::with_capacity(self.universe.len());

        for entry in &self.universe {
            let mut summary = CategorySummary::new(entry);
            let members = self.resolve_members(data, entry, as_of, &mut summary)?;
            if members.is_empty() {
                debug!(category = %entry.key, "no members resolved");
                categories.push(summary);
                continue;
            }

            info!(
                category = %entry.display_name,
                members = members.len(),
                "scanning category"
            );
            for member in &members {
                self.scan_asset(data, entry, member, &mut anomalies, &mut summary)?;
            }
            info!(
                category = %entry.display_name,
                anomalies = summary.anomalies,
                unavailable = summary.unavailable,
                "category done"
            );
            categories.push(summary);
        }

        // Stable sort: ties keep insertion (encounter) order.
        anomalies.sort_by(|a, b| {
            b.severity()
                .partial_cmp(&a.severity())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(MonitorRun {
            as_of,
            anomalies,
            categories,
        })
    }

    /// Resolve a category into (code, name) pairs.
    ///
    /// Sector resolution failure and direct-list name-lookup failure are both
    /// recoverable; a session failure is not and propagates.
    fn resolve_members(
        &self,
        data: &impl MarketData,
        entry: &UniverseEntry,
        as_of: NaiveDate,
        summary: &mut CategorySummary,
    ) -> Result<Vec<Constituent>, DataError> {
        match &entry.resolution {
            Resolution::Sector { sector_id } => {
                match data.sector_constituents(sector_id, as_of) {
                    Ok(members) => {
                        if members.is_empty() {
                            warn!(category = %entry.key, %sector_id, "sector resolved empty");
                            summary.resolution_failed = true;
                        }
                        Ok(members)
                    }
                    Err(err) if err.is_fatal() => Err(err),
                    Err(err) => {
                        warn!(category = %entry.key, error = %err, "sector resolution failed");
                        summary.resolution_failed = true;
                        Ok(Vec::new())
                    }
                }
            }
            Resolution::Direct { codes } => {
                let names = match data.display_names(codes) {
                    Ok(names) => names,
                    Err(err) if err.is_fatal() => return Err(err),
                    Err(err) => {
                        // Best-effort only: every code becomes its own name.
                        debug!(category = %entry.key, error = %err, "name lookup failed");
                        Default::default()
                    }
                };
                Ok(codes
                    .iter()
                    .map(|code| Constituent {
                        code: code.clone(),
                        name: names.get(code).cloned().unwrap_or_else(|| code.clone()),
                    })
                    .collect())
            }
        }
    }

    fn scan_asset(
        &self,
        data: &impl MarketData,
        entry: &UniverseEntry,
        member: &Constituent,
        anomalies: &mut Vec<AnomalyRecord>,
        summary: &mut CategorySummary,
    ) -> Result<(), DataError> {
        let series = match data.return_series(&member.code, self.lookback) {
            Ok(series) => series,
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => {
                debug!(code = %member.code, error = %err, "series unavailable");
                summary.unavailable += 1;
                return Ok(());
            }
        };

        summary.scanned += 1;
        match self
            .detector
            .evaluate(&member.code, &member.name, &entry.display_name, &series)
        {
            Evaluation::Anomaly(record) => {
                info!(
                    code = %record.code,
                    name = %record.name,
                    today = record.today_return,
                    z = record.z_score,
                    direction = %record.direction,
                    "anomaly"
                );
                summary.anomalies += 1;
                anomalies.push(record);
            }
            Evaluation::Normal => {}
            Evaluation::Skip(SkipReason::InsufficientHistory { observed, required }) => {
                debug!(code = %member.code, observed, required, "insufficient history");
                summary.insufficient_history += 1;
            }
            Evaluation::Skip(SkipReason::DegenerateSeries) => {
                debug!(code = %member.code, "degenerate series");
                summary.degenerate += 1;
            }
        }
        Ok(())
    }
}
