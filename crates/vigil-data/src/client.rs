//! Market-data trait surface.
//!
//! The live vendor terminal sits behind these traits and is out of scope
//! here; the monitor core only ever sees [`MarketData`]. All calls are
//! synchronous and blocking: the core is single-threaded and sequential,
//! so throughput or retry layers belong above this seam, not inside it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use vigil_models::ReturnSeries;

use crate::error::DataError;

/// Trailing window requested from the data source, in trading days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lookback(pub usize);

impl Lookback {
    /// One calendar year of trading days.
    pub const ONE_YEAR: Lookback = Lookback(252);

    pub fn trading_days(&self) -> usize {
        self.0
    }
}

impl Default for Lookback {
    fn default() -> Self {
        Self::ONE_YEAR
    }
}

impl std::fmt::Display for Lookback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}TD", self.0)
    }
}

/// One (code, display name) member of a resolved sector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constituent {
    pub code: String,
    pub name: String,
}

/// Read operations consumed by the monitoring core.
pub trait MarketData {
    /// Trailing daily percent returns for one asset, oldest first.
    ///
    /// Fails with [`DataError::Unavailable`] when the asset is unknown and
    /// [`DataError::Session`] when the terminal is down.
    fn return_series(&self, code: &str, lookback: Lookback) -> Result<ReturnSeries, DataError>;

    /// Constituent list of a sector as of `as_of`.
    ///
    /// An unresolved sector yields an empty list, not an error.
    fn sector_constituents(
        &self,
        sector_id: &str,
        as_of: NaiveDate,
    ) -> Result<Vec<Constituent>, DataError>;

    /// Best-effort display-name lookup. Codes without a known name are simply
    /// absent from the result; callers fall back to the code itself.
    fn display_names(&self, codes: &[String]) -> Result<BTreeMap<String, String>, DataError>;
}

/// Scoped acquisition of the single terminal session a run uses.
///
/// `connect` is called once at the start of a run; the returned session is
/// released when dropped, on every exit path. Connection failure is a
/// [`DataError::Session`] and prevents any category processing.
pub trait DataTerminal {
    type Session: MarketData;

    fn connect(&self) -> Result<Self::Session, DataError>;
}
