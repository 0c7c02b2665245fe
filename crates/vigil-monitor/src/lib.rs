//! # Vigil Monitor
//!
//! The monitoring core: a rolling z-score test per asset and the loop that
//! fans it out across the configured universe.
//!
//! ## Pipeline
//! 1. [`Monitor::run`] walks the universe in config order.
//! 2. Each category resolves to (code, name) pairs: dynamically for sector
//!    categories, statically for direct code lists.
//! 3. [`Detector::evaluate`] classifies each asset's trailing return series.
//! 4. Flagged records are collected and stable-sorted by |z| descending.
//!
//! ## Failure policy
//! Data-level failures (one asset, one sector) are contained: logged, tallied
//! in the category summary, never raised past the aggregator. Only a
//! session-level failure aborts the run.

pub mod aggregator;
pub mod detector;

pub use aggregator::{CategorySummary, Monitor, MonitorRun};
pub use detector::{Detector, Evaluation, SkipReason, DEFAULT_MIN_DAYS, DEFAULT_THRESHOLD_Z};
