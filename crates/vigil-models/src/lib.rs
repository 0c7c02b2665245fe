//! # Vigil Models
//!
//! Domain types shared across the vigil monitoring pipeline.
//!
//! ## Contents
//! - **Records**: [`AnomalyRecord`] and [`Direction`], the output of a firing
//!   z-score test, collected and reported once per run.
//! - **Series**: [`ReturnSeries`], a trailing window of daily percent
//!   returns, oldest first, with NaN marking missing trading days.
//! - **Universe**: [`AssetUniverse`] and [`Resolution`], the static table of
//!   monitored categories and how each resolves to concrete asset codes.

pub mod record;
pub mod series;
pub mod universe;

pub use record::{AnomalyRecord, Direction};
pub use series::ReturnSeries;
pub use universe::{AssetUniverse, Resolution, UniverseEntry};
