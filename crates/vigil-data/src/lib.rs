//! # Vigil Data
//!
//! The seam between the monitoring core and the market-data terminal.
//!
//! ## Contents
//! - [`MarketData`]: the three read operations the core consumes (trailing
//!   return series, sector constituents, best-effort display names).
//! - [`DataTerminal`]: scoped session acquisition; the session is connected
//!   once per run and released when dropped.
//! - [`DataError`]: the two-level failure taxonomy. `Unavailable` is
//!   recoverable (skip the asset or category and continue); `Session` is
//!   fatal to the whole run.
//! - [`CaptureSource`]: a JSONL captured-session implementation of
//!   [`MarketData`], used by the CLI and integration tests. The live vendor
//!   connector plugs in behind the same traits.

pub mod capture;
pub mod client;
pub mod error;

pub use capture::{CaptureRecord, CaptureSource, CaptureTerminal};
pub use client::{Constituent, DataTerminal, Lookback, MarketData};
pub use error::DataError;
