//! # Vigil Report
//!
//! Turns a [`vigil_monitor::MonitorRun`] into the delivery shapes the
//! original reporting pipeline produced:
//!
//! - a JSON run report persisted to the output directory,
//! - a CSV spreadsheet (one row per record, columns = record fields),
//! - a markdown table for humans,
//! - a plain-text digest for push channels,
//! - an optional webhook POST of that digest.
//!
//! Rendering is pure; only [`RunReport::save`], [`spreadsheet::write_csv`]
//! and [`webhook::WebhookNotifier`] touch the outside world. Delivery
//! failures are the caller's to log; nothing here aborts a finished run.

pub mod markdown;
pub mod report;
pub mod spreadsheet;
pub mod text;
pub mod webhook;

pub use markdown::render_markdown;
pub use report::RunReport;
pub use spreadsheet::write_csv;
pub use text::render_text;
pub use webhook::WebhookNotifier;
