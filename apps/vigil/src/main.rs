//! vigil: daily asset anomaly monitor.
//!
//! Scans the configured asset universe against a captured data session,
//! flags statistically anomalous daily moves and writes the report bundle.
//!
//! ```bash
//! # Scan a captured session with the built-in universe
//! vigil --capture captures/session.jsonl
//!
//! # Tighter threshold, JSON to stdout, push the digest
//! vigil --capture captures/session.jsonl --threshold 2.5 --format json --notify
//! ```
//!
//! ## Exit codes
//! - 0: run completed (with or without anomalies)
//! - 2: error (bad arguments, unreadable capture, terminal failure)

mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::Settings;
use vigil_data::{CaptureTerminal, DataTerminal, Lookback};
use vigil_monitor::{Detector, Monitor};
use vigil_report::{render_markdown, render_text, write_csv, RunReport, WebhookNotifier};

/// Daily asset anomaly monitor.
#[derive(Parser, Debug)]
#[command(name = "vigil")]
#[command(version)]
#[command(about = "Flags statistically anomalous daily moves across a fixed asset universe")]
struct Cli {
    /// Captured-session JSONL file to scan.
    #[arg(long)]
    capture: PathBuf,

    /// Optional TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Z-score threshold override.
    #[arg(long)]
    threshold: Option<f64>,

    /// Minimum valid trailing observations override.
    #[arg(long)]
    min_days: Option<usize>,

    /// Lookback window override, in trading days.
    #[arg(long)]
    lookback: Option<usize>,

    /// Output directory override.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Stdout format.
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Push the text digest to the configured webhook.
    #[arg(long, default_value = "false")]
    notify: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("vigil=info,warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(threshold) = cli.threshold {
        settings.threshold_z = threshold;
    }
    if let Some(min_days) = cli.min_days {
        settings.min_days = min_days;
    }
    if let Some(lookback) = cli.lookback {
        settings.lookback_days = lookback;
    }
    if let Some(output) = cli.output {
        settings.output_dir = output;
    }

    let detector = Detector::new(settings.threshold_z, settings.min_days);
    let monitor = Monitor::new(
        detector,
        settings.universe(),
        Lookback(settings.lookback_days),
    );

    info!(
        capture = %cli.capture.display(),
        threshold_z = settings.threshold_z,
        min_days = settings.min_days,
        lookback_days = settings.lookback_days,
        "starting monitoring run"
    );

    // Session scope: connected here, released when `session` drops, on every
    // exit path below.
    let terminal = CaptureTerminal::new(&cli.capture);
    let session = terminal.connect()?;
    let run = monitor.run(&session)?;

    let report = RunReport::new(
        &run,
        settings.threshold_z,
        settings.min_days,
        settings.lookback_days,
    );
    report.save(&settings.output_dir)?;
    if !run.anomalies.is_empty() {
        write_csv(&run, &settings.output_dir)?;
    }

    match cli.format {
        OutputFormat::Text => println!("{}", render_markdown(&run)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if cli.notify {
        match settings.notify.webhook_url.as_deref() {
            Some(url) => {
                let digest = render_text(&run);
                match WebhookNotifier::new(url).and_then(|n| n.send_text(&digest)) {
                    Ok(()) => info!("digest pushed to webhook"),
                    // Delivery is best-effort; the reports are already on disk.
                    Err(e) => warn!("webhook push failed: {:#}", e),
                }
            }
            None => warn!("--notify set but no webhook_url configured"),
        }
    }

    info!(anomalies = run.total_anomalies(), "monitoring run complete");
    Ok(())
}
