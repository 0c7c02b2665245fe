//! JSON run report.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use vigil_monitor::{CategorySummary, MonitorRun};
use vigil_models::AnomalyRecord;

/// Everything one monitoring run produced, in one serializable document.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub generated_at: DateTime<Utc>,
    pub as_of: chrono::NaiveDate,
    pub threshold_z: f64,
    pub min_days: usize,
    pub lookback_days: usize,
    pub anomaly_count: usize,
    pub anomalies: Vec<AnomalyRecord>,
    pub categories: Vec<CategorySummary>,
    pub version: String,
}

impl RunReport {
    pub fn new(run: &MonitorRun, threshold_z: f64, min_days: usize, lookback_days: usize) -> Self {
        Self {
            generated_at: Utc::now(),
            as_of: run.as_of,
            threshold_z,
            min_days,
            lookback_days,
            anomaly_count: run.anomalies.len(),
            anomalies: run.anomalies.clone(),
            categories: run.categories.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Write `anomaly_report_<as_of>.json` under `out_dir`, creating the
    /// directory when missing. Returns the written path.
    pub fn save(&self, out_dir: &Path) -> anyhow::Result<PathBuf> {
        std::fs::create_dir_all(out_dir)?;
        let path = out_dir.join(format!("anomaly_report_{}.json", self.as_of.format("%Y%m%d")));
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)?;
        info!("report saved to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn empty_run() -> MonitorRun {
        MonitorRun {
            as_of: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            anomalies: Vec::new(),
            categories: Vec::new(),
        }
    }

    #[test]
    fn test_save_writes_dated_file() {
        let dir = tempfile::tempdir().unwrap();
        let report = RunReport::new(&empty_run(), 2.0, 30, 252);
        let path = report.save(dir.path()).unwrap();

        assert!(path.ends_with("anomaly_report_20250602.json"));
        let body = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["anomaly_count"], 0);
        assert_eq!(value["threshold_z"], 2.0);
    }

    #[test]
    fn test_save_creates_missing_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("runs").join("today");
        let report = RunReport::new(&empty_run(), 2.0, 30, 252);
        assert!(report.save(&nested).is_ok());
    }
}
