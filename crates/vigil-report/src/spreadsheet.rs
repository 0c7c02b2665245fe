//! CSV spreadsheet export.

use std::path::{Path, PathBuf};
use tracing::info;

use vigil_monitor::MonitorRun;

/// Write `anomaly_report_<as_of>.csv` under `out_dir`: a header row then one
/// row per record, columns = record fields. Returns the written path.
pub fn write_csv(run: &MonitorRun, out_dir: &Path) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(out_dir)?;
    let path = out_dir.join(format!("anomaly_report_{}.csv", run.as_of.format("%Y%m%d")));

    let mut writer = csv::Writer::from_path(&path)?;
    for record in &run.anomalies {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!(
        rows = run.anomalies.len(),
        "spreadsheet saved to {}",
        path.display()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use vigil_models::{AnomalyRecord, Direction};

    #[test]
    fn test_csv_has_header_and_rows() {
        let run = MonitorRun {
            as_of: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            anomalies: vec![AnomalyRecord {
                category: "Major ETFs".to_string(),
                code: "510300.SH".to_string(),
                name: "CSI 300 ETF".to_string(),
                today_return: 4.2,
                z_score: 3.1,
                std_dev: 1.2,
                direction: Direction::Up,
            }],
            categories: Vec::new(),
        };

        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&run, dir.path()).unwrap();
        let body = std::fs::read_to_string(&path).unwrap();
        let mut lines = body.lines();

        assert_eq!(
            lines.next().unwrap(),
            "category,code,name,today_return,z_score,std_dev,direction"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("Major ETFs,510300.SH,CSI 300 ETF,"));
        assert!(row.ends_with(",up"));
    }
}
