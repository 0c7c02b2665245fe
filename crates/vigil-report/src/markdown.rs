//! Markdown rendering.

use vigil_monitor::MonitorRun;

/// Render a run as a markdown report with one table row per record.
pub fn render_markdown(run: &MonitorRun) -> String {
    let mut lines = vec![
        "# Asset Anomaly Report".to_string(),
        String::new(),
        format!("**As of**: {}", run.as_of),
        format!("**Flagged assets**: {}", run.anomalies.len()),
        String::new(),
    ];

    if run.anomalies.is_empty() {
        lines.push("No anomalous moves today.".to_string());
        lines.push(String::new());
        return lines.join("\n");
    }

    lines.push("| Asset | Category | Return | Z | Direction |".to_string());
    lines.push("|-------|----------|-------:|--:|:---------:|".to_string());
    for record in &run.anomalies {
        lines.push(format!(
            "| {} | {} | {:+.2}% | {:+.2} | {} |",
            record.name, record.category, record.today_return, record.z_score, record.direction
        ));
    }
    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use vigil_models::{AnomalyRecord, Direction};

    fn run_with(anomalies: Vec<AnomalyRecord>) -> MonitorRun {
        MonitorRun {
            as_of: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            anomalies,
            categories: Vec::new(),
        }
    }

    fn record(name: &str, z: f64) -> AnomalyRecord {
        AnomalyRecord {
            category: "Major ETFs".to_string(),
            code: "510300.SH".to_string(),
            name: name.to_string(),
            today_return: 4.2,
            z_score: z,
            std_dev: 1.2,
            direction: if z > 0.0 { Direction::Up } else { Direction::Down },
        }
    }

    #[test]
    fn test_empty_run_renders_quiet_note() {
        let md = render_markdown(&run_with(vec![]));
        assert!(md.contains("No anomalous moves today."));
        assert!(!md.contains('|'));
    }

    #[test]
    fn test_one_row_per_record() {
        let md = render_markdown(&run_with(vec![record("CSI 300 ETF", 3.1)]));
        assert!(md.contains("**Flagged assets**: 1"));
        assert!(md.contains("| CSI 300 ETF | Major ETFs | +4.20% | +3.10 | UP |"));
    }
}
