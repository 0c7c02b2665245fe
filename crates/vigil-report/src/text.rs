//! Plain-text digest, sized for push channels.

use vigil_monitor::MonitorRun;

/// Render a run as a numbered plain-text digest.
pub fn render_text(run: &MonitorRun) -> String {
    if run.anomalies.is_empty() {
        return format!(
            "Asset anomaly report {}\n\nNo anomalous moves today; all assets within their normal bands.",
            run.as_of
        );
    }

    let mut lines = vec![
        format!("Asset anomaly report {}", run.as_of),
        String::new(),
        format!("{} flagged assets:", run.anomalies.len()),
        String::new(),
    ];
    for (i, record) in run.anomalies.iter().enumerate() {
        lines.push(format!(
            "{}. {} ({})\n   return {:+.2}% | z {:+.2} | {}",
            i + 1,
            record.name,
            record.category,
            record.today_return,
            record.z_score,
            record.direction
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use vigil_models::{AnomalyRecord, Direction};

    #[test]
    fn test_digest_numbers_records() {
        let run = MonitorRun {
            as_of: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            anomalies: vec![
                AnomalyRecord {
                    category: "Global Indices".to_string(),
                    code: "VIX.GI".to_string(),
                    name: "VIX".to_string(),
                    today_return: 18.0,
                    z_score: 4.5,
                    std_dev: 4.0,
                    direction: Direction::Up,
                },
                AnomalyRecord {
                    category: "Commodity Futures".to_string(),
                    code: "AU00.SHF".to_string(),
                    name: "Gold".to_string(),
                    today_return: -2.5,
                    z_score: -2.2,
                    std_dev: 1.1,
                    direction: Direction::Down,
                },
            ],
            categories: Vec::new(),
        };

        let text = render_text(&run);
        assert!(text.contains("2 flagged assets:"));
        assert!(text.contains("1. VIX (Global Indices)"));
        assert!(text.contains("2. Gold (Commodity Futures)"));
        assert!(text.contains("z -2.20"));
    }

    #[test]
    fn test_quiet_digest() {
        let run = MonitorRun {
            as_of: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            anomalies: Vec::new(),
            categories: Vec::new(),
        };
        assert!(render_text(&run).contains("No anomalous moves today"));
    }
}
