//! Anomaly records emitted by the detector.

use serde::{Deserialize, Serialize};

/// Direction of an anomalous daily move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "UP"),
            Direction::Down => write!(f, "DOWN"),
        }
    }
}

/// One flagged asset for one monitoring run.
///
/// Created only when the z-score test fires: the originating series had
/// strictly more than `min_days` valid observations and a strictly positive
/// standard deviation. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyRecord {
    /// Display name of the category the asset was scanned under.
    pub category: String,
    /// Vendor asset code, e.g. `000300.SH`.
    pub code: String,
    /// Resolved display name; falls back to the code when no name is known.
    pub name: String,
    /// Most recent daily return, in percent.
    pub today_return: f64,
    /// How many standard deviations today sits from the trailing mean.
    pub z_score: f64,
    /// Sample standard deviation of the trailing daily returns, in percent.
    pub std_dev: f64,
    pub direction: Direction,
}

impl AnomalyRecord {
    /// Magnitude used for report ordering.
    pub fn severity(&self) -> f64 {
        self.z_score.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Up.to_string(), "UP");
        assert_eq!(Direction::Down.to_string(), "DOWN");
    }

    #[test]
    fn test_record_serializes_flat() {
        let record = AnomalyRecord {
            category: "Global Indices".to_string(),
            code: "SPX.GI".to_string(),
            name: "S&P 500".to_string(),
            today_return: -3.2,
            z_score: -2.8,
            std_dev: 1.1,
            direction: Direction::Down,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["code"], "SPX.GI");
        assert_eq!(json["direction"], "down");
    }

    #[test]
    fn test_severity_is_absolute() {
        let record = AnomalyRecord {
            category: "ETF".to_string(),
            code: "510300.SH".to_string(),
            name: "510300.SH".to_string(),
            today_return: -4.0,
            z_score: -3.1,
            std_dev: 1.3,
            direction: Direction::Down,
        };
        assert!((record.severity() - 3.1).abs() < 1e-12);
    }
}
