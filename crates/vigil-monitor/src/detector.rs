//! Per-asset z-score test.
//!
//! The baseline window is the full retained history including the most
//! recent point. That measures "how extreme is today relative to its own
//! trailing distribution" and slightly dampens the score on the day being
//! tested; the behavior is intentional and must not be narrowed to an
//! exclusive window.

use vigil_models::{AnomalyRecord, Direction, ReturnSeries};

/// Default number of standard deviations that makes a move anomalous.
pub const DEFAULT_THRESHOLD_Z: f64 = 2.0;

/// Default minimum count of valid trailing observations before testing.
pub const DEFAULT_MIN_DAYS: usize = 30;

/// Why an asset produced no record despite being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Fewer than the required valid observations. Normal, not an error.
    InsufficientHistory { observed: usize, required: usize },
    /// Zero variance; the z-score is undefined. Normal, not an error.
    DegenerateSeries,
}

/// Three-way outcome of one evaluation.
///
/// `Normal` (tested, in band) and `Skip` (not testable) are kept distinct so
/// callers can tell "no anomaly" from "no signal", even though reports fold
/// both into silence.
#[derive(Debug, Clone)]
pub enum Evaluation {
    Anomaly(AnomalyRecord),
    Normal,
    Skip(SkipReason),
}

impl Evaluation {
    pub fn into_record(self) -> Option<AnomalyRecord> {
        match self {
            Evaluation::Anomaly(record) => Some(record),
            _ => None,
        }
    }
}

/// Rolling mean/standard-deviation z-score classifier.
#[derive(Debug, Clone, Copy)]
pub struct Detector {
    threshold_z: f64,
    min_days: usize,
}

impl Default for Detector {
    fn default() -> Self {
        Self {
            threshold_z: DEFAULT_THRESHOLD_Z,
            min_days: DEFAULT_MIN_DAYS,
        }
    }
}

impl Detector {
    pub fn new(threshold_z: f64, min_days: usize) -> Self {
        Self {
            threshold_z,
            min_days,
        }
    }

    pub fn threshold_z(&self) -> f64 {
        self.threshold_z
    }

    pub fn min_days(&self) -> usize {
        self.min_days
    }

    /// Classify the most recent observation of `series`.
    ///
    /// Missing values are dropped first; strictly more than `min_days` valid
    /// observations and a strictly positive standard deviation are required
    /// before a record can be emitted.
    pub fn evaluate(
        &self,
        code: &str,
        name: &str,
        category: &str,
        series: &ReturnSeries,
    ) -> Evaluation {
        let returns = series.valid_returns();
        if returns.len() <= self.min_days {
            return Evaluation::Skip(SkipReason::InsufficientHistory {
                observed: returns.len(),
                required: self.min_days,
            });
        }

        let (mean, std) = sample_mean_std(&returns);
        if std <= 0.0 {
            return Evaluation::Skip(SkipReason::DegenerateSeries);
        }

        let today_return = returns[returns.len() - 1];
        let z_score = (today_return - mean) / std;
        if z_score.abs() <= self.threshold_z {
            return Evaluation::Normal;
        }

        Evaluation::Anomaly(AnomalyRecord {
            category: category.to_string(),
            code: code.to_string(),
            name: name.to_string(),
            today_return,
            z_score,
            std_dev: std,
            direction: if z_score > 0.0 {
                Direction::Up
            } else {
                Direction::Down
            },
        })
    }
}

/// Sample mean and sample standard deviation (n - 1 denominator).
fn sample_mean_std(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    if values.len() < 2 {
        return (mean, 0.0);
    }
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, var.sqrt())
}
