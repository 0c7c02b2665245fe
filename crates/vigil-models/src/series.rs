//! Daily return series.

use serde::{Deserialize, Serialize};

/// Ordered sequence of daily percent returns for one asset, oldest first,
/// trading-day granularity.
///
/// Missing trading days are carried as NaN, mirroring how the terminal hands
/// back gappy history. Consumers filter with [`ReturnSeries::valid_returns`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReturnSeries {
    values: Vec<f64>,
}

impl ReturnSeries {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Raw observations, gaps included.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Observations with missing (non-finite) points dropped, order preserved.
    pub fn valid_returns(&self) -> Vec<f64> {
        self.values.iter().copied().filter(|v| v.is_finite()).collect()
    }

    /// Keep only the trailing `n` observations.
    pub fn truncate_to_last(&mut self, n: usize) {
        if self.values.len() > n {
            self.values.drain(..self.values.len() - n);
        }
    }
}

impl From<Vec<f64>> for ReturnSeries {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_returns_drops_nan() {
        let series = ReturnSeries::new(vec![0.5, f64::NAN, -0.2, f64::NAN, 1.0]);
        assert_eq!(series.len(), 5);
        assert_eq!(series.valid_returns(), vec![0.5, -0.2, 1.0]);
    }

    #[test]
    fn test_truncate_keeps_most_recent() {
        let mut series = ReturnSeries::new(vec![1.0, 2.0, 3.0, 4.0]);
        series.truncate_to_last(2);
        assert_eq!(series.values(), &[3.0, 4.0]);

        // Shorter than the window: untouched.
        let mut short = ReturnSeries::new(vec![1.0]);
        short.truncate_to_last(5);
        assert_eq!(short.len(), 1);
    }
}
