//! Relative Strength Index

use forecast_api::RsiConfig;
use forecast_spi::{ForecastError, Result};

/// Relative Strength Index over `series` with lookback `n`.
///
/// The output has one value per input. The first `n` values are `0`
/// placeholders while the average up and down moves are seeded; the implicit
/// value before the series is `0`, so the first sample counts as a move from
/// zero. After that a rise Wilder-smooths only the up average and a fall only
/// the down average; an unchanged value leaves both as they are. The index is
/// `100 - 100 / (1 + avg_up / avg_down)`.
///
/// A zero average down move is left to IEEE arithmetic: the index is `100`
/// when the average up move is positive and `NaN` when both are zero.
pub fn rsi(series: &[f64], n: usize) -> Result<Vec<f64>> {
    if n == 0 {
        return Err(ForecastError::invalid_parameter("n", "must be positive"));
    }

    let period = n as f64;
    let mut result = Vec::with_capacity(series.len());
    let mut sum_up = 0.0;
    let mut sum_down = 0.0;
    let mut avg_up = 0.0;
    let mut avg_down = 0.0;
    let mut previous = 0.0;

    for (i, &value) in series.iter().enumerate() {
        let delta = value - previous;

        if i < n {
            sum_up += delta.max(0.0);
            sum_down += (-delta).max(0.0);
            avg_up = sum_up / period;
            avg_down = sum_down / period;
            result.push(0.0);
        } else {
            if delta > 0.0 {
                avg_up = (avg_up * (period - 1.0) + delta) / period;
            } else if delta < 0.0 {
                avg_down = (avg_down * (period - 1.0) - delta) / period;
            }
            result.push(100.0 - 100.0 / (1.0 + avg_up / avg_down));
        }
        previous = value;
    }

    Ok(result)
}

/// RSI with a fixed lookback.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    pub fn from_config(config: &RsiConfig) -> Self {
        Self::new(config.period)
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn calculate(&self, series: &[f64]) -> Result<Vec<f64>> {
        rsi(series, self.period)
    }
}

impl Default for Rsi {
    fn default() -> Self {
        Self::from_config(&RsiConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warm_up_placeholders() {
        let result = rsi(&[4.0, 2.0, 5.0, 1.0, 7.0], 3).unwrap();
        assert_eq!(result.len(), 5);
        assert_eq!(&result[..3], &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_by_hand() {
        // warm-up: +2 from the implicit zero, then -1 -> avg up 1, avg down 0.5
        // step 3: +2 -> avg up 1.5, avg down stays 0.5, RS 3
        let result = rsi(&[2.0, 1.0, 3.0], 2).unwrap();
        assert!((result[2] - 75.0).abs() < 1e-12);
    }

    #[test]
    fn test_fall_leaves_up_average() {
        // avg up stays 1, avg down (0.5 + 0.5)/2 = 0.5, RS 2
        let result = rsi(&[2.0, 1.0, 0.5], 2).unwrap();
        assert!((result[2] - (100.0 - 100.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_unchanged_value_keeps_index() {
        let result = rsi(&[2.0, 1.0, 3.0, 3.0, 3.0], 2).unwrap();
        assert!((result[2] - 75.0).abs() < 1e-12);
        assert_eq!(result[3], result[2]);
        assert_eq!(result[4], result[2]);
    }

    #[test]
    fn test_uptrend_saturates_at_100() {
        let data: Vec<f64> = (1..=10).map(f64::from).collect();
        let result = rsi(&data, 3).unwrap();
        assert!(result[3..].iter().all(|&v| v == 100.0));
    }

    #[test]
    fn test_flat_zero_series_is_nan() {
        let result = rsi(&[0.0; 6], 2).unwrap();
        assert_eq!(&result[..2], &[0.0, 0.0]);
        assert!(result[2..].iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_values_in_range() {
        let data = [44.3, 44.1, 44.2, 43.6, 44.3, 44.8, 45.1, 45.4, 45.8, 46.1, 45.9, 46.2];
        let result = rsi(&data, 5).unwrap();
        for &value in &result[5..] {
            assert!((0.0..=100.0).contains(&value));
        }
    }

    #[test]
    fn test_shorter_than_period() {
        assert_eq!(rsi(&[1.0, 2.0], 5).unwrap(), vec![0.0, 0.0]);
        assert!(rsi(&[], 3).unwrap().is_empty());
    }

    #[test]
    fn test_zero_period() {
        assert!(matches!(
            rsi(&[1.0], 0),
            Err(ForecastError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_struct_from_config() {
        let indicator = Rsi::from_config(&RsiConfig::new(3));
        assert_eq!(indicator.period(), 3);
        assert_eq!(indicator.calculate(&[1.0, 2.0, 3.0, 4.0]).unwrap()[3], 100.0);
        assert_eq!(Rsi::default().period(), 14);
    }
}
