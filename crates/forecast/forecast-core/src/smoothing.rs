//! Exponential smoothing baselines
//!
//! Non-seasonal smoothers that return the smoothed series with the forecast
//! steps appended:
//!
//! - **Simple**: `S_t = α * Y_t + (1 - α) * S_{t-1}`, one forecast step
//! - **Double (Holt's)**: level plus linear trend, two forecast steps
//!
//! Smoothing constants are not range-checked. Values outside `[0, 1]` still
//! produce deterministic output, just not a bounded one.

use forecast_spi::{ForecastError, Result};

/// Simple exponential smoothing with a one-step-ahead forecast.
///
/// Returns `n + 1` values: `result[0] = series[0]`, the smoothed series, then
/// `α * series[n-1] + (1 - α) * result[n-1]`.
pub fn exponential_smoothing(series: &[f64], alpha: f64) -> Result<Vec<f64>> {
    let (&first, rest) = series
        .split_first()
        .ok_or_else(|| ForecastError::insufficient_data(1, 0))?;

    let mut result = Vec::with_capacity(series.len() + 1);
    result.push(first);
    let mut level = first;
    for &value in rest {
        level = alpha * value + (1.0 - alpha) * level;
        result.push(level);
    }

    let last = series[series.len() - 1];
    result.push(alpha * last + (1.0 - alpha) * level);
    Ok(result)
}

/// Double exponential smoothing (Holt's linear trend method).
///
/// Returns `n + 2` values. Once the index passes the end of the series the
/// model feeds its own last output back in as the observation, so forecast
/// error compounds over the two extrapolated steps.
pub fn double_exponential_smoothing(series: &[f64], alpha: f64, beta: f64) -> Result<Vec<f64>> {
    let n = series.len();
    if n < 2 {
        return Err(ForecastError::insufficient_data(2, n));
    }

    let mut result = Vec::with_capacity(n + 2);
    result.push(series[0]);

    let mut level = series[0];
    let mut trend = series[1] - series[0];

    for i in 1..n + 2 {
        let value = if i >= n { result[i - 1] } else { series[i] };
        let last_level = level;
        level = alpha * value + (1.0 - alpha) * (level + trend);
        trend = beta * (level - last_level) + (1.0 - beta) * trend;
        result.push(level + trend);
    }

    Ok(result)
}
