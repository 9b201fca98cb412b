//! Holt-Winters triple exponential smoothing with deviation bands
//!
//! # Algorithm (additive)
//!
//! ```text
//! Level:     L_t = α (x_t - S_p) + (1 - α)(L_{t-1} + T_{t-1})
//! Trend:     T_t = β (L_t - L_{t-1}) + (1 - β) T_{t-1}
//! Season:    S_p = γ (x_t - L_t) + (1 - γ) S_p            p = t mod m
//! Fitted:    F_t = L_t + T_t + S_p
//! Deviation: D_t = |γ |x_t - F_t| + (1 - γ) D_{t-m+1}|
//! Bounds:    F_t ± 3 D_t
//! Forecast:  F_{n-1+h} = L_{n-1} + h T_{n-1} + S_{(n-1+h) mod m}
//! ```
//!
//! The seasonal profile is seeded from [`initial_seasonal_components`] and
//! then overwritten phase by phase. The forecast tail extends `result` only;
//! deviation and bounds stay at the fitted length.

use forecast_api::HoltWintersConfig;
use forecast_spi::{HoltWintersOutput, Result, SmoothingParams};

use crate::decomposition::{initial_seasonal_components, initial_trend};

/// Width of the confidence band in deviations.
pub const BAND_WIDTH: f64 = 3.0;

/// Fit `series` and forecast `n_preds` steps past it.
///
/// Requires `season_length > 0` and at least two full seasons of data.
/// Smoothing constants are used as given.
pub fn holt_winters(
    series: &[f64],
    season_length: usize,
    alpha: f64,
    beta: f64,
    gamma: f64,
    n_preds: usize,
) -> Result<HoltWintersOutput> {
    let mut seasonal = initial_seasonal_components(series, season_length)?;
    let mut trend = initial_trend(series, season_length)?;
    let mut smooth = series[0];

    let n = series.len();
    let mut result = Vec::with_capacity(n + n_preds);
    let mut deviation = Vec::with_capacity(n);
    let mut ubound = Vec::with_capacity(n);
    let mut lbound = Vec::with_capacity(n);

    result.push(series[0]);
    deviation.push(0.0);
    ubound.push(series[0]);
    lbound.push(series[0]);

    for (i, &val) in series.iter().enumerate().skip(1) {
        let last_smooth = smooth;
        smooth = alpha * (val - seasonal.get(i)) + (1.0 - alpha) * (smooth + trend);
        trend = beta * (smooth - last_smooth) + (1.0 - beta) * trend;
        let season = gamma * (val - smooth) + (1.0 - gamma) * seasonal.get(i);
        seasonal.set(i, season);

        let prediction = smooth + trend + season;
        let previous = deviation[deviation_lookback(i, season_length)];
        let dev = (gamma * (val - prediction).abs() + (1.0 - gamma) * previous).abs();

        result.push(prediction);
        deviation.push(dev);
        ubound.push(prediction + BAND_WIDTH * dev);
        lbound.push(prediction - BAND_WIDTH * dev);
    }

    for m in 1..=n_preds {
        let i = n + m - 1;
        result.push(smooth + m as f64 * trend + seasonal.get(i));
    }

    Ok(HoltWintersOutput {
        result,
        deviation,
        ubound,
        lbound,
        level: smooth,
        trend,
        seasonal,
    })
}

/// Index of the earlier deviation blended into step `i`.
///
/// Steps `i - m + 1` back in the deviation track; during the first partial
/// season it saturates at the initial zero deviation, and it never points at
/// the slot being written.
fn deviation_lookback(i: usize, season_length: usize) -> usize {
    (i + 1).saturating_sub(season_length).min(i - 1)
}

/// Holt-Winters model with fixed parameters.
#[derive(Debug, Clone)]
pub struct HoltWinters {
    params: SmoothingParams,
    season_length: usize,
    n_preds: usize,
}

impl HoltWinters {
    /// Forecasts one season ahead by default.
    pub fn new(params: SmoothingParams, season_length: usize) -> Self {
        Self {
            params,
            season_length,
            n_preds: season_length,
        }
    }

    pub fn from_config(config: &HoltWintersConfig) -> Self {
        Self {
            params: config.params,
            season_length: config.season_length,
            n_preds: config.n_preds,
        }
    }

    pub fn with_horizon(mut self, n_preds: usize) -> Self {
        self.n_preds = n_preds;
        self
    }

    pub fn params(&self) -> SmoothingParams {
        self.params
    }

    pub fn season_length(&self) -> usize {
        self.season_length
    }

    pub fn horizon(&self) -> usize {
        self.n_preds
    }

    /// Fit `series` and forecast the configured horizon.
    pub fn forecast(&self, series: &[f64]) -> Result<HoltWintersOutput> {
        let SmoothingParams { alpha, beta, gamma } = self.params;
        holt_winters(series, self.season_length, alpha, beta, gamma, self.n_preds)
    }
}
