//! Holt-Winters run output

use serde::{Deserialize, Serialize};

use super::{ForecastBands, SeasonalProfile};

/// Aligned outputs of one Holt-Winters run.
///
/// `result` covers the fitted series plus the forecast horizon, while
/// `deviation`, `ubound` and `lbound` stop at the fitted length. Use
/// `forecast_bounds` to extend the bands once real observations for the
/// horizon arrive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoltWintersOutput {
    /// Fitted values followed by `n_preds` forecasts
    pub result: Vec<f64>,
    /// Smoothed absolute error per fitted step
    pub deviation: Vec<f64>,
    /// `result + 3 * deviation` over the fitted steps
    pub ubound: Vec<f64>,
    /// `result - 3 * deviation` over the fitted steps
    pub lbound: Vec<f64>,
    /// Level after the last fitted observation
    pub level: f64,
    /// Trend after the last fitted observation
    pub trend: f64,
    /// Seasonal offsets after the last fitted observation
    pub seasonal: SeasonalProfile,
}

impl HoltWintersOutput {
    /// Number of fitted (non-forecast) steps.
    pub fn fitted_len(&self) -> usize {
        self.deviation.len()
    }

    /// In-sample fitted values.
    pub fn fitted(&self) -> &[f64] {
        &self.result[..self.fitted_len()]
    }

    /// Out-of-sample forecast tail.
    pub fn forecast(&self) -> &[f64] {
        &self.result[self.fitted_len()..]
    }

    /// Fitted deviation and bounds as one band.
    pub fn bands(&self) -> ForecastBands {
        ForecastBands {
            deviation: self.deviation.clone(),
            ubound: self.ubound.clone(),
            lbound: self.lbound.clone(),
        }
    }
}
