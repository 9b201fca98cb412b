//! Forecast Facade
//!
//! High-level API for seasonal forecasting. Re-exports all public types
//! from the forecast stack for convenient usage.
//!
//! ```no_run
//! use forecast_facade::{detect_anomalies, forecast_bounds, holt_winters};
//!
//! let series: Vec<f64> = (0..48).map(|t| [10.0, 20.0, 15.0, 5.0][t % 4]).collect();
//! let fit = holt_winters(&series, 4, 0.5, 0.1, 0.3, 4)?;
//!
//! let arrived = [10.5, 19.0, 30.0, 5.5];
//! let mut bands = fit.bands();
//! bands.append(forecast_bounds(&fit.result, &arrived, &fit.deviation, series.len(), 0.3)?);
//!
//! let observed: Vec<f64> = series.iter().chain(&arrived).copied().collect();
//! let anomalies = detect_anomalies(&observed, &bands.ubound, &bands.lbound);
//! # Ok::<(), forecast_facade::ForecastError>(())
//! ```

// Re-export everything from API (which includes SPI)
pub use forecast_api::*;

// Explicit re-exports for documentation
pub use forecast_api::prelude;

// Re-export core modules for direct access (`holt_winters` brings the
// function of the same name along with the module)
pub use forecast_core::{
    bounds, decomposition, holt_winters, momentum, objective, optimizer, smoothing,
};

// Re-export core functions and models at root
pub use forecast_core::{
    detect_anomalies, double_exponential_smoothing, exponential_smoothing, fit_parameters,
    fitter_for, forecast_bounds, initial_seasonal_components, initial_trend, random_start, rsi,
    sse, BoundedFitter, HoltWinters, HoltWintersObjective, NelderMead, Rsi, BAND_WIDTH,
};

// Re-export SPI models not carried by the API crate
pub use forecast_spi::{Anomaly, AnomalyKind, ForecastBands, HoltWintersOutput, SeasonalProfile};
