//! Forecast Core
//!
//! Core implementations for seasonal forecasting: exponential smoothing
//! baselines, Holt-Winters with deviation bands, band extension and anomaly
//! flags, the SSE objective, parameter search, and RSI.

pub mod bounds;
pub mod decomposition;
pub mod holt_winters;
pub mod momentum;
pub mod objective;
pub mod optimizer;
pub mod smoothing;

// Re-export SPI types for implementations
pub use forecast_spi::{
    Anomaly, AnomalyKind, CancellationFlag, FittedParameters, ForecastBands, ForecastError,
    HoltWintersOutput, ParameterFitter, Result, SeasonalProfile, SmoothingParams, Termination,
};

// Re-export main types
pub use bounds::{detect_anomalies, forecast_bounds};
pub use decomposition::{initial_seasonal_components, initial_trend};
pub use holt_winters::{holt_winters, HoltWinters, BAND_WIDTH};
pub use momentum::{rsi, Rsi};
pub use objective::{sse, HoltWintersObjective};
pub use optimizer::{fit_parameters, fitter_for, random_start, BoundedFitter, NelderMead};
pub use smoothing::{double_exponential_smoothing, exponential_smoothing};
