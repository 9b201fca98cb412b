//! Forecast Service Provider Interface
//!
//! Defines the error type, the parameter-fitting contract and the data
//! models shared by the seasonal forecasting stack.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::ParameterFitter;
pub use error::{ForecastError, Result};
pub use model::{
    Anomaly, AnomalyKind, CancellationFlag, FittedParameters, ForecastBands, HoltWintersOutput,
    SeasonalProfile, SmoothingParams, Termination,
};
