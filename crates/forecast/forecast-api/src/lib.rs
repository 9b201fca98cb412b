//! Forecast Consumer API
//!
//! Consumer configurations and builder APIs for seasonal forecasting.
//!
//! This crate provides:
//! - Configuration types for Holt-Winters runs, RSI and parameter search
//! - A builder selecting the parameter search strategy
//! - Re-exports from SPI for convenience

pub mod builder;
pub mod config;

pub use builder::FitterBuilder;
pub use config::{BoundedConfig, FitStrategy, HoltWintersConfig, NelderMeadConfig, RsiConfig};

// Re-export from SPI
pub use forecast_spi::{
    CancellationFlag, FittedParameters, ForecastError, ParameterFitter, Result, SmoothingParams,
    Termination,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BoundedConfig, FitStrategy, FitterBuilder, HoltWintersConfig, NelderMeadConfig, RsiConfig,
    };
    pub use forecast_spi::{
        CancellationFlag, FittedParameters, ForecastError, ParameterFitter, Result,
        SmoothingParams, Termination,
    };
}
