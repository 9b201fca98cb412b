//! Model module containing data structures

mod cancellation;
mod forecast_bands;
mod holt_winters_output;
mod seasonal_profile;
mod smoothing_params;

pub use cancellation::CancellationFlag;
pub use forecast_bands::{Anomaly, AnomalyKind, ForecastBands};
pub use holt_winters_output::HoltWintersOutput;
pub use seasonal_profile::SeasonalProfile;
pub use smoothing_params::{FittedParameters, SmoothingParams, Termination};
