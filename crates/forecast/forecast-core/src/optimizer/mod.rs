//! Holt-Winters parameter search
//!
//! Two strategies implement [`ParameterFitter`]:
//!
//! - [`NelderMead`]: simplex search that penalizes points outside `[0, 1]^3`
//! - [`BoundedFitter`]: L-BFGS in logistic coordinates, never leaves the cube
//!
//! [`FitStrategy`] selects one from configuration.

mod bounded;
mod nelder_mead;

pub use bounded::BoundedFitter;
pub use nelder_mead::NelderMead;

use forecast_api::FitStrategy;
use forecast_spi::{FittedParameters, ParameterFitter, Result};
use rand::{Rng, RngCore};

/// Uniform random start point in `[0, 1]^3`, rounded to three decimals.
pub fn random_start(rng: &mut dyn RngCore) -> [f64; 3] {
    let mut draw = || (rng.gen::<f64>() * 1000.0).round() / 1000.0;
    [draw(), draw(), draw()]
}

/// Build the fitter a strategy describes.
pub fn fitter_for(strategy: &FitStrategy) -> Box<dyn ParameterFitter> {
    match strategy {
        FitStrategy::NelderMead(config) => Box::new(NelderMead::from_config(config.clone())),
        FitStrategy::Bounded(config) => Box::new(BoundedFitter::from_config(config.clone())),
    }
}

/// Fit `(alpha, beta, gamma)` to `series` with the chosen strategy.
pub fn fit_parameters(
    strategy: &FitStrategy,
    series: &[f64],
    season_length: usize,
    rng: &mut dyn RngCore,
) -> Result<FittedParameters> {
    fitter_for(strategy).fit(series, season_length, rng)
}
