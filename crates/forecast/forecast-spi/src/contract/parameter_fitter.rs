//! Trait for Holt-Winters parameter search

use rand::RngCore;

use crate::error::Result;
use crate::model::FittedParameters;

/// Searches `(alpha, beta, gamma)` for a seasonal series.
///
/// Implementations draw their start point from the supplied `rng`, so a
/// seeded generator reproduces the same search.
pub trait ParameterFitter: Send + Sync {
    /// Fit smoothing constants to `series` with the given season length.
    fn fit(
        &self,
        series: &[f64],
        season_length: usize,
        rng: &mut dyn RngCore,
    ) -> Result<FittedParameters>;

    /// Short strategy name for logs.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ForecastError;
    use crate::model::Termination;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Mock fitter: returns the random start point unchanged.
    struct RandomGuess;

    impl ParameterFitter for RandomGuess {
        fn fit(
            &self,
            series: &[f64],
            season_length: usize,
            rng: &mut dyn RngCore,
        ) -> Result<FittedParameters> {
            if series.len() < 2 * season_length {
                return Err(ForecastError::insufficient_data(
                    2 * season_length,
                    series.len(),
                ));
            }
            Ok(FittedParameters {
                alpha: rng.gen(),
                beta: rng.gen(),
                gamma: rng.gen(),
                sse: 0.0,
                iterations: 0,
                termination: Termination::Converged,
            })
        }

        fn name(&self) -> &str {
            "random-guess"
        }
    }

    #[test]
    fn test_fitter_is_object_safe() {
        let fitter: Box<dyn ParameterFitter> = Box::new(RandomGuess);
        let mut rng = StdRng::seed_from_u64(7);
        let fitted = fitter.fit(&[1.0; 8], 4, &mut rng).unwrap();
        assert!(fitted.params().in_unit_cube());
        assert_eq!(fitter.name(), "random-guess");
    }

    #[test]
    fn test_same_seed_same_start() {
        let fitter = RandomGuess;
        let a = fitter.fit(&[1.0; 8], 4, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = fitter.fit(&[1.0; 8], 4, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_precondition_error_propagates() {
        let fitter = RandomGuess;
        let err = fitter
            .fit(&[1.0; 5], 4, &mut StdRng::seed_from_u64(1))
            .unwrap_err();
        assert_eq!(err, ForecastError::insufficient_data(8, 5));
    }
}
