//! Parameter search builder.

use crate::config::{BoundedConfig, FitStrategy, NelderMeadConfig};

/// Builder for a [`FitStrategy`].
#[derive(Debug, Clone, Default)]
pub struct FitterBuilder {
    strategy: FitStrategy,
}

impl FitterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the simplex search.
    pub fn nelder_mead(mut self, config: NelderMeadConfig) -> Self {
        self.strategy = FitStrategy::NelderMead(config);
        self
    }

    /// Use the bounded L-BFGS search.
    pub fn bounded(mut self, config: BoundedConfig) -> Self {
        self.strategy = FitStrategy::Bounded(config);
        self
    }

    /// Cap the number of iterations of whichever strategy is selected.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        match &mut self.strategy {
            FitStrategy::NelderMead(config) => config.max_iterations = Some(max_iterations),
            FitStrategy::Bounded(config) => config.max_iterations = max_iterations as u64,
        }
        self
    }

    pub fn build(self) -> FitStrategy {
        self.strategy
    }
}
