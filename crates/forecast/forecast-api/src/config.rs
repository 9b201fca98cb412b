//! Forecast configuration types.

use forecast_spi::SmoothingParams;
use serde::{Deserialize, Serialize};

// ============================================================================
// Models
// ============================================================================

/// Holt-Winters run configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoltWintersConfig {
    /// Samples per seasonal cycle.
    pub season_length: usize,
    pub params: SmoothingParams,
    /// Forecast horizon appended after the fitted values.
    pub n_preds: usize,
}

impl HoltWintersConfig {
    pub fn new(season_length: usize, params: SmoothingParams) -> Self {
        Self {
            season_length,
            params,
            n_preds: season_length,
        }
    }

    pub fn with_horizon(mut self, n_preds: usize) -> Self {
        self.n_preds = n_preds;
        self
    }
}

impl Default for HoltWintersConfig {
    fn default() -> Self {
        // One day of 5-minute samples.
        Self::new(288, SmoothingParams::default())
    }
}

/// Relative Strength Index configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsiConfig {
    /// Lookback window N.
    pub period: usize,
}

impl RsiConfig {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Default for RsiConfig {
    fn default() -> Self {
        Self { period: 14 }
    }
}

// ============================================================================
// Parameter Search
// ============================================================================

/// Nelder-Mead simplex configuration.
///
/// The defaults are the textbook coefficients with a stagnation rule of ten
/// iterations improving by no more than `1e-5`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NelderMeadConfig {
    /// Offset used to build the initial simplex around the random seed.
    pub step: f64,
    pub reflection: f64,
    pub expansion: f64,
    pub contraction: f64,
    pub shrink: f64,
    /// Minimum decrease of the best cost that counts as progress.
    pub no_improve_threshold: f64,
    /// Consecutive stagnant iterations before stopping.
    pub no_improve_break: usize,
    /// Optional hard ceiling on iterations.
    pub max_iterations: Option<usize>,
}

impl NelderMeadConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn with_stagnation(mut self, threshold: f64, iterations: usize) -> Self {
        self.no_improve_threshold = threshold;
        self.no_improve_break = iterations;
        self
    }
}

impl Default for NelderMeadConfig {
    fn default() -> Self {
        Self {
            step: 0.001,
            reflection: 1.0,
            expansion: 2.0,
            contraction: -0.5,
            shrink: 0.5,
            no_improve_threshold: 1e-5,
            no_improve_break: 10,
            max_iterations: None,
        }
    }
}

/// Bounded quasi-Newton (L-BFGS) configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundedConfig {
    pub max_iterations: u64,
    /// Number of correction pairs kept by L-BFGS.
    pub lbfgs_memory: usize,
    /// Gradient norm below which the solver stops.
    pub tolerance_grad: f64,
}

impl BoundedConfig {
    pub fn new(max_iterations: u64) -> Self {
        Self {
            max_iterations,
            ..Self::default()
        }
    }
}

impl Default for BoundedConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            lbfgs_memory: 7,
            tolerance_grad: 1e-6,
        }
    }
}

/// Parameter search strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FitStrategy {
    /// Custom simplex search with out-of-range penalties.
    NelderMead(NelderMeadConfig),
    /// Box-constrained L-BFGS over `[0, 1]^3`.
    Bounded(BoundedConfig),
}

impl Default for FitStrategy {
    fn default() -> Self {
        FitStrategy::NelderMead(NelderMeadConfig::default())
    }
}

impl FitStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            FitStrategy::NelderMead(_) => "nelder-mead",
            FitStrategy::Bounded(_) => "bounded-lbfgs",
        }
    }
}
