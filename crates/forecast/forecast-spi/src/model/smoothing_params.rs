//! Smoothing parameter models

use serde::{Deserialize, Serialize};

/// Holt-Winters smoothing constants.
///
/// Each value is nominally in `[0, 1]`; the range is not enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothingParams {
    /// Level smoothing
    pub alpha: f64,
    /// Trend smoothing
    pub beta: f64,
    /// Seasonal smoothing
    pub gamma: f64,
}

impl SmoothingParams {
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self { alpha, beta, gamma }
    }

    pub fn from_array(point: [f64; 3]) -> Self {
        Self::new(point[0], point[1], point[2])
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.alpha, self.beta, self.gamma]
    }

    /// Whether every constant lies in the closed unit interval.
    pub fn in_unit_cube(&self) -> bool {
        self.to_array().iter().all(|c| (0.0..=1.0).contains(c))
    }
}

impl Default for SmoothingParams {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            beta: 0.5,
            gamma: 0.5,
        }
    }
}

/// Why a parameter search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Best cost stopped improving.
    Converged,
    /// Iteration ceiling reached.
    MaxIterations,
    /// Caller raised the cancellation flag.
    Cancelled,
    /// The underlying solver gave up; the best evaluated point is returned.
    SolverFailed,
}

/// Outcome of a parameter search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedParameters {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    /// Sum of squared errors at the returned point (penalized if the point
    /// left the unit cube).
    pub sse: f64,
    pub iterations: usize,
    pub termination: Termination,
}

impl FittedParameters {
    pub fn params(&self) -> SmoothingParams {
        SmoothingParams::new(self.alpha, self.beta, self.gamma)
    }
}
