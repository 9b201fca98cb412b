//! Box-constrained parameter search with L-BFGS
//!
//! argmin's L-BFGS is unconstrained, so the search runs over `z` with
//! `x = 1 / (1 + e^-z)` per coordinate. Every evaluated point then lies in
//! the open unit cube and no penalty is needed. Gradients are central finite
//! differences in `z`.

use std::cell::Cell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use argmin::core::observers::{Observe, ObserverMode};
use argmin::core::{CostFunction, Error as ArgminError, Executor, Gradient, KV};
use argmin::solver::linesearch::MoreThuenteLineSearch;
use argmin::solver::quasinewton::LBFGS;
use finitediff::FiniteDiff;
use forecast_api::BoundedConfig;
use forecast_spi::{CancellationFlag, FittedParameters, ParameterFitter, Result, Termination};
use rand::RngCore;
use tracing::{debug, warn};

use super::random_start;
use crate::objective::HoltWintersObjective;

/// Start coordinates are kept this far inside the unit interval so the
/// inverse transform stays finite.
const EDGE_MARGIN: f64 = 1e-3;

fn logistic(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

fn logit(x: f64) -> f64 {
    (x / (1.0 - x)).ln()
}

fn to_unit_cube(z: &[f64]) -> [f64; 3] {
    [logistic(z[0]), logistic(z[1]), logistic(z[2])]
}

/// Objective in reparametrized coordinates, remembering the best point seen.
struct LogisticProblem<'a> {
    objective: &'a HoltWintersObjective<'a>,
    best: &'a Cell<([f64; 3], f64)>,
    cancellation: Option<&'a CancellationFlag>,
}

impl LogisticProblem<'_> {
    fn evaluate(&self, z: &[f64]) -> f64 {
        let point = to_unit_cube(z);
        let cost = self.objective.cost(point);
        if cost < self.best.get().1 {
            self.best.set((point, cost));
        }
        cost
    }
}

impl CostFunction for LogisticProblem<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, z: &Self::Param) -> std::result::Result<Self::Output, ArgminError> {
        if self.cancellation.is_some_and(CancellationFlag::is_cancelled) {
            return Err(ArgminError::msg("cancelled"));
        }
        Ok(self.evaluate(z))
    }
}

impl Gradient for LogisticProblem<'_> {
    type Param = Vec<f64>;
    type Gradient = Vec<f64>;

    fn gradient(&self, z: &Self::Param) -> std::result::Result<Self::Gradient, ArgminError> {
        Ok(z.central_diff(&|z: &Vec<f64>| self.evaluate(z)))
    }
}

/// Counts completed solver iterations.
///
/// The count lives outside the executor so it is still readable when the run
/// ends in an error.
#[derive(Debug, Clone, Default)]
struct IterationCounter {
    completed: Arc<AtomicU64>,
}

impl IterationCounter {
    fn get(&self) -> u64 {
        self.completed.load(Ordering::Relaxed)
    }
}

impl<I> Observe<I> for IterationCounter {
    fn observe_iter(&mut self, _state: &I, _kv: &KV) -> std::result::Result<(), ArgminError> {
        self.completed.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

/// L-BFGS fitter confined to `[0, 1]^3`.
#[derive(Debug, Clone, Default)]
pub struct BoundedFitter {
    config: BoundedConfig,
    cancellation: Option<CancellationFlag>,
}

impl BoundedFitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: BoundedConfig) -> Self {
        Self {
            config,
            cancellation: None,
        }
    }

    /// Abort the solver at its next cost evaluation once `flag` is raised.
    pub fn with_cancellation(mut self, flag: CancellationFlag) -> Self {
        self.cancellation = Some(flag);
        self
    }

    pub fn config(&self) -> &BoundedConfig {
        &self.config
    }

    /// Minimize from `start`, nudged into the open unit cube.
    ///
    /// A solver error is not propagated: the best point evaluated so far is
    /// returned with [`Termination::SolverFailed`], or
    /// [`Termination::Cancelled`] if the caller stopped the run. Either way
    /// `iterations` counts the iterations completed before the stop.
    pub fn minimize(&self, objective: &HoltWintersObjective<'_>, start: [f64; 3]) -> FittedParameters {
        let start = start.map(|x| x.clamp(EDGE_MARGIN, 1.0 - EDGE_MARGIN));
        let best = Cell::new((start, objective.cost(start)));
        let counter = IterationCounter::default();

        let outcome = self.run_solver(objective, start, &best, counter.clone());
        let (point, sse) = best.get();
        let completed = counter.get();
        let termination = match outcome {
            Ok(()) if completed >= self.config.max_iterations => Termination::MaxIterations,
            Ok(()) => Termination::Converged,
            Err(_) if self.is_cancelled() => Termination::Cancelled,
            Err(err) => {
                warn!(error = %err, sse, completed, "bounded solver failed; keeping best evaluated point");
                Termination::SolverFailed
            }
        };
        let iterations = completed as usize;

        let [alpha, beta, gamma] = point;
        debug!(alpha, beta, gamma, sse, iterations, ?termination, "bounded-lbfgs finished");
        FittedParameters {
            alpha,
            beta,
            gamma,
            sse,
            iterations,
            termination,
        }
    }

    fn run_solver(
        &self,
        objective: &HoltWintersObjective<'_>,
        start: [f64; 3],
        best: &Cell<([f64; 3], f64)>,
        counter: IterationCounter,
    ) -> std::result::Result<(), ArgminError> {
        let problem = LogisticProblem {
            objective,
            best,
            cancellation: self.cancellation.as_ref(),
        };
        let init: Vec<f64> = start.iter().map(|&x| logit(x)).collect();

        let linesearch = MoreThuenteLineSearch::new();
        let solver = LBFGS::new(linesearch, self.config.lbfgs_memory)
            .with_tolerance_grad(self.config.tolerance_grad)?;

        Executor::new(problem, solver)
            .configure(|state| state.param(init).max_iters(self.config.max_iterations))
            .add_observer(counter, ObserverMode::Always)
            .run()?;
        Ok(())
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationFlag::is_cancelled)
    }
}

impl ParameterFitter for BoundedFitter {
    fn fit(
        &self,
        series: &[f64],
        season_length: usize,
        rng: &mut dyn RngCore,
    ) -> Result<FittedParameters> {
        let objective = HoltWintersObjective::new(series, season_length)?;
        let start = random_start(rng);
        debug!(?start, season_length, len = series.len(), "bounded-lbfgs start");
        Ok(self.minimize(&objective, start))
    }

    fn name(&self) -> &str {
        "bounded-lbfgs"
    }
}
