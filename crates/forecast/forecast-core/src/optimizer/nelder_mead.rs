//! Nelder-Mead simplex search over `(alpha, beta, gamma)`
//!
//! The simplex holds four vertices in three dimensions. Points are never
//! clamped to the unit cube; a vertex outside it is scored
//! `(sse + 1000) * 1000` so the search walks back in on its own.

use forecast_api::NelderMeadConfig;
use forecast_spi::{CancellationFlag, FittedParameters, ParameterFitter, Result, Termination};
use rand::RngCore;
use tracing::{debug, trace};

use super::random_start;
use crate::objective::HoltWintersObjective;

const OUT_OF_RANGE_OFFSET: f64 = 1000.0;
const OUT_OF_RANGE_SCALE: f64 = 1000.0;

#[derive(Debug, Clone, Copy)]
struct Vertex {
    point: [f64; 3],
    cost: f64,
}

/// Nelder-Mead parameter fitter.
#[derive(Debug, Clone, Default)]
pub struct NelderMead {
    config: NelderMeadConfig,
    cancellation: Option<CancellationFlag>,
}

impl NelderMead {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: NelderMeadConfig) -> Self {
        Self {
            config,
            cancellation: None,
        }
    }

    /// Stop the search at the next iteration once `flag` is raised.
    pub fn with_cancellation(mut self, flag: CancellationFlag) -> Self {
        self.cancellation = Some(flag);
        self
    }

    pub fn config(&self) -> &NelderMeadConfig {
        &self.config
    }

    /// Run the simplex search from `start`.
    ///
    /// The initial simplex is `start` plus three points, each adding `step` to
    /// one more coordinate of the point before it. The returned cost is never
    /// worse than the best of those four.
    pub fn minimize(&self, objective: &HoltWintersObjective<'_>, start: [f64; 3]) -> FittedParameters {
        let config = &self.config;
        let evaluate = |point: [f64; 3]| penalized_cost(objective, point);

        let mut simplex = [Vertex {
            point: start,
            cost: evaluate(start),
        }; 4];
        let mut point = start;
        for (axis, vertex) in simplex.iter_mut().enumerate().skip(1) {
            point[axis - 1] += config.step;
            *vertex = Vertex {
                point,
                cost: evaluate(point),
            };
        }

        let mut prev_best = simplex[0].cost;
        let mut no_improve = 0;
        let mut iterations = 0;

        let termination = loop {
            simplex.sort_by(|a, b| a.cost.total_cmp(&b.cost));
            let best = simplex[0].cost;

            if self.is_cancelled() {
                break Termination::Cancelled;
            }
            if config.max_iterations.is_some_and(|max| iterations >= max) {
                break Termination::MaxIterations;
            }
            iterations += 1;

            if best < prev_best - config.no_improve_threshold {
                no_improve = 0;
                prev_best = best;
            } else {
                no_improve += 1;
            }
            if no_improve >= config.no_improve_break {
                break Termination::Converged;
            }

            let worst = simplex[3];
            let centroid = centroid(&simplex[..3]);
            let toward = |coefficient: f64| {
                let mut out = [0.0; 3];
                for k in 0..3 {
                    out[k] = centroid[k] + coefficient * (centroid[k] - worst.point[k]);
                }
                out
            };

            let reflected = toward(config.reflection);
            let reflected_cost = evaluate(reflected);
            if best <= reflected_cost && reflected_cost < simplex[2].cost {
                trace!(iteration = iterations, cost = reflected_cost, "reflect");
                simplex[3] = Vertex {
                    point: reflected,
                    cost: reflected_cost,
                };
                continue;
            }

            if reflected_cost < best {
                let expanded = toward(config.expansion);
                let expanded_cost = evaluate(expanded);
                simplex[3] = if expanded_cost < reflected_cost {
                    trace!(iteration = iterations, cost = expanded_cost, "expand");
                    Vertex {
                        point: expanded,
                        cost: expanded_cost,
                    }
                } else {
                    trace!(iteration = iterations, cost = reflected_cost, "reflect");
                    Vertex {
                        point: reflected,
                        cost: reflected_cost,
                    }
                };
                continue;
            }

            let contracted = toward(config.contraction);
            let contracted_cost = evaluate(contracted);
            if contracted_cost < worst.cost {
                trace!(iteration = iterations, cost = contracted_cost, "contract");
                simplex[3] = Vertex {
                    point: contracted,
                    cost: contracted_cost,
                };
                continue;
            }

            trace!(iteration = iterations, "shrink");
            let anchor = simplex[0].point;
            for vertex in simplex.iter_mut() {
                let mut shrunk = [0.0; 3];
                for k in 0..3 {
                    shrunk[k] = anchor[k] + config.shrink * (vertex.point[k] - anchor[k]);
                }
                *vertex = Vertex {
                    point: shrunk,
                    cost: evaluate(shrunk),
                };
            }
        };

        let [alpha, beta, gamma] = simplex[0].point;
        debug!(
            alpha,
            beta,
            gamma,
            sse = simplex[0].cost,
            iterations,
            ?termination,
            "nelder-mead finished"
        );
        FittedParameters {
            alpha,
            beta,
            gamma,
            sse: simplex[0].cost,
            iterations,
            termination,
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationFlag::is_cancelled)
    }
}

impl ParameterFitter for NelderMead {
    fn fit(
        &self,
        series: &[f64],
        season_length: usize,
        rng: &mut dyn RngCore,
    ) -> Result<FittedParameters> {
        let objective = HoltWintersObjective::new(series, season_length)?;
        let start = random_start(rng);
        debug!(?start, season_length, len = series.len(), "nelder-mead start");
        Ok(self.minimize(&objective, start))
    }

    fn name(&self) -> &str {
        "nelder-mead"
    }
}

/// Objective cost, penalized when any coordinate leaves `[0, 1]`.
fn penalized_cost(objective: &HoltWintersObjective<'_>, point: [f64; 3]) -> f64 {
    let cost = objective.cost(point);
    if point.iter().all(|c| (0.0..=1.0).contains(c)) {
        cost
    } else {
        ((cost + OUT_OF_RANGE_OFFSET) * OUT_OF_RANGE_SCALE).min(f64::MAX)
    }
}

fn centroid(vertices: &[Vertex]) -> [f64; 3] {
    let n = vertices.len() as f64;
    let mut centre = [0.0; 3];
    for vertex in vertices {
        for k in 0..3 {
            centre[k] += vertex.point[k] / n;
        }
    }
    centre
}
