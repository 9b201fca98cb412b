//! Sum-of-squared-errors cost
//!
//! The cost is always a finite, totally ordered value so parameter searches
//! can compare any two candidates.

use forecast_spi::Result;

use crate::decomposition::ensure_two_seasons;
use crate::holt_winters::holt_winters;

/// Sum of squared residuals over the shorter of the two sequences.
///
/// If the accumulation stops being finite (overflow, or `inf - inf` in a
/// residual) the result saturates to `f64::MAX`.
pub fn sse(values: &[f64], predictions: &[f64]) -> f64 {
    let mut total = 0.0;
    for (value, prediction) in values.iter().zip(predictions) {
        total += (value - prediction).powi(2);
        if !total.is_finite() {
            return f64::MAX;
        }
    }
    total
}

/// SSE of a Holt-Winters fit as a function of `(alpha, beta, gamma)`.
///
/// Each evaluation fits `series` and forecasts one season past it; the cost
/// compares the observations with the fitted values.
#[derive(Debug, Clone, Copy)]
pub struct HoltWintersObjective<'a> {
    series: &'a [f64],
    season_length: usize,
}

impl<'a> HoltWintersObjective<'a> {
    pub fn new(series: &'a [f64], season_length: usize) -> Result<Self> {
        ensure_two_seasons(series.len(), season_length)?;
        Ok(Self {
            series,
            season_length,
        })
    }

    pub fn series(&self) -> &'a [f64] {
        self.series
    }

    pub fn season_length(&self) -> usize {
        self.season_length
    }

    /// Raw cost at a point, without any out-of-range penalty.
    pub fn cost(&self, point: [f64; 3]) -> f64 {
        let [alpha, beta, gamma] = point;
        match holt_winters(
            self.series,
            self.season_length,
            alpha,
            beta,
            gamma,
            self.season_length,
        ) {
            Ok(output) => sse(self.series, &output.result),
            // Unreachable once `new` validated the inputs
            Err(_) => f64::MAX,
        }
    }
}
