//! Confidence band extension and anomaly flags
//!
//! After a Holt-Winters fit the deviation track stops at the last observed
//! sample. When real values for the forecast horizon arrive,
//! [`forecast_bounds`] continues the same deviation recursion over them so the
//! band can be drawn (and checked) past the last fitted sample.

use forecast_spi::{Anomaly, AnomalyKind, ForecastBands, ForecastError, Result};

use crate::holt_winters::BAND_WIDTH;

/// Extend a deviation track over newly observed values.
///
/// `prediction[i + slen]` is the forecast aligned with `real[i]`; callers
/// extending a fit pass the fitted series length as `slen`. The deviation for
/// `real[i]` blends its absolute error with the track value `slen - 1` steps
/// back, where the track is `dev` followed by the values produced so far.
///
/// Returns one band entry per element of `real`.
pub fn forecast_bounds(
    prediction: &[f64],
    real: &[f64],
    dev: &[f64],
    slen: usize,
    gamma: f64,
) -> Result<ForecastBands> {
    let required_dev = slen.max(1);
    if dev.len() < required_dev {
        return Err(ForecastError::insufficient_data(required_dev, dev.len()));
    }
    let required_predictions = slen + real.len();
    if prediction.len() < required_predictions {
        return Err(ForecastError::insufficient_data(
            required_predictions,
            prediction.len(),
        ));
    }

    let mut track = Vec::with_capacity(dev.len() + real.len());
    track.extend_from_slice(dev);
    let mut bands = ForecastBands::with_capacity(real.len());

    for (i, &value) in real.iter().enumerate() {
        let forecast = prediction[i + slen];
        let position = dev.len() + i;
        let lookback = track[(position + 1).saturating_sub(slen).min(position - 1)];
        let deviation = (gamma * (value - forecast).abs() + (1.0 - gamma) * lookback).abs();

        track.push(deviation);
        bands.push(
            deviation,
            forecast + BAND_WIDTH * deviation,
            forecast - BAND_WIDTH * deviation,
        );
    }

    Ok(bands)
}

/// Flag every value that falls outside its `[lbound, ubound]` band.
///
/// Scans the shortest of the three sequences. Values on a bound are inside.
pub fn detect_anomalies(values: &[f64], ubound: &[f64], lbound: &[f64]) -> Vec<Anomaly> {
    values
        .iter()
        .zip(ubound.iter().zip(lbound))
        .enumerate()
        .filter_map(|(index, (&value, (&upper, &lower)))| {
            let kind = if value > upper {
                AnomalyKind::AboveUpper
            } else if value < lower {
                AnomalyKind::BelowLower
            } else {
                return None;
            };
            Some(Anomaly {
                index,
                value,
                lower,
                upper,
                kind,
            })
        })
        .collect()
}
