//! Initial seasonal decomposition
//!
//! Estimates the starting trend and per-phase seasonal offsets that seed a
//! Holt-Winters run. Both estimates need at least two full seasons.

use forecast_spi::{ForecastError, Result, SeasonalProfile};

/// Check that `len` samples cover two seasons of `season_length`.
pub fn ensure_two_seasons(len: usize, season_length: usize) -> Result<()> {
    if season_length == 0 {
        return Err(ForecastError::invalid_parameter(
            "season_length",
            "must be positive",
        ));
    }
    let required = season_length.saturating_mul(2);
    if len < required {
        return Err(ForecastError::insufficient_data(required, len));
    }
    Ok(())
}

/// Initial trend: the mean season-over-season slope, divided by the season
/// length once more.
pub fn initial_trend(series: &[f64], season_length: usize) -> Result<f64> {
    ensure_two_seasons(series.len(), season_length)?;

    let slen = season_length as f64;
    let sum: f64 = (0..season_length)
        .map(|i| (series[i + season_length] - series[i]) / slen)
        .sum();
    Ok(sum / slen)
}

/// Initial additive seasonal offsets, one per phase.
///
/// Each whole season is centred on its own average; the offset for a phase
/// is the mean centred value at that phase across seasons. Trailing samples
/// that do not fill a season are ignored.
pub fn initial_seasonal_components(series: &[f64], season_length: usize) -> Result<SeasonalProfile> {
    ensure_two_seasons(series.len(), season_length)?;

    let season_averages: Vec<f64> = series
        .chunks_exact(season_length)
        .map(|season| season.iter().sum::<f64>() / season_length as f64)
        .collect();
    let n_seasons = season_averages.len() as f64;

    let offsets = (0..season_length)
        .map(|phase| {
            season_averages
                .iter()
                .enumerate()
                .map(|(j, avg)| series[season_length * j + phase] - avg)
                .sum::<f64>()
                / n_seasons
        })
        .collect();

    Ok(SeasonalProfile::from_offsets(offsets))
}
