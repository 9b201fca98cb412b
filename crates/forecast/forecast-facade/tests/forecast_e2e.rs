//! End-to-end tests for the forecast facade
//!
//! Fit parameters, forecast a season, extend the band over newly arrived
//! values and flag anomalies, using only the facade API.

use forecast_facade::{
    detect_anomalies, fit_parameters, forecast_bounds, AnomalyKind, FitStrategy, HoltWinters,
    NelderMeadConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SEASON: usize = 12;
/// Smoothing of the band over newly arrived values.
const BAND_GAMMA: f64 = 0.1;

fn traffic(t: usize) -> f64 {
    let profile = [
        40.0, 35.0, 30.0, 32.0, 45.0, 70.0, 90.0, 95.0, 85.0, 75.0, 60.0, 50.0,
    ];
    profile[t % SEASON] + 0.05 * t as f64 + ((t * 7) % 5) as f64 * 0.5
}

fn history() -> Vec<f64> {
    (0..SEASON * 6).map(traffic).collect()
}

#[test]
fn e2e_fit_forecast_extend_and_flag() {
    let series = history();
    let strategy = FitStrategy::NelderMead(NelderMeadConfig::default().with_max_iterations(500));
    let fitted = fit_parameters(&strategy, &series, SEASON, &mut StdRng::seed_from_u64(17)).unwrap();
    assert!(fitted.sse.is_finite());
    assert!(fitted.iterations <= 500);

    let output = HoltWinters::new(fitted.params(), SEASON)
        .forecast(&series)
        .unwrap();
    assert_eq!(output.forecast().len(), SEASON);

    // The next season arrives with one spike
    let mut arrived: Vec<f64> = (series.len()..series.len() + SEASON).map(traffic).collect();
    arrived[6] += 500.0;

    let extension = forecast_bounds(
        &output.result,
        &arrived,
        &output.deviation,
        series.len(),
        BAND_GAMMA,
    )
    .unwrap();
    assert_eq!(extension.len(), SEASON);

    let mut bands = output.bands();
    bands.append(extension);
    assert_eq!(bands.len(), series.len() + SEASON);

    let observed: Vec<f64> = series.iter().chain(&arrived).copied().collect();
    let anomalies = detect_anomalies(&observed, &bands.ubound, &bands.lbound);

    let spike = anomalies
        .iter()
        .find(|a| a.index == series.len() + 6)
        .expect("spike should be flagged");
    assert_eq!(spike.kind, AnomalyKind::AboveUpper);
    assert!(spike.value > spike.upper);
}

#[test]
fn e2e_forecast_follows_season() {
    let series = history();
    let params = forecast_facade::SmoothingParams::new(0.3, 0.05, 0.3);
    let output = HoltWinters::new(params, SEASON).forecast(&series).unwrap();

    // Peak of the forecast season sits where the profile peaks
    let peak = output
        .forecast()
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| (series.len() + i) % SEASON);
    assert_eq!(peak, Some(7));
}
