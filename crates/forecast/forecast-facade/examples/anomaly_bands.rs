//! Fit, forecast, extend the band and flag anomalies
//!
//! Run with: cargo run --example anomaly_bands -p forecast-facade
//! Set RUST_LOG=forecast_core=trace to see every simplex step.

use forecast_facade::{
    detect_anomalies, fit_parameters, forecast_bounds, rsi, FitterBuilder, HoltWinters,
    NelderMeadConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SEASON: usize = 24;

fn hourly_load(t: usize) -> f64 {
    let hour = (t % SEASON) as f64;
    let daily = (hour / SEASON as f64 * std::f64::consts::TAU).sin() * 20.0;
    100.0 + daily + 0.02 * t as f64 + ((t * 13) % 7) as f64 * 0.8
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "anomaly_bands=info,forecast_core=debug".into()),
        )
        .init();

    let history: Vec<f64> = (0..SEASON * 7).map(hourly_load).collect();
    info!(points = history.len(), season = SEASON, "loaded history");

    // 1. Parameter search
    let strategy = FitterBuilder::new()
        .nelder_mead(NelderMeadConfig::default())
        .max_iterations(1_000)
        .build();
    let fitted = fit_parameters(&strategy, &history, SEASON, &mut StdRng::seed_from_u64(7))?;
    info!(
        strategy = strategy.name(),
        alpha = fitted.alpha,
        beta = fitted.beta,
        gamma = fitted.gamma,
        sse = fitted.sse,
        "fitted parameters"
    );

    // 2. Forecast one day ahead
    let output = HoltWinters::new(fitted.params(), SEASON).forecast(&history)?;
    let preview: Vec<String> = output.forecast()[..6]
        .iter()
        .map(|v| format!("{v:.1}"))
        .collect();
    info!(?preview, "forecast head");

    // 3. The day arrives with an outage at hour 15
    let mut arrived: Vec<f64> = (history.len()..history.len() + SEASON)
        .map(hourly_load)
        .collect();
    arrived[15] = 5.0;

    let extension = forecast_bounds(
        &output.result,
        &arrived,
        &output.deviation,
        history.len(),
        0.1,
    )?;
    let mut bands = output.bands();
    bands.append(extension);

    // 4. Flag anything outside the band
    let observed: Vec<f64> = history.iter().chain(&arrived).copied().collect();
    for anomaly in detect_anomalies(&observed, &bands.ubound, &bands.lbound) {
        info!(
            index = anomaly.index,
            value = anomaly.value,
            lower = anomaly.lower,
            upper = anomaly.upper,
            kind = ?anomaly.kind,
            "anomaly"
        );
    }

    // 5. Momentum over the observed load
    let momentum = rsi(&observed, 14)?;
    if let Some(last) = momentum.last() {
        info!(rsi = *last, "latest RSI");
    }

    Ok(())
}
