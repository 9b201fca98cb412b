//! Integration tests for the forecast facade
//!
//! Configuration, strategy selection and fitter contracts across crates.

use forecast_facade::{
    fit_parameters, fitter_for, BoundedConfig, CancellationFlag, FitStrategy, FitterBuilder,
    HoltWinters, HoltWintersConfig, HoltWintersObjective, NelderMead, NelderMeadConfig,
    ParameterFitter, Rsi, RsiConfig, SmoothingParams, Termination,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn weekly_series() -> Vec<f64> {
    let week = [20.0, 22.0, 25.0, 24.0, 28.0, 12.0, 10.0];
    (0..42)
        .map(|t| week[t % 7] + 0.1 * t as f64 + ((t * 3) % 5) as f64 * 0.4)
        .collect()
}

#[test]
fn test_config_json_drives_model() {
    let json = r#"{
        "season_length": 7,
        "params": {"alpha": 0.4, "beta": 0.05, "gamma": 0.3},
        "n_preds": 14
    }"#;
    let config: HoltWintersConfig = serde_json::from_str(json).unwrap();
    let output = HoltWinters::from_config(&config).forecast(&weekly_series()).unwrap();

    assert_eq!(output.forecast().len(), 14);
    assert_eq!(output.fitted_len(), 42);
}

#[test]
fn test_output_serializes() {
    let model = HoltWinters::new(SmoothingParams::new(0.3, 0.1, 0.2), 7);
    let output = model.forecast(&weekly_series()).unwrap();

    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["result"].as_array().unwrap().len(), 49);
    assert_eq!(json["deviation"].as_array().unwrap().len(), 42);
    assert_eq!(json["seasonal"]["offsets"].as_array().unwrap().len(), 7);
}

#[test]
fn test_builder_selects_strategy() {
    let strategy = FitterBuilder::new().bounded(BoundedConfig::new(20)).build();
    assert_eq!(fitter_for(&strategy).name(), "bounded-lbfgs");

    let strategy = FitterBuilder::new().max_iterations(25).build();
    match &strategy {
        FitStrategy::NelderMead(config) => assert_eq!(config.max_iterations, Some(25)),
        other => panic!("unexpected strategy {other:?}"),
    }
}

#[test]
fn test_both_strategies_improve_on_defaults() {
    let series = weekly_series();
    let objective = HoltWintersObjective::new(&series, 7).unwrap();

    for strategy in [
        FitStrategy::NelderMead(NelderMeadConfig::default()),
        FitStrategy::Bounded(BoundedConfig::new(50)),
    ] {
        let mut rng = StdRng::seed_from_u64(2024);
        let fitted = fit_parameters(&strategy, &series, 7, &mut rng).unwrap();
        assert!(fitted.sse.is_finite(), "{}", strategy.name());
        // The reported cost matches a fresh evaluation at the returned point
        if fitted.params().in_unit_cube() {
            let fresh = objective.cost(fitted.params().to_array());
            assert!((fresh - fitted.sse).abs() <= 1e-9 * fresh.max(1.0));
        }
    }
}

#[test]
fn test_nelder_mead_iteration_cap_from_config() {
    let fitter = NelderMead::from_config(NelderMeadConfig::new().with_max_iterations(4));
    let fitted = fitter
        .fit(&weekly_series(), 7, &mut StdRng::seed_from_u64(8))
        .unwrap();
    assert!(fitted.iterations <= 4);
    assert!(matches!(
        fitted.termination,
        Termination::MaxIterations | Termination::Converged
    ));
}

#[test]
fn test_cancellation_from_another_thread() {
    let flag = CancellationFlag::new();
    let handle = flag.clone();
    std::thread::spawn(move || handle.cancel()).join().unwrap();

    let fitter = NelderMead::new().with_cancellation(flag);
    let fitted = fitter
        .fit(&weekly_series(), 7, &mut StdRng::seed_from_u64(8))
        .unwrap();
    assert_eq!(fitted.termination, Termination::Cancelled);
}

#[test]
fn test_fitters_are_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NelderMead>();
    assert_send_sync::<Box<dyn ParameterFitter>>();
}

#[test]
fn test_rsi_from_config() {
    let config: RsiConfig = serde_json::from_str(r#"{"period": 5}"#).unwrap();
    let values = Rsi::from_config(&config).calculate(&weekly_series()).unwrap();
    assert_eq!(values.len(), 42);
    assert!(values[..5].iter().all(|&v| v == 0.0));
}
