use chrono::{Duration, NaiveDate};
use forecast_math::MathError;
use price_forecast::{
    ForecastEngine, ForecastError, ModelKind, ModelSettings, Series, SeriesGenerator,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::rstest;

fn generated(symbol: &str, days: usize, seed: u64) -> Series {
    SeriesGenerator::default()
        .generate_as_of(
            symbol,
            days,
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            &mut StdRng::seed_from_u64(seed),
        )
        .unwrap()
}

#[rstest]
fn test_forecast_length_dates_and_positivity(
    #[values(
        ModelKind::Sma,
        ModelKind::Ema,
        ModelKind::LinearRegression,
        ModelKind::DifferencedAr,
        ModelKind::Naive
    )]
    model: ModelKind,
    #[values(1, 7, 14, 30, 60)] horizon: usize,
) {
    let series = generated("TSLA", 365, 21);
    let engine = ForecastEngine::default();

    let forecast = engine
        .forecast(&series, model, horizon, &mut StdRng::seed_from_u64(3))
        .unwrap();

    assert_eq!(forecast.len(), horizon);
    assert_eq!(forecast[0].date, series.last().date + Duration::days(1));
    for pair in forecast.windows(2) {
        assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
    }

    let floor = series.last_price() * 0.8;
    for point in &forecast {
        assert!(point.is_prediction);
        assert!(point.price > 0.0);
        assert!(point.price >= floor);
        assert!(point.price.is_finite());
    }
}

#[test]
fn test_forecast_is_floored_at_eighty_percent() {
    // A steep decline pushes the linear extrapolation well under the floor
    let prices: Vec<f64> = (0..60).map(|i| 1000.0 - 15.0 * i as f64).collect();
    let series = Series::from_prices(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), &prices).unwrap();

    let forecast = ForecastEngine::default()
        .forecast(&series, ModelKind::LinearRegression, 30, &mut StdRng::seed_from_u64(0))
        .unwrap();

    // Unfloored the first step would be 1000 - 15 * 61 = 85, under the floor of 92
    let floor = series.last_price() * 0.8;
    assert!((floor - 92.0).abs() < 1e-9);
    assert!(forecast.iter().all(|p| (p.price - floor).abs() < 1e-9));
}

#[test]
fn test_same_seed_same_forecast() {
    let series = generated("AAPL", 120, 9);
    let engine = ForecastEngine::default();

    let first = engine
        .forecast(&series, ModelKind::DifferencedAr, 14, &mut StdRng::seed_from_u64(77))
        .unwrap();
    let second = engine
        .forecast(&series, ModelKind::DifferencedAr, 14, &mut StdRng::seed_from_u64(77))
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_zero_horizon_is_rejected() {
    let series = generated("AAPL", 30, 1);
    let result = ForecastEngine::default().forecast(
        &series,
        ModelKind::Sma,
        0,
        &mut StdRng::seed_from_u64(0),
    );

    assert!(matches!(result, Err(ForecastError::InvalidParameter(_))));
}

#[test]
fn test_model_errors_propagate() {
    let short = generated("AAPL", 5, 1);
    let engine = ForecastEngine::default();
    let mut rng = StdRng::seed_from_u64(0);

    assert!(matches!(
        engine.forecast(&short, ModelKind::Sma, 7, &mut rng),
        Err(ForecastError::Math(MathError::InsufficientData(_)))
    ));

    let single = generated("AAPL", 1, 1);
    assert!(matches!(
        engine.forecast(&single, ModelKind::LinearRegression, 7, &mut rng),
        Err(ForecastError::Math(MathError::DegenerateFit(_)))
    ));

    // EMA and the naive fallback work from a single point
    assert_eq!(engine.forecast(&single, ModelKind::Ema, 7, &mut rng).unwrap().len(), 7);
    assert_eq!(engine.forecast(&single, ModelKind::Naive, 7, &mut rng).unwrap().len(), 7);
}

#[test]
fn test_custom_settings() {
    let settings = ModelSettings {
        sma_window: 3,
        smoothing_jitter: 0.0,
        ..ModelSettings::default()
    };
    let engine = ForecastEngine::new(settings).unwrap();
    let series = Series::from_prices(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        &[100.0, 101.0, 99.0, 102.0, 103.0],
    )
    .unwrap();

    let forecast = engine
        .forecast(&series, ModelKind::Sma, 2, &mut StdRng::seed_from_u64(0))
        .unwrap();
    assert!((forecast[0].price - 304.0 / 3.0).abs() < 1e-9);

    let invalid = ModelSettings {
        floor_ratio: 1.5,
        ..ModelSettings::default()
    };
    assert!(matches!(
        ForecastEngine::new(invalid),
        Err(ForecastError::InvalidParameter(_))
    ));
}

#[rstest]
#[case(ModelKind::Sma)]
#[case(ModelKind::Ema)]
#[case(ModelKind::LinearRegression)]
#[case(ModelKind::DifferencedAr)]
fn test_backtest_on_holdout(#[case] model: ModelKind) {
    let series = generated("GOOGL", 365, 12);
    let metrics = ForecastEngine::default()
        .backtest(&series, model, 30, &mut StdRng::seed_from_u64(5))
        .unwrap();

    assert!(metrics.mae >= 0.0);
    assert!(metrics.rmse + 1e-9 >= metrics.mae);
    assert!(metrics.mape >= 0.0 && metrics.mape.is_finite());
}

#[test]
fn test_backtest_needs_more_than_holdout() {
    let series = generated("GOOGL", 30, 12);
    let result = ForecastEngine::default().backtest(
        &series,
        ModelKind::Naive,
        30,
        &mut StdRng::seed_from_u64(5),
    );

    assert!(matches!(
        result,
        Err(ForecastError::Math(MathError::InsufficientData(_)))
    ));
}
