use approx::assert_relative_eq;
use chrono::NaiveDate;
use forecast_math::MathError;
use price_forecast::metrics::evaluate_prices;
use price_forecast::{evaluate, ForecastError, ForecastPoint, Series};

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 5, 1).unwrap()
}

fn predictions(prices: &[f64]) -> Vec<ForecastPoint> {
    start()
        .iter_days()
        .skip(100)
        .zip(prices)
        .map(|(date, &price)| ForecastPoint::new(date, price))
        .collect()
}

#[test]
fn test_two_point_scenario() {
    let actual = Series::from_prices(start(), &[100.0, 110.0]).unwrap();
    let metrics = evaluate(&actual, &predictions(&[105.0, 105.0])).unwrap();

    assert_relative_eq!(metrics.mae, 5.0);
    assert_relative_eq!(metrics.rmse, 5.0);
    assert_relative_eq!(metrics.mape, 4.772727272727273, epsilon = 1e-9);
}

#[test]
fn test_alignment_truncates_to_shorter_side() {
    // Last two actuals (10, 20) against the first two predictions (11, 22)
    let actual = Series::from_prices(start(), &[500.0, 10.0, 20.0]).unwrap();
    let metrics = evaluate(&actual, &predictions(&[11.0, 22.0])).unwrap();
    assert_relative_eq!(metrics.mae, 1.5);
    assert_relative_eq!(metrics.mape, 10.0, epsilon = 1e-9);

    // More predictions than actuals: only the first one is used
    let actual = Series::from_prices(start(), &[10.0]).unwrap();
    let metrics = evaluate(&actual, &predictions(&[12.0, 1000.0, 1000.0])).unwrap();
    assert_relative_eq!(metrics.mae, 2.0);
    assert_relative_eq!(metrics.rmse, 2.0);
}

#[test]
fn test_metrics_scale_with_prices() {
    let actual = [100.0, 102.0, 98.0, 105.0];
    let predicted = [101.0, 100.0, 99.5, 103.0];
    let base = evaluate_prices(&actual, &predicted).unwrap();

    for scale in [0.01, 3.0, 250.0] {
        let scaled_actual: Vec<f64> = actual.iter().map(|p| p * scale).collect();
        let scaled_predicted: Vec<f64> = predicted.iter().map(|p| p * scale).collect();
        let scaled = evaluate_prices(&scaled_actual, &scaled_predicted).unwrap();

        assert_relative_eq!(scaled.mape, base.mape, max_relative = 1e-9);
        assert_relative_eq!(scaled.mae, base.mae * scale, max_relative = 1e-9);
        assert_relative_eq!(scaled.rmse, base.rmse * scale, max_relative = 1e-9);
    }
}

#[test]
fn test_empty_comparison() {
    let actual = Series::from_prices(start(), &[100.0]).unwrap();
    let result = evaluate(&actual, &[]);

    assert!(matches!(
        result,
        Err(ForecastError::Math(MathError::EmptyComparison))
    ));
    assert!(matches!(
        evaluate_prices(&[], &[1.0]),
        Err(ForecastError::Math(MathError::EmptyComparison))
    ));
}

#[test]
fn test_zero_actual_price_is_division_by_zero() {
    let result = evaluate_prices(&[100.0, 0.0], &[100.0, 1.0]);
    assert!(matches!(
        result,
        Err(ForecastError::Math(MathError::DivisionByZero(_)))
    ));
}

#[test]
fn test_metrics_display() {
    let metrics = evaluate_prices(&[100.0, 110.0], &[105.0, 105.0]).unwrap();
    let text = metrics.to_string();

    assert!(text.contains("MAE:  5.00"));
    assert!(text.contains("MAPE: 4.77%"));
}
