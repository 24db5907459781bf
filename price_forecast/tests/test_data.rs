use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use price_forecast::{ForecastError, PricePoint, Series};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

#[test]
fn test_series_from_prices() {
    let series = Series::from_prices(day(1), &[100.0, 103.0, 106.0]).unwrap();

    assert_eq!(series.len(), 3);
    assert!(!series.is_empty());
    assert_eq!(series.first().date, day(1));
    assert_eq!(series.last().date, day(3));
    assert_eq!(series.last_price(), 106.0);
    assert_eq!(series.prices(), vec![100.0, 103.0, 106.0]);
}

#[test]
fn test_series_rejects_invalid_points() {
    let empty = Series::new(Vec::new());
    assert!(matches!(empty, Err(ForecastError::DataError(_))));

    let duplicate = Series::new(vec![
        PricePoint::new(day(1), 100.0, 10),
        PricePoint::new(day(1), 101.0, 10),
    ]);
    assert!(matches!(duplicate, Err(ForecastError::DataError(_))));

    let backwards = Series::new(vec![
        PricePoint::new(day(2), 100.0, 10),
        PricePoint::new(day(1), 101.0, 10),
    ]);
    assert!(matches!(backwards, Err(ForecastError::DataError(_))));

    let non_positive = Series::from_prices(day(1), &[100.0, 0.0]);
    assert!(matches!(non_positive, Err(ForecastError::DataError(_))));

    let nan = Series::from_prices(day(1), &[f64::NAN]);
    assert!(matches!(nan, Err(ForecastError::DataError(_))));
}

#[test]
fn test_tail_and_holdout_split() {
    let series = Series::from_prices(day(1), &[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();

    assert_eq!(series.tail(2).unwrap().prices(), vec![4.0, 5.0]);
    assert_eq!(series.tail(10).unwrap().len(), 5);

    let (train, test) = series.split_holdout(2).unwrap();
    assert_eq!(train.prices(), vec![1.0, 2.0, 3.0]);
    assert_eq!(test.prices(), vec![4.0, 5.0]);
    assert_eq!(test.first().date, day(4));

    assert!(matches!(
        series.split_holdout(5),
        Err(ForecastError::DataError(_))
    ));
    assert!(matches!(
        series.split_holdout(0),
        Err(ForecastError::InvalidParameter(_))
    ));
}

#[test]
fn test_summary_statistics() {
    let series = Series::from_prices(day(1), &[100.0, 103.0, 106.0]).unwrap();
    let summary = series.summary();

    assert_eq!(summary.count, 3);
    assert!((summary.mean - 103.0).abs() < 1e-9);
    assert!((summary.std_dev - 3.0).abs() < 1e-9);
    assert_eq!(summary.min, 100.0);
    assert_eq!(summary.max, 106.0);

    let single = Series::from_prices(day(1), &[42.0]).unwrap().summary();
    assert_eq!(single.std_dev, 0.0);
    assert_eq!(single.mean, 42.0);
}

#[test]
fn test_series_serializes_as_array() {
    let series = Series::from_prices(day(1), &[100.5]).unwrap();
    let json = serde_json::to_string(&series).unwrap();

    assert_eq!(json, r#"[{"date":"2024-03-01","price":100.5,"volume":0}]"#);
}
