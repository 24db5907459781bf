use forecast_math::MathError;
use price_forecast::ForecastError;

#[test]
fn test_math_error_conversion() {
    let forecast_error = ForecastError::from(MathError::EmptyComparison);

    match forecast_error {
        ForecastError::Math(MathError::EmptyComparison) => {}
        other => panic!("Expected Math(EmptyComparison), got {:?}", other),
    }
}

#[test]
fn test_error_display() {
    let error = ForecastError::InvalidParameter("window must be positive".to_string());
    assert_eq!(error.to_string(), "Invalid parameter: window must be positive");

    // Math errors keep their own message
    let error = ForecastError::from(MathError::DegenerateFit("one point".to_string()));
    assert_eq!(error.to_string(), "Degenerate fit: one point");
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<u32>("not json").unwrap_err();
    let error = ForecastError::from(json_error);

    assert!(matches!(error, ForecastError::Serialization(_)));
    assert!(error.to_string().starts_with("Serialization error"));
}
