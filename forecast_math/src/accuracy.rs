//! Forecast accuracy metrics

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// Forecast accuracy metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccuracyMetrics {
    /// Mean Absolute Error
    pub mae: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Percentage Error, as a percentage
    pub mape: f64,
}

/// Calculate accuracy metrics for pairwise aligned actual and predicted values.
///
/// # Errors
/// * `EmptyComparison` when there is nothing to compare
/// * `InvalidInput` when the slices differ in length
/// * `DivisionByZero` when an actual value is exactly zero
pub fn forecast_accuracy(actual: &[f64], predicted: &[f64]) -> Result<AccuracyMetrics> {
    if actual.is_empty() || predicted.is_empty() {
        return Err(MathError::EmptyComparison);
    }
    if actual.len() != predicted.len() {
        return Err(MathError::InvalidInput(format!(
            "Actual length ({}) doesn't match predicted length ({})",
            actual.len(),
            predicted.len()
        )));
    }
    if let Some(index) = actual.iter().position(|&a| a == 0.0) {
        return Err(MathError::DivisionByZero(format!(
            "actual value at position {} is zero, MAPE is undefined",
            index
        )));
    }

    let n = actual.len() as f64;
    let (mut abs_sum, mut sq_sum, mut pct_sum) = (0.0, 0.0, 0.0);
    for (&a, &p) in actual.iter().zip(predicted) {
        let error = a - p;
        abs_sum += error.abs();
        sq_sum += error * error;
        pct_sum += (error / a).abs();
    }

    Ok(AccuracyMetrics {
        mae: abs_sum / n,
        rmse: (sq_sum / n).sqrt(),
        mape: pct_sum / n * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_regression_metrics() {
        let actual = [10.0, 20.0, 30.0, 40.0, 50.0];
        let predicted = [12.0, 18.0, 33.0, 37.0, 52.0];

        let metrics = forecast_accuracy(&actual, &predicted).unwrap();
        assert_relative_eq!(metrics.mae, 2.4, epsilon = 1e-9);
        assert_relative_eq!(metrics.rmse, 6.0_f64.sqrt(), epsilon = 1e-9);
        assert!(metrics.mape > 0.0 && metrics.mape < 15.0);
    }

    #[test]
    fn test_two_point_scenario() {
        let metrics = forecast_accuracy(&[100.0, 110.0], &[105.0, 105.0]).unwrap();

        assert_relative_eq!(metrics.mae, 5.0);
        assert_relative_eq!(metrics.rmse, 5.0);
        assert_relative_eq!(
            metrics.mape,
            (5.0 / 100.0 + 5.0 / 110.0) / 2.0 * 100.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_perfect_forecast() {
        let metrics = forecast_accuracy(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(metrics.mae, 0.0);
        assert_eq!(metrics.rmse, 0.0);
        assert_eq!(metrics.mape, 0.0);
    }

    #[test]
    fn test_error_handling() {
        assert_eq!(
            forecast_accuracy(&[], &[]).unwrap_err(),
            MathError::EmptyComparison
        );
        assert!(matches!(
            forecast_accuracy(&[1.0, 2.0], &[1.0]),
            Err(MathError::InvalidInput(_))
        ));
        assert!(matches!(
            forecast_accuracy(&[1.0, 0.0], &[1.0, 1.0]),
            Err(MathError::DivisionByZero(_))
        ));
    }
}
