//! Metrics for evaluating forecast accuracy

use crate::data::{ForecastPoint, Series};
use crate::error::Result;
use forecast_math::{forecast_accuracy, AccuracyMetrics, MathError};
use serde::{Deserialize, Serialize};

/// Forecast accuracy metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean Absolute Error
    pub mae: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Percentage Error, as a percentage
    pub mape: f64,
}

impl From<AccuracyMetrics> for Metrics {
    fn from(accuracy: AccuracyMetrics) -> Self {
        Self {
            mae: accuracy.mae,
            rmse: accuracy.rmse,
            mape: accuracy.mape,
        }
    }
}

impl std::fmt::Display for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Forecast Accuracy Metrics:")?;
        writeln!(f, "  MAE:  {:.2}", self.mae)?;
        writeln!(f, "  RMSE: {:.2}", self.rmse)?;
        writeln!(f, "  MAPE: {:.2}%", self.mape)?;
        Ok(())
    }
}

/// Evaluate a forecast against actual prices.
///
/// With `n = min(actual.len(), predicted.len())`, the last `n` actual points
/// are compared position by position with the first `n` predictions. Dates
/// are not matched.
///
/// # Errors
/// * `EmptyComparison` when `n == 0`
/// * `DivisionByZero` when an aligned actual price is zero
pub fn evaluate(actual: &Series, predicted: &[ForecastPoint]) -> Result<Metrics> {
    let actual_prices = actual.prices();
    evaluate_prices(&actual_prices, &predicted.iter().map(|p| p.price).collect::<Vec<_>>())
}

/// Same alignment and metrics as [`evaluate`] over raw prices
pub fn evaluate_prices(actual: &[f64], predicted: &[f64]) -> Result<Metrics> {
    let n = actual.len().min(predicted.len());
    if n == 0 {
        return Err(MathError::EmptyComparison.into());
    }

    let accuracy = forecast_accuracy(&actual[actual.len() - n..], &predicted[..n])?;
    Ok(accuracy.into())
}
