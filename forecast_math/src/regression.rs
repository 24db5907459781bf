//! Ordinary least-squares trend fitting
//!
//! Fits `price = slope * x + intercept` over index positions `x = 0..n-1`
//! using the closed-form normal equations.

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// A fitted straight line over index positions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearTrend {
    /// Change in price per index step
    pub slope: f64,
    /// Fitted price at index 0
    pub intercept: f64,
}

impl LinearTrend {
    /// Fit a line to `prices` by ordinary least squares.
    ///
    /// # Errors
    /// * `DegenerateFit` when `n * Σx² - (Σx)² == 0`, which happens for fewer
    ///   than two points
    pub fn fit(prices: &[f64]) -> Result<Self> {
        let n = prices.len() as f64;

        let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0, 0.0, 0.0, 0.0);
        for (i, &y) in prices.iter().enumerate() {
            let x = i as f64;
            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_xx += x * x;
        }

        let denominator = n * sum_xx - sum_x * sum_x;
        if denominator == 0.0 {
            return Err(MathError::DegenerateFit(format!(
                "slope is undefined for {} point(s); need at least 2",
                prices.len()
            )));
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;

        Ok(Self { slope, intercept })
    }

    /// Price on the fitted line at index position `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Coefficient of determination of the fit against `prices`.
    ///
    /// # Errors
    /// * `DegenerateFit` when the prices have zero variance
    pub fn r_squared(&self, prices: &[f64]) -> Result<f64> {
        if prices.is_empty() {
            return Err(MathError::InsufficientData(
                "R-squared needs at least one price".to_string(),
            ));
        }

        let y_mean = prices.iter().sum::<f64>() / prices.len() as f64;
        let mut ss_total = 0.0;
        let mut ss_residual = 0.0;
        for (i, &y) in prices.iter().enumerate() {
            ss_total += (y - y_mean).powi(2);
            ss_residual += (y - self.predict(i as f64)).powi(2);
        }

        if ss_total == 0.0 {
            return Err(MathError::DegenerateFit(
                "total sum of squares is zero".to_string(),
            ));
        }

        Ok(1.0 - ss_residual / ss_total)
    }
}
