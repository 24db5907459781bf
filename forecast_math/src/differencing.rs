//! First differences and drift estimation
//!
//! The drift estimate is the mean of the most recent first differences. It is
//! an autoregressive-on-differences heuristic with no parameter estimation
//! and no moving-average component, not a fitted ARIMA(p,d,q).

use crate::{MathError, Result};

/// First differences `price[i] - price[i - 1]`; one shorter than the input
pub fn differences(prices: &[f64]) -> Vec<f64> {
    prices.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Mean of the last `order` first differences of `prices`, used as a
/// constant per-step drift.
///
/// # Errors
/// * `InvalidInput` when `order == 0`
/// * `InsufficientData` when fewer than `order + 1` prices are given
pub fn recent_drift(prices: &[f64], order: usize) -> Result<f64> {
    if order == 0 {
        return Err(MathError::InvalidInput(
            "Autoregressive order must be greater than zero".to_string(),
        ));
    }
    if prices.len() < order + 1 {
        return Err(MathError::InsufficientData(format!(
            "Drift of order {} needs {} prices, have {}",
            order,
            order + 1,
            prices.len()
        )));
    }

    let diffs = differences(prices);
    let recent = &diffs[diffs.len() - order..];
    Ok(recent.iter().sum::<f64>() / order as f64)
}
