//! Moving average calculations
//!
//! Streaming implementations that can be updated one price at a time, plus
//! batch helpers over whole price slices:
//! - Simple Moving Average (SMA)
//! - Exponential Moving Average (EMA)

use crate::{MathError, Result};
use std::collections::VecDeque;

/// Simple Moving Average (SMA) over a sliding window, kept as a running sum
#[derive(Debug, Clone)]
pub struct SimpleMovingAverage {
    window: usize,
    values: VecDeque<f64>,
    sum: f64,
}

impl SimpleMovingAverage {
    /// Create a new Simple Moving Average with the specified window
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(MathError::InvalidInput(
                "Window must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            window,
            values: VecDeque::with_capacity(window),
            sum: 0.0,
        })
    }

    /// Push a new value into the window
    pub fn update(&mut self, value: f64) {
        self.values.push_back(value);
        self.sum += value;

        if self.values.len() > self.window {
            if let Some(old_value) = self.values.pop_front() {
                self.sum -= old_value;
            }
        }
    }

    /// Get the current SMA value
    pub fn value(&self) -> Result<f64> {
        if self.values.len() < self.window {
            return Err(MathError::InsufficientData(format!(
                "Not enough data for SMA calculation. Need {} values, have {}.",
                self.window,
                self.values.len()
            )));
        }

        Ok(self.sum / self.window as f64)
    }

    /// Whether the window has been filled
    pub fn is_ready(&self) -> bool {
        self.values.len() >= self.window
    }

    /// Get the window size
    pub fn window(&self) -> usize {
        self.window
    }

    /// Reset the SMA, clearing all values
    pub fn reset(&mut self) {
        self.values.clear();
        self.sum = 0.0;
    }
}

/// Exponential Moving Average (EMA) seeded with the first observed value
#[derive(Debug, Clone)]
pub struct ExponentialMovingAverage {
    period: usize,
    multiplier: f64,
    current_ema: Option<f64>,
}

impl ExponentialMovingAverage {
    /// Create a new Exponential Moving Average with the specified period
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(MathError::InvalidInput(
                "Period must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            period,
            multiplier: 2.0 / (period as f64 + 1.0),
            current_ema: None,
        })
    }

    /// Update the EMA with a new value
    pub fn update(&mut self, value: f64) {
        let next = match self.current_ema {
            None => value,
            // EMA = price * k + EMA(previous) * (1 - k)
            Some(previous) => value * self.multiplier + previous * (1.0 - self.multiplier),
        };
        self.current_ema = Some(next);
    }

    /// Get the current EMA value
    pub fn value(&self) -> Result<f64> {
        self.current_ema.ok_or_else(|| {
            MathError::InsufficientData("No data available for EMA calculation".to_string())
        })
    }

    /// Smoothing multiplier `2 / (period + 1)`
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Get the current period
    pub fn period(&self) -> usize {
        self.period
    }

    /// Reset the EMA, clearing all values
    pub fn reset(&mut self) {
        self.current_ema = None;
    }
}

/// Simple moving average of `prices` over `window`.
///
/// Produces one value per index `i >= window - 1`, so the output holds
/// `prices.len() - window + 1` values.
///
/// # Errors
/// * `InsufficientData` when `prices.len() < window`
/// * `InvalidInput` when `window == 0`
pub fn sma(prices: &[f64], window: usize) -> Result<Vec<f64>> {
    let mut average = SimpleMovingAverage::new(window)?;
    if prices.len() < window {
        return Err(MathError::InsufficientData(format!(
            "SMA window {} exceeds series length {}",
            window,
            prices.len()
        )));
    }

    let mut output = Vec::with_capacity(prices.len() - window + 1);
    for &price in prices {
        average.update(price);
        if average.is_ready() {
            output.push(average.value()?);
        }
    }

    Ok(output)
}

/// Exponential moving average of `prices` with the given `period`.
///
/// The first output equals the first price; the output has the same length
/// as the input.
///
/// # Errors
/// * `InsufficientData` when `prices` is empty
/// * `InvalidInput` when `period == 0`
pub fn ema(prices: &[f64], period: usize) -> Result<Vec<f64>> {
    let mut average = ExponentialMovingAverage::new(period)?;
    if prices.is_empty() {
        return Err(MathError::InsufficientData(
            "EMA needs at least one price".to_string(),
        ));
    }

    let mut output = Vec::with_capacity(prices.len());
    for &price in prices {
        average.update(price);
        output.push(average.value()?);
    }

    Ok(output)
}
