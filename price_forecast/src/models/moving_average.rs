//! Moving average models
//!
//! Both models smooth the trailing window and hold the smoothed value flat
//! across the horizon, each day scaled by its own small random jitter.

use crate::data::Series;
use crate::error::{ForecastError, Result};
use crate::models::{check_jitter, ModelKind, PriceModel};
use crate::utils::jitter;
use forecast_math::{ema, sma};
use rand::RngCore;
use tracing::debug;

/// Simple Moving Average model
#[derive(Debug, Clone)]
pub struct SmaModel {
    /// Window size
    window: usize,
    /// Full width of the daily jitter
    jitter: f64,
}

impl SmaModel {
    /// Create a new Simple Moving Average model
    pub fn new(window: usize, jitter: f64) -> Result<Self> {
        if window == 0 {
            return Err(ForecastError::InvalidParameter(
                "Window size must be positive".to_string(),
            ));
        }
        check_jitter(jitter)?;

        Ok(Self { window, jitter })
    }

    /// Window size
    pub fn window(&self) -> usize {
        self.window
    }
}

impl PriceModel for SmaModel {
    fn kind(&self) -> ModelKind {
        ModelKind::Sma
    }

    fn predict(&self, series: &Series, horizon: usize, rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        let recent = series.tail(self.window)?.prices();
        let averages = sma(&recent, self.window)?;
        let anchor = *averages
            .last()
            .ok_or_else(|| ForecastError::DataError("SMA produced no values".to_string()))?;

        debug!(window = self.window, anchor, "SMA anchor");
        Ok((0..horizon).map(|_| anchor * jitter(rng, self.jitter)).collect())
    }
}

/// Exponential Moving Average model
#[derive(Debug, Clone)]
pub struct EmaModel {
    /// Smoothing period
    period: usize,
    /// Full width of the daily jitter
    jitter: f64,
}

impl EmaModel {
    /// Create a new Exponential Moving Average model
    pub fn new(period: usize, jitter: f64) -> Result<Self> {
        if period == 0 {
            return Err(ForecastError::InvalidParameter(
                "Period must be positive".to_string(),
            ));
        }
        check_jitter(jitter)?;

        Ok(Self { period, jitter })
    }

    /// Smoothing period
    pub fn period(&self) -> usize {
        self.period
    }
}

impl PriceModel for EmaModel {
    fn kind(&self) -> ModelKind {
        ModelKind::Ema
    }

    fn predict(&self, series: &Series, horizon: usize, rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        let recent = series.tail(self.period)?.prices();
        let smoothed = ema(&recent, self.period)?;
        let anchor = *smoothed
            .last()
            .ok_or_else(|| ForecastError::DataError("EMA produced no values".to_string()))?;

        debug!(period = self.period, anchor, "EMA anchor");
        Ok((0..horizon).map(|_| anchor * jitter(rng, self.jitter)).collect())
    }
}
