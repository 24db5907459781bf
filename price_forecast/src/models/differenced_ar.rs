//! Differenced autoregressive heuristic
//!
//! Labelled "ARIMA" to callers, but deliberately simplified: the drift is the
//! mean of the last `order` first differences of the trailing window, with no
//! coefficient estimation, no information criteria and no moving-average
//! term. Step `i` projects `last + drift * i * jitter`.

use crate::data::Series;
use crate::error::{ForecastError, Result};
use crate::models::{check_jitter, ModelKind, PriceModel};
use crate::utils::jitter;
use forecast_math::recent_drift;
use rand::RngCore;
use tracing::debug;

/// Drift-from-recent-differences model
#[derive(Debug, Clone)]
pub struct DifferencedArModel {
    /// Trailing points considered
    lookback: usize,
    /// Number of recent differences averaged (p)
    order: usize,
    /// Full width of the jitter on the accumulated drift
    jitter: f64,
}

impl DifferencedArModel {
    /// Create a new model; `order` differences need `order + 1` points, so
    /// `lookback` must exceed `order`
    pub fn new(lookback: usize, order: usize, jitter: f64) -> Result<Self> {
        if order == 0 {
            return Err(ForecastError::InvalidParameter(
                "Order must be positive".to_string(),
            ));
        }
        if lookback <= order {
            return Err(ForecastError::InvalidParameter(format!(
                "Lookback ({}) must exceed order ({})",
                lookback, order
            )));
        }
        check_jitter(jitter)?;

        Ok(Self {
            lookback,
            order,
            jitter,
        })
    }

    /// Per-step drift estimated from the trailing window of `series`
    pub fn drift(&self, series: &Series) -> Result<f64> {
        let recent = series.tail(self.lookback)?.prices();
        Ok(recent_drift(&recent, self.order)?)
    }

    /// Price `step` days ahead of `last_price`
    pub fn forecast_step(&self, last_price: f64, drift: f64, step: usize, rng: &mut dyn RngCore) -> f64 {
        last_price + drift * step as f64 * jitter(rng, self.jitter)
    }
}

impl PriceModel for DifferencedArModel {
    fn kind(&self) -> ModelKind {
        ModelKind::DifferencedAr
    }

    fn predict(&self, series: &Series, horizon: usize, rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        let drift = self.drift(series)?;
        let last_price = series.last_price();
        debug!(drift, order = self.order, lookback = self.lookback, "differenced drift");

        Ok((1..=horizon)
            .map(|step| self.forecast_step(last_price, drift, step, rng))
            .collect())
    }
}
