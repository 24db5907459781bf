//! Naive fallback model

use crate::data::Series;
use crate::error::Result;
use crate::models::{check_jitter, ModelKind, PriceModel};
use crate::utils::jitter;
use rand::RngCore;

/// Repeats the last price, each day with its own jitter
#[derive(Debug, Clone)]
pub struct NaiveModel {
    jitter: f64,
}

impl NaiveModel {
    /// Create a new naive model with the given jitter width
    pub fn new(jitter: f64) -> Result<Self> {
        check_jitter(jitter)?;
        Ok(Self { jitter })
    }
}

impl PriceModel for NaiveModel {
    fn kind(&self) -> ModelKind {
        ModelKind::Naive
    }

    fn predict(&self, series: &Series, horizon: usize, rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        let last_price = series.last_price();
        Ok((0..horizon)
            .map(|_| last_price * jitter(rng, self.jitter))
            .collect())
    }
}
