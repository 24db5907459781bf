//! Linear trend model

use crate::data::Series;
use crate::error::{ForecastError, Result};
use crate::models::{ModelKind, PriceModel};
use forecast_math::LinearTrend;
use rand::RngCore;
use tracing::debug;

/// Fits a least-squares line to the trailing window and extrapolates it.
///
/// The window is fitted on indices `0..lookback`, but step `i` of the forecast
/// is read off the line at `series.len() + i`, so on histories longer than the
/// window the forecast carries an offset of `slope * (len - lookback + 1)`.
#[derive(Debug, Clone)]
pub struct LinearTrendModel {
    lookback: usize,
}

impl LinearTrendModel {
    /// Create a new linear trend model over the last `lookback` points
    pub fn new(lookback: usize) -> Result<Self> {
        if lookback < 2 {
            return Err(ForecastError::InvalidParameter(
                "Lookback must be at least 2 for a linear fit".to_string(),
            ));
        }
        Ok(Self { lookback })
    }

    /// Number of trailing points fitted
    pub fn lookback(&self) -> usize {
        self.lookback
    }

    /// Fit the line to the trailing window of `series`
    pub fn fit(&self, series: &Series) -> Result<(LinearTrend, usize)> {
        let recent = series.tail(self.lookback)?.prices();
        let trend = LinearTrend::fit(&recent)?;
        debug!(
            slope = trend.slope,
            intercept = trend.intercept,
            r_squared = trend.r_squared(&recent).ok(),
            fitted = recent.len(),
            "linear trend fit"
        );
        Ok((trend, recent.len()))
    }
}

impl PriceModel for LinearTrendModel {
    fn kind(&self) -> ModelKind {
        ModelKind::LinearRegression
    }

    // Deterministic: the random source is not drawn from.
    fn predict(&self, series: &Series, horizon: usize, _rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        let (trend, _) = self.fit(series)?;

        let len = series.len() as f64;
        Ok((1..=horizon)
            .map(|step| trend.predict(len + step as f64))
            .collect())
    }
}
