//! Forecasting models
//!
//! Every model turns a historical [`Series`] into one raw predicted price per
//! future day. Flooring and dating of the predictions is left to the
//! [`ForecastEngine`](crate::engine::ForecastEngine).

use crate::config::ModelSettings;
use crate::data::Series;
use crate::error::Result;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::{self, Debug};
use std::str::FromStr;
use tracing::warn;

pub mod differenced_ar;
pub mod linear_trend;
pub mod moving_average;
pub mod naive;

pub use differenced_ar::DifferencedArModel;
pub use linear_trend::LinearTrendModel;
pub use moving_average::{EmaModel, SmaModel};
pub use naive::NaiveModel;

/// A forecasting strategy
pub trait PriceModel: Debug {
    /// Which variant this model implements
    fn kind(&self) -> ModelKind;

    /// Raw predicted prices for days `1..=horizon` after the end of `series`
    fn predict(&self, series: &Series, horizon: usize, rng: &mut dyn RngCore) -> Result<Vec<f64>>;
}

/// Selector of the forecasting model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// Simple moving average of the recent window
    Sma,
    /// Exponential moving average of the recent window
    Ema,
    /// Least-squares line through the recent window
    #[serde(rename = "linear")]
    LinearRegression,
    /// Mean of recent first differences as a per-step drift
    #[serde(rename = "arima")]
    DifferencedAr,
    /// Last price with jitter; used for any unrecognised selector
    #[default]
    Naive,
}

impl ModelKind {
    /// The selectable models, in menu order
    pub const SELECTABLE: [ModelKind; 4] = [
        ModelKind::Sma,
        ModelKind::Ema,
        ModelKind::LinearRegression,
        ModelKind::DifferencedAr,
    ];

    /// Map a selector string to a model; unknown names fall back to `Naive`
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "sma" => ModelKind::Sma,
            "ema" => ModelKind::Ema,
            "linear" | "linearregression" | "linear_regression" => ModelKind::LinearRegression,
            "arima" | "differencedar" | "differenced_ar" => ModelKind::DifferencedAr,
            "naive" => ModelKind::Naive,
            other => {
                warn!(model = other, "unknown model selector, using naive fallback");
                ModelKind::Naive
            }
        }
    }

    /// Short selector used in configuration and JSON
    pub fn id(&self) -> &'static str {
        match self {
            ModelKind::Sma => "sma",
            ModelKind::Ema => "ema",
            ModelKind::LinearRegression => "linear",
            ModelKind::DifferencedAr => "arima",
            ModelKind::Naive => "naive",
        }
    }

    /// Human-readable model name
    pub fn name(&self) -> &'static str {
        match self {
            ModelKind::Sma => "Simple Moving Average",
            ModelKind::Ema => "Exponential Moving Average",
            ModelKind::LinearRegression => "Linear Regression",
            ModelKind::DifferencedAr => "ARIMA Model",
            ModelKind::Naive => "Naive Last Price",
        }
    }

    /// One-line description of how the model forecasts
    pub fn description(&self) -> &'static str {
        match self {
            ModelKind::Sma => "Simple Moving Average - Uses average of recent prices",
            ModelKind::Ema => "Exponential Moving Average - Gives more weight to recent prices",
            ModelKind::LinearRegression => {
                "Linear Regression - Fits a straight line through price data"
            }
            ModelKind::DifferencedAr => {
                "ARIMA Model - Projects the mean of recent price differences (simplified, not a fitted ARIMA)"
            }
            ModelKind::Naive => "Naive - Repeats the last price with small random noise",
        }
    }

    /// Build the strategy for this variant from `settings`
    pub fn build(&self, settings: &ModelSettings) -> Result<Box<dyn PriceModel>> {
        let model: Box<dyn PriceModel> = match self {
            ModelKind::Sma => Box::new(SmaModel::new(settings.sma_window, settings.smoothing_jitter)?),
            ModelKind::Ema => Box::new(EmaModel::new(settings.ema_period, settings.smoothing_jitter)?),
            ModelKind::LinearRegression => Box::new(LinearTrendModel::new(settings.linear_lookback)?),
            ModelKind::DifferencedAr => Box::new(DifferencedArModel::new(
                settings.drift_lookback,
                settings.drift_order,
                settings.drift_jitter,
            )?),
            ModelKind::Naive => Box::new(NaiveModel::new(settings.naive_jitter)?),
        };
        Ok(model)
    }
}

impl FromStr for ModelKind {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ModelKind::parse(s))
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub(crate) fn check_jitter(width: f64) -> Result<()> {
    if !(0.0..2.0).contains(&width) {
        return Err(crate::error::ForecastError::InvalidParameter(format!(
            "Jitter width must be in [0, 2), got {}",
            width
        )));
    }
    Ok(())
}
