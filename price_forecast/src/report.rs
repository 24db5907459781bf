//! Prediction report for a presentation layer
//!
//! [`Predictor::predict`] runs the whole flow for one request: generate the
//! history, forecast the horizon, back-test on a hold-out and assemble the
//! chart series and price outlook.

use crate::config::PredictorConfig;
use crate::data::{ForecastPoint, PricePoint, Series, SeriesSummary};
use crate::engine::ForecastEngine;
use crate::error::{ForecastError, Result};
use crate::generator::SeriesGenerator;
use crate::metrics::Metrics;
use crate::models::ModelKind;
use chrono::{NaiveDate, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::info;

/// What the caller asks for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Ticker symbol; unknown symbols use the fallback profile
    pub symbol: String,
    /// Forecasting model
    pub model: ModelKind,
    /// Days to forecast
    pub horizon: usize,
}

impl PredictionRequest {
    /// Create a new request
    pub fn new(symbol: impl Into<String>, model: ModelKind, horizon: usize) -> Self {
        Self {
            symbol: symbol.into(),
            model,
            horizon,
        }
    }
}

/// One x-position of the combined history/forecast chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    /// Calendar day
    pub date: NaiveDate,
    /// Historical price, if this day is history
    pub actual_price: Option<f64>,
    /// Predicted price, if this day is forecast
    pub predicted_price: Option<f64>,
}

impl From<&PricePoint> for ChartPoint {
    fn from(point: &PricePoint) -> Self {
        Self {
            date: point.date,
            actual_price: Some(point.price),
            predicted_price: None,
        }
    }
}

impl From<&ForecastPoint> for ChartPoint {
    fn from(point: &ForecastPoint) -> Self {
        Self {
            date: point.date,
            actual_price: None,
            predicted_price: Some(point.price),
        }
    }
}

/// Where the price is expected to go over the horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceOutlook {
    /// Last historical price
    pub current_price: f64,
    /// Price on the last forecast day
    pub predicted_price: f64,
    /// `predicted_price - current_price`
    pub change: f64,
    /// Change relative to the current price, as a percentage
    pub change_percent: f64,
}

impl PriceOutlook {
    /// Compare the last historical price with the final prediction
    pub fn new(history: &Series, forecast: &[ForecastPoint]) -> Result<Self> {
        let current_price = history.last_price();
        let predicted_price = forecast
            .last()
            .map(|p| p.price)
            .ok_or_else(|| ForecastError::DataError("Forecast is empty".to_string()))?;
        let change = predicted_price - current_price;

        Ok(Self {
            current_price,
            predicted_price,
            change,
            change_percent: change / current_price * 100.0,
        })
    }
}

/// Everything a dashboard needs for one request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionReport {
    /// Ticker symbol as requested
    pub symbol: String,
    /// Model used
    pub model: ModelKind,
    /// Model description for display
    pub model_description: String,
    /// Generated history
    pub history: Series,
    /// Forecast over the requested horizon
    pub forecast: Vec<ForecastPoint>,
    /// Accuracy of the same model on the hold-out
    pub metrics: Metrics,
    /// Price statistics of the history
    pub summary: SeriesSummary,
    /// Current versus predicted price
    pub outlook: PriceOutlook,
    /// Recent history followed by the forecast
    pub chart: Vec<ChartPoint>,
}

impl PredictionReport {
    /// Serialize the report to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl std::fmt::Display for PredictionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} - {}", self.symbol, self.model_description)?;
        writeln!(f, "  Current:   ${:.2}", self.outlook.current_price)?;
        writeln!(
            f,
            "  Predicted: ${:.2} ({}{:.2}, {:.1}%) after {} days",
            self.outlook.predicted_price,
            if self.outlook.change >= 0.0 { "+" } else { "" },
            self.outlook.change,
            self.outlook.change_percent,
            self.forecast.len()
        )?;
        write!(f, "{}", self.metrics)?;
        write!(f, "{}", self.summary)
    }
}

/// Chart series: the last `history_days` of `history` followed by `forecast`
pub fn chart_series(history: &Series, forecast: &[ForecastPoint], history_days: usize) -> Vec<ChartPoint> {
    let start = history.len().saturating_sub(history_days);
    history.points()[start..]
        .iter()
        .map(ChartPoint::from)
        .chain(forecast.iter().map(ChartPoint::from))
        .collect()
}

/// Runs generation, forecasting and back-testing for prediction requests
#[derive(Debug, Clone)]
pub struct Predictor {
    config: PredictorConfig,
    generator: SeriesGenerator,
    engine: ForecastEngine,
}

impl Predictor {
    /// Create a predictor from a validated configuration
    pub fn new(config: PredictorConfig) -> Result<Self> {
        config.validate()?;
        let generator = SeriesGenerator::new(config.symbols.clone());
        let engine = ForecastEngine::new(config.models)?;

        Ok(Self {
            config,
            generator,
            engine,
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Build a report whose history ends yesterday (UTC)
    pub fn predict<R: RngCore>(&self, request: &PredictionRequest, rng: &mut R) -> Result<PredictionReport> {
        self.predict_as_of(request, Utc::now().date_naive(), rng)
    }

    /// Build a report whose history ends the day before `as_of`
    pub fn predict_as_of<R: RngCore>(
        &self,
        request: &PredictionRequest,
        as_of: NaiveDate,
        rng: &mut R,
    ) -> Result<PredictionReport> {
        let history = self.generator.generate_as_of(
            &request.symbol,
            self.config.history_days,
            as_of,
            rng,
        )?;
        let forecast = self
            .engine
            .forecast(&history, request.model, request.horizon, rng)?;
        let metrics = self
            .engine
            .backtest(&history, request.model, self.config.holdout_days, rng)?;
        let outlook = PriceOutlook::new(&history, &forecast)?;

        info!(
            symbol = %request.symbol,
            model = request.model.id(),
            horizon = request.horizon,
            mape = metrics.mape,
            "prediction report assembled"
        );

        Ok(PredictionReport {
            symbol: request.symbol.clone(),
            model: request.model,
            model_description: request.model.description().to_string(),
            summary: history.summary(),
            chart: chart_series(&history, &forecast, self.config.chart_history_days),
            history,
            forecast,
            metrics,
            outlook,
        })
    }
}

impl Default for Predictor {
    fn default() -> Self {
        let config = PredictorConfig::default();
        Self {
            generator: SeriesGenerator::new(config.symbols.clone()),
            engine: ForecastEngine::default(),
            config,
        }
    }
}
