//! # Stock Predictor
//!
//! `stock_predictor` bundles the forecasting workspace behind the three calls
//! a presentation layer needs: generate a history, forecast it, and score a
//! forecast.
//!
//! ## Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use stock_predictor::{evaluate, forecast, generate, ModelKind};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let series = generate("TSLA", 120, &mut rng).unwrap();
//! let predicted = forecast(&series, ModelKind::LinearRegression, 14, &mut rng).unwrap();
//! assert_eq!(predicted.len(), 14);
//!
//! let metrics = evaluate(&series, &predicted).unwrap();
//! assert!(metrics.rmse >= 0.0);
//! ```

pub use forecast_math;
pub use price_forecast::{
    ForecastEngine, ForecastError, ForecastPoint, Metrics, ModelKind, ModelSettings,
    PredictionReport, PredictionRequest, Predictor, PredictorConfig, PricePoint, Result, Series,
    SeriesGenerator, SymbolProfile, SymbolProfiles,
};

use rand::RngCore;

/// Generate `days` of synthetic history for `symbol` with the default
/// symbol profiles, ending yesterday
pub fn generate<R: RngCore>(symbol: &str, days: usize, rng: &mut R) -> Result<Series> {
    SeriesGenerator::default().generate(symbol, days, rng)
}

/// Forecast `horizon_days` after `series` with the default model settings
pub fn forecast<R: RngCore>(
    series: &Series,
    model: ModelKind,
    horizon_days: usize,
    rng: &mut R,
) -> Result<Vec<ForecastPoint>> {
    ForecastEngine::default().forecast(series, model, horizon_days, rng)
}

/// Score `predicted` against the tail of `actual`
pub fn evaluate(actual: &Series, predicted: &[ForecastPoint]) -> Result<Metrics> {
    price_forecast::evaluate(actual, predicted)
}
