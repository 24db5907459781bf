//! # Price Forecast
//!
//! Synthetic daily price series, short-horizon price forecasting and forecast
//! accuracy scoring.
//!
//! ## Features
//!
//! - Seeded synthetic price/volume series per ticker symbol
//! - Forecasting models: Simple and Exponential Moving Average, Linear
//!   Regression, a differenced autoregressive drift heuristic, and a naive
//!   fallback
//! - Accuracy metrics (MAE, RMSE, MAPE) and hold-out back-testing
//! - A JSON-serializable prediction report for charting front ends
//!
//! All randomness comes from a caller-supplied [`rand::Rng`], so results are
//! reproducible from a seed and independent callers share no state.
//!
//! ## Quick Start
//!
//! ```rust
//! use price_forecast::{evaluate, ForecastEngine, ModelKind, SeriesGenerator};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let series = SeriesGenerator::default().generate("AAPL", 365, &mut rng)?;
//! let engine = ForecastEngine::default();
//!
//! let forecast = engine.forecast(&series, ModelKind::Ema, 30, &mut rng)?;
//! assert_eq!(forecast.len(), 30);
//!
//! let (train, test) = series.split_holdout(30)?;
//! let predicted = engine.forecast(&train, ModelKind::Sma, 30, &mut rng)?;
//! let metrics = evaluate(&test, &predicted)?;
//! assert!(metrics.mape >= 0.0);
//! # Ok::<(), price_forecast::ForecastError>(())
//! ```

pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod generator;
pub mod metrics;
pub mod models;
pub mod report;
pub mod utils;

// Re-export commonly used types
pub use crate::config::{ModelSettings, PredictorConfig, SymbolProfile, SymbolProfiles};
pub use crate::data::{ForecastPoint, PricePoint, Series, SeriesSummary};
pub use crate::engine::ForecastEngine;
pub use crate::error::{ForecastError, Result};
pub use crate::generator::SeriesGenerator;
pub use crate::metrics::{evaluate, Metrics};
pub use crate::models::{ModelKind, PriceModel};
pub use crate::report::{PredictionReport, PredictionRequest, Predictor};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_identity() {
        assert_eq!(NAME, "price_forecast");
        assert!(!VERSION.is_empty());
    }
}
