//! # Forecast Math
//!
//! Numeric kernels behind the price forecasting models.
//! Everything here works on plain price slices and is free of dates and
//! randomness:
//!
//! - Simple and exponential moving averages
//! - Ordinary least-squares trend fitting
//! - First differences and recent-drift estimation
//! - Forecast accuracy metrics (MAE, RMSE, MAPE)

use thiserror::Error;

pub mod accuracy;
pub mod differencing;
pub mod moving_averages;
pub mod regression;

pub use accuracy::{forecast_accuracy, AccuracyMetrics};
pub use differencing::{differences, recent_drift};
pub use moving_averages::{ema, sma, ExponentialMovingAverage, SimpleMovingAverage};
pub use regression::LinearTrend;

/// Errors that can occur in forecasting calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Degenerate fit: {0}")]
    DegenerateFit(String),

    #[error("Empty comparison: no overlapping points to evaluate")]
    EmptyComparison,

    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for forecast math operations
pub type Result<T> = std::result::Result<T, MathError>;
