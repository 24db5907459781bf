//! Price series data types

use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// One trading day of a price series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Calendar day of the observation
    pub date: NaiveDate,
    /// Price, always positive
    pub price: f64,
    /// Traded volume
    pub volume: u64,
}

impl PricePoint {
    /// Create a new price point
    pub fn new(date: NaiveDate, price: f64, volume: u64) -> Self {
        Self {
            date,
            price,
            volume,
        }
    }
}

/// A forecasted price for a day after the end of the historical series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    /// Calendar day of the prediction
    pub date: NaiveDate,
    /// Predicted price
    pub price: f64,
    /// Always true; lets a consumer tell forecasts from history
    pub is_prediction: bool,
}

impl ForecastPoint {
    /// Create a new forecast point
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self {
            date,
            price,
            is_prediction: true,
        }
    }
}

/// Chronologically ordered, non-empty price series with unique dates
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Series {
    points: Vec<PricePoint>,
}

impl Series {
    /// Create a series, validating its invariants.
    ///
    /// # Errors
    /// * `DataError` if the points are empty, not strictly increasing by date,
    ///   or carry a non-positive or non-finite price
    pub fn new(points: Vec<PricePoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(ForecastError::DataError(
                "Series must contain at least one point".to_string(),
            ));
        }

        for (i, point) in points.iter().enumerate() {
            if !point.price.is_finite() || point.price <= 0.0 {
                return Err(ForecastError::DataError(format!(
                    "Price at {} must be positive and finite, got {}",
                    point.date, point.price
                )));
            }
            if i > 0 && points[i - 1].date >= point.date {
                return Err(ForecastError::DataError(format!(
                    "Dates must be strictly increasing: {} follows {}",
                    point.date,
                    points[i - 1].date
                )));
            }
        }

        Ok(Self { points })
    }

    /// Build a series of consecutive days starting at `start` (for testing and
    /// for callers that only have prices)
    pub fn from_prices(start: NaiveDate, prices: &[f64]) -> Result<Self> {
        let points = start
            .iter_days()
            .zip(prices)
            .map(|(date, &price)| PricePoint::new(date, price, 0))
            .collect();
        Self::new(points)
    }

    /// The points in chronological order
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Prices in chronological order
    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Oldest point
    pub fn first(&self) -> &PricePoint {
        &self.points[0]
    }

    /// Most recent point
    pub fn last(&self) -> &PricePoint {
        &self.points[self.points.len() - 1]
    }

    /// Most recent price
    pub fn last_price(&self) -> f64 {
        self.last().price
    }

    /// The last `n` points as a new series (the whole series if `n >= len`)
    pub fn tail(&self, n: usize) -> Result<Series> {
        let start = self.points.len().saturating_sub(n);
        Series::new(self.points[start..].to_vec())
    }

    /// Split off the last `holdout` points: `(train, test)`.
    ///
    /// # Errors
    /// * `InvalidParameter` when `holdout` is zero
    /// * `DataError` when nothing would be left for training
    pub fn split_holdout(&self, holdout: usize) -> Result<(Series, Series)> {
        if holdout == 0 {
            return Err(ForecastError::InvalidParameter(
                "Hold-out length must be greater than zero".to_string(),
            ));
        }
        if holdout >= self.points.len() {
            return Err(ForecastError::DataError(format!(
                "Hold-out of {} leaves no training data in a series of {}",
                holdout,
                self.points.len()
            )));
        }

        let split = self.points.len() - holdout;
        Ok((
            Series::new(self.points[..split].to_vec())?,
            Series::new(self.points[split..].to_vec())?,
        ))
    }

    /// Summary statistics of the prices
    pub fn summary(&self) -> SeriesSummary {
        let prices = self.prices();
        let std_dev = if prices.len() < 2 {
            0.0
        } else {
            prices.iter().std_dev()
        };

        SeriesSummary {
            count: prices.len(),
            mean: prices.iter().mean(),
            std_dev,
            min: Statistics::min(prices.iter()),
            max: Statistics::max(prices.iter()),
        }
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a PricePoint;
    type IntoIter = std::slice::Iter<'a, PricePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Descriptive statistics of a series' prices
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    /// Number of points
    pub count: usize,
    /// Arithmetic mean price
    pub mean: f64,
    /// Sample standard deviation (0 for a single point)
    pub std_dev: f64,
    /// Lowest price
    pub min: f64,
    /// Highest price
    pub max: f64,
}

impl std::fmt::Display for SeriesSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Series Summary ({} points):", self.count)?;
        writeln!(f, "  Mean:    {:.2}", self.mean)?;
        writeln!(f, "  Std Dev: {:.2}", self.std_dev)?;
        writeln!(f, "  Min:     {:.2}", self.min)?;
        writeln!(f, "  Max:     {:.2}", self.max)?;
        Ok(())
    }
}
