//! Utility functions for the price_forecast crate

use crate::error::{ForecastError, Result};
use chrono::{Days, NaiveDate};
use rand::Rng;

/// Consecutive calendar days following `last_date`
pub fn future_dates(last_date: NaiveDate, horizon: usize) -> Result<Vec<NaiveDate>> {
    (1..=horizon as u64)
        .map(|offset| {
            last_date.checked_add_days(Days::new(offset)).ok_or_else(|| {
                ForecastError::InvalidParameter(format!(
                    "{} days after {} is out of the calendar range",
                    offset, last_date
                ))
            })
        })
        .collect()
}

/// Symmetric multiplicative jitter `1 + (U(0,1) - 0.5) * width`
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, width: f64) -> f64 {
    1.0 + (rng.gen::<f64>() - 0.5) * width
}
