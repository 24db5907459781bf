//! Synthetic daily price series
//!
//! Each day the price takes a uniform random step scaled by the symbol's
//! volatility plus a drift step, then a small weekday adjustment:
//!
//! ```text
//! price += (U(0,1) - 0.5) * volatility * price + drift * price
//! price *= 0.999 on Mondays, 1.001 on Fridays
//! recorded = max(price, 0.5 * start_price)
//! ```
//!
//! Only the recorded price is floored. The walk itself may sink below the
//! floor, in which case the recorded series sits at the floor until the walk
//! climbs back above it.
//!
//! Volume is drawn independently from `[500_000, 1_500_000)`.

use crate::config::{SymbolProfile, SymbolProfiles};
use crate::data::{PricePoint, Series};
use crate::error::{ForecastError, Result};
use chrono::{Datelike, Days, NaiveDate, Utc, Weekday};
use rand::Rng;
use tracing::debug;

const MONDAY_FACTOR: f64 = 0.999;
const FRIDAY_FACTOR: f64 = 1.001;
const FLOOR_RATIO: f64 = 0.5;
const MIN_VOLUME: u64 = 500_000;
const MAX_VOLUME: u64 = 1_500_000;

/// Produces synthetic price series from per-symbol random-walk profiles
#[derive(Debug, Clone, Default)]
pub struct SeriesGenerator {
    profiles: SymbolProfiles,
}

impl SeriesGenerator {
    /// Create a generator over the given symbol profiles
    pub fn new(profiles: SymbolProfiles) -> Self {
        Self { profiles }
    }

    /// The symbol profiles in use
    pub fn profiles(&self) -> &SymbolProfiles {
        &self.profiles
    }

    /// Generate `days` points for `symbol` ending yesterday (UTC), so that a
    /// forecast of the result starts today
    pub fn generate<R: Rng + ?Sized>(&self, symbol: &str, days: usize, rng: &mut R) -> Result<Series> {
        self.generate_as_of(symbol, days, Utc::now().date_naive(), rng)
    }

    /// Generate `days` points for `symbol` covering `as_of - days` through
    /// `as_of - 1`.
    ///
    /// # Errors
    /// * `InvalidParameter` when `days` is zero or reaches before the calendar
    pub fn generate_as_of<R: Rng + ?Sized>(
        &self,
        symbol: &str,
        days: usize,
        as_of: NaiveDate,
        rng: &mut R,
    ) -> Result<Series> {
        if days == 0 {
            return Err(ForecastError::InvalidParameter(
                "Number of days must be greater than zero".to_string(),
            ));
        }

        let profile = self.profiles.get(symbol);
        let first_date = as_of.checked_sub_days(Days::new(days as u64)).ok_or_else(|| {
            ForecastError::InvalidParameter(format!(
                "{} days before {} is out of the calendar range",
                days, as_of
            ))
        })?;

        debug!(
            symbol,
            days,
            start_price = profile.start_price,
            volatility = profile.volatility,
            drift = profile.drift,
            "generating synthetic series"
        );

        let floor = profile.start_price * FLOOR_RATIO;
        let mut walk = profile.start_price;
        let points = first_date
            .iter_days()
            .take(days)
            .map(|date| {
                walk = next_price(&profile, walk, date, rng);
                PricePoint::new(date, walk.max(floor), rng.gen_range(MIN_VOLUME..MAX_VOLUME))
            })
            .collect();

        Series::new(points)
    }
}

/// One unfloored day of the random walk, including the weekday effect
fn next_price<R: Rng + ?Sized>(
    profile: &SymbolProfile,
    price: f64,
    date: NaiveDate,
    rng: &mut R,
) -> f64 {
    let random_change = (rng.gen::<f64>() - 0.5) * profile.volatility * price;
    let trend_change = profile.drift * price;
    let mut next = price + random_change + trend_change;

    match date.weekday() {
        Weekday::Mon => next *= MONDAY_FACTOR,
        Weekday::Fri => next *= FRIDAY_FACTOR,
        _ => {}
    }

    next
}
