//! Forecast orchestration
//!
//! The engine selects a model strategy, asks it for raw predictions, floors
//! them at a fraction of the last historical price and dates them on the
//! consecutive days following the series.

use crate::config::ModelSettings;
use crate::data::{ForecastPoint, Series};
use crate::error::{ForecastError, Result};
use crate::metrics::{evaluate, Metrics};
use crate::models::ModelKind;
use crate::utils::future_dates;
use rand::RngCore;
use tracing::debug;

/// Dispatches forecasts to the selected model
#[derive(Debug, Clone, Default)]
pub struct ForecastEngine {
    settings: ModelSettings,
}

impl ForecastEngine {
    /// Create an engine with validated model settings
    pub fn new(settings: ModelSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// Model settings in use
    pub fn settings(&self) -> &ModelSettings {
        &self.settings
    }

    /// Forecast `horizon` days after the end of `series` with `model`.
    ///
    /// The result always holds exactly `horizon` points dated on consecutive
    /// days starting the day after the series' last date, each priced at no
    /// less than `floor_ratio` times the last historical price.
    ///
    /// # Errors
    /// * `InvalidParameter` when `horizon` is zero
    /// * the model's own errors, such as `InsufficientData` when its window
    ///   exceeds the series or `DegenerateFit` for a one-point linear fit
    pub fn forecast<R: RngCore>(
        &self,
        series: &Series,
        model: ModelKind,
        horizon: usize,
        rng: &mut R,
    ) -> Result<Vec<ForecastPoint>> {
        if horizon == 0 {
            return Err(ForecastError::InvalidParameter(
                "Forecast horizon must be greater than zero".to_string(),
            ));
        }

        let strategy = model.build(&self.settings)?;
        let raw = strategy.predict(series, horizon, rng)?;
        if raw.len() != horizon {
            return Err(ForecastError::DataError(format!(
                "{} returned {} predictions for a horizon of {}",
                model,
                raw.len(),
                horizon
            )));
        }

        let last_price = series.last_price();
        let floor = last_price * self.settings.floor_ratio;
        let dates = future_dates(series.last().date, horizon)?;

        debug!(model = model.id(), horizon, last_price, floor, "forecast produced");

        raw.into_iter()
            .zip(dates)
            .map(|(price, date)| {
                if !price.is_finite() {
                    return Err(ForecastError::DataError(format!(
                        "{} produced a non-finite price for {}",
                        model, date
                    )));
                }
                Ok(ForecastPoint::new(date, price.max(floor)))
            })
            .collect()
    }

    /// Hold out the last `holdout` points of `series`, forecast them from the
    /// remainder and score the forecast against what actually happened.
    ///
    /// # Errors
    /// * `InsufficientData` when the series has no more than `holdout` points
    pub fn backtest<R: RngCore>(
        &self,
        series: &Series,
        model: ModelKind,
        holdout: usize,
        rng: &mut R,
    ) -> Result<Metrics> {
        if holdout >= series.len() {
            return Err(forecast_math::MathError::InsufficientData(format!(
                "back-test hold-out of {} needs more than {} points",
                holdout,
                series.len()
            ))
            .into());
        }

        let (train, test) = series.split_holdout(holdout)?;
        let predicted = self.forecast(&train, model, holdout, rng)?;
        evaluate(&test, &predicted)
    }
}
