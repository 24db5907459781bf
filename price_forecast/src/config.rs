//! Configuration for series generation, models and the prediction report
//!
//! All settings deserialize from JSON and fall back to the documented
//! defaults for missing fields.

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Random-walk parameters of one ticker symbol
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymbolProfile {
    /// Price of the first generated day
    pub start_price: f64,
    /// Daily volatility as a fraction of price
    pub volatility: f64,
    /// Daily drift as a fraction of price
    pub drift: f64,
}

impl SymbolProfile {
    /// Create a new profile
    pub fn new(start_price: f64, volatility: f64, drift: f64) -> Result<Self> {
        let profile = Self {
            start_price,
            volatility,
            drift,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Check the profile describes a positive, finite random walk
    pub fn validate(&self) -> Result<()> {
        if !self.start_price.is_finite() || self.start_price <= 0.0 {
            return Err(ForecastError::InvalidParameter(format!(
                "Start price must be positive, got {}",
                self.start_price
            )));
        }
        if !self.volatility.is_finite() || self.volatility < 0.0 {
            return Err(ForecastError::InvalidParameter(format!(
                "Volatility must be non-negative, got {}",
                self.volatility
            )));
        }
        if !self.drift.is_finite() {
            return Err(ForecastError::InvalidParameter(
                "Drift must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SymbolProfile {
    fn default() -> Self {
        Self {
            start_price: 100.0,
            volatility: 0.02,
            drift: 0.0003,
        }
    }
}

/// Symbol profiles keyed by upper-case ticker, with a fallback for unknown
/// symbols
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolProfiles {
    profiles: HashMap<String, SymbolProfile>,
    fallback: SymbolProfile,
}

impl SymbolProfiles {
    /// An empty registry where every symbol uses `fallback`
    pub fn with_fallback(fallback: SymbolProfile) -> Self {
        Self {
            profiles: HashMap::new(),
            fallback,
        }
    }

    /// Add or replace the profile of `symbol`
    pub fn insert(&mut self, symbol: &str, profile: SymbolProfile) {
        self.profiles.insert(symbol.to_uppercase(), profile);
    }

    /// Profile of `symbol`, case-insensitive; unknown symbols get the fallback
    pub fn get(&self, symbol: &str) -> SymbolProfile {
        self.profiles
            .get(&symbol.to_uppercase())
            .copied()
            .unwrap_or(self.fallback)
    }

    /// Whether `symbol` has its own profile
    pub fn contains(&self, symbol: &str) -> bool {
        self.profiles.contains_key(&symbol.to_uppercase())
    }

    /// Profile used for symbols without one
    pub fn fallback(&self) -> SymbolProfile {
        self.fallback
    }

    /// Known symbols in alphabetical order
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        symbols.sort_unstable();
        symbols
    }

    /// Validate every profile
    pub fn validate(&self) -> Result<()> {
        self.fallback.validate()?;
        self.profiles.values().try_for_each(SymbolProfile::validate)
    }
}

impl Default for SymbolProfiles {
    fn default() -> Self {
        let mut profiles = Self::with_fallback(SymbolProfile::default());
        profiles.insert(
            "AAPL",
            SymbolProfile {
                start_price: 150.0,
                volatility: 0.02,
                drift: 0.0002,
            },
        );
        profiles.insert(
            "GOOGL",
            SymbolProfile {
                start_price: 2500.0,
                volatility: 0.02,
                drift: 0.0001,
            },
        );
        profiles.insert(
            "TSLA",
            SymbolProfile {
                start_price: 800.0,
                volatility: 0.03,
                drift: 0.0003,
            },
        );
        profiles.insert("MSFT", SymbolProfile::default());
        profiles
    }
}

/// Per-model parameters used by the forecast engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    /// Window of the simple moving average
    pub sma_window: usize,
    /// Period of the exponential moving average
    pub ema_period: usize,
    /// Trailing points fitted by the linear trend
    pub linear_lookback: usize,
    /// Trailing points seen by the differenced autoregressive heuristic
    pub drift_lookback: usize,
    /// Number of recent differences averaged into the drift
    pub drift_order: usize,
    /// Full width of the multiplicative jitter of the smoothing branches
    pub smoothing_jitter: f64,
    /// Full width of the jitter applied to the accumulated drift
    pub drift_jitter: f64,
    /// Full width of the jitter of the naive fallback
    pub naive_jitter: f64,
    /// Forecasts never drop below this fraction of the last price
    pub floor_ratio: f64,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            sma_window: 20,
            ema_period: 20,
            linear_lookback: 60,
            drift_lookback: 30,
            drift_order: 2,
            smoothing_jitter: 0.02,
            drift_jitter: 0.01,
            naive_jitter: 0.02,
            floor_ratio: 0.8,
        }
    }
}

impl ModelSettings {
    /// Reject zero windows, negative jitter and floors outside `(0, 1]`
    pub fn validate(&self) -> Result<()> {
        let windows = [
            ("sma_window", self.sma_window),
            ("ema_period", self.ema_period),
            ("linear_lookback", self.linear_lookback),
            ("drift_lookback", self.drift_lookback),
            ("drift_order", self.drift_order),
        ];
        for (name, value) in windows {
            if value == 0 {
                return Err(ForecastError::InvalidParameter(format!(
                    "{} must be greater than zero",
                    name
                )));
            }
        }

        let jitters = [
            ("smoothing_jitter", self.smoothing_jitter),
            ("drift_jitter", self.drift_jitter),
            ("naive_jitter", self.naive_jitter),
        ];
        for (name, value) in jitters {
            if !(0.0..2.0).contains(&value) {
                return Err(ForecastError::InvalidParameter(format!(
                    "{} must be in [0, 2), got {}",
                    name, value
                )));
            }
        }

        if !(self.floor_ratio > 0.0 && self.floor_ratio <= 1.0) {
            return Err(ForecastError::InvalidParameter(format!(
                "floor_ratio must be in (0, 1], got {}",
                self.floor_ratio
            )));
        }

        Ok(())
    }
}

/// Top-level configuration of the prediction report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Days of generated history
    pub history_days: usize,
    /// Trailing days held out for the accuracy back-test
    pub holdout_days: usize,
    /// Historical days included in the chart series
    pub chart_history_days: usize,
    /// Horizons offered to callers; advisory only
    pub horizon_presets: Vec<usize>,
    /// Random-walk parameters per symbol
    pub symbols: SymbolProfiles,
    /// Model parameters
    pub models: ModelSettings,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            history_days: 365,
            holdout_days: 30,
            chart_history_days: 90,
            horizon_presets: vec![7, 14, 30, 60],
            symbols: SymbolProfiles::default(),
            models: ModelSettings::default(),
        }
    }
}

impl PredictorConfig {
    /// Parse a configuration from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate all nested settings
    pub fn validate(&self) -> Result<()> {
        if self.history_days == 0 {
            return Err(ForecastError::InvalidParameter(
                "history_days must be greater than zero".to_string(),
            ));
        }
        if self.holdout_days == 0 || self.holdout_days >= self.history_days {
            return Err(ForecastError::InvalidParameter(format!(
                "holdout_days must be in 1..{}, got {}",
                self.history_days, self.holdout_days
            )));
        }
        if self.horizon_presets.contains(&0) {
            return Err(ForecastError::InvalidParameter(
                "horizon presets must be positive".to_string(),
            ));
        }
        self.symbols.validate()?;
        self.models.validate()
    }
}
