//! Engine configuration with environment overrides.
//!
//! Every option has a default; `EngineConfig::from_env` only replaces the
//! values whose variables are set.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use thiserror::Error;

use crate::indicators::momentum::{macd_signal_lookback, rsi_lookback};
use crate::indicators::trend::ema_lookback;
use crate::indicators::volatility::atr_lookback;
use crate::indicators::IndicatorError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}")]
    InvalidValue {
        key: String,
        value: String,
    },
}

/// Deployment environment name from `APP_ENV` (defaults to `sandbox`).
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

/// Indicator lookback periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    pub ema_short: usize,
    pub ema_long: usize,
    pub rsi_period: usize,
    pub atr_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            ema_short: 20,
            ema_long: 50,
            rsi_period: 14,
            atr_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
        }
    }
}

impl IndicatorConfig {
    pub fn validate(&self) -> Result<(), IndicatorError> {
        let periods = [
            ("ema_short", self.ema_short),
            ("ema_long", self.ema_long),
            ("rsi_period", self.rsi_period),
            ("atr_period", self.atr_period),
            ("macd_fast", self.macd_fast),
            ("macd_slow", self.macd_slow),
            ("macd_signal", self.macd_signal),
        ];
        if let Some((name, _)) = periods.iter().find(|(_, p)| *p == 0) {
            return Err(IndicatorError::InvalidConfiguration(format!(
                "{name} must be a positive period"
            )));
        }
        if self.macd_fast >= self.macd_slow {
            return Err(IndicatorError::InvalidConfiguration(format!(
                "macd_fast ({}) must be smaller than macd_slow ({})",
                self.macd_fast, self.macd_slow
            )));
        }
        Ok(())
    }

    /// Minimum number of candles accepted by the pipeline.
    pub fn required_history(&self) -> usize {
        self.ema_long
            .max(self.macd_slow)
            .max(self.rsi_period)
            .max(self.atr_period)
    }

    /// Number of leading rows with at least one undefined indicator.
    pub fn warmup(&self) -> usize {
        [
            ema_lookback(self.ema_short),
            ema_lookback(self.ema_long),
            macd_signal_lookback(self.macd_slow, self.macd_signal),
            rsi_lookback(self.rsi_period),
            atr_lookback(self.atr_period),
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}

/// RSI bounds used by the default rule set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionThresholds {
    pub rsi_overbought: f64,
    pub rsi_oversold: f64,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            rsi_overbought: 70.0,
            rsi_oversold: 30.0,
        }
    }
}

/// Stop and target sizing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Stop distance in risk units (ATR).
    pub stop_atr_multiple: f64,
    /// Target distance as a multiple of the stop distance.
    pub reward_risk_ratio: f64,
    /// Risk unit as a fraction of entry when ATR is unavailable.
    pub fallback_risk_pct: f64,
    pub price_decimals: u32,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            stop_atr_multiple: 1.5,
            reward_risk_ratio: 2.0,
            fallback_risk_pct: 0.01,
            price_decimals: 2,
        }
    }
}

/// Caller-side signal history behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    pub history_limit: usize,
    /// Relative price move that re-records an unchanged signal.
    pub price_move_pct: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            history_limit: 10,
            price_move_pct: 0.01,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub indicators: IndicatorConfig,
    pub thresholds: DecisionThresholds,
    pub risk: RiskConfig,
    pub tracker: TrackerConfig,
}

impl EngineConfig {
    /// Defaults overridden by any of the recognised environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let ind = &mut config.indicators;
        override_from_env("EMA_SHORT", &mut ind.ema_short)?;
        override_from_env("EMA_LONG", &mut ind.ema_long)?;
        override_from_env("RSI_PERIOD", &mut ind.rsi_period)?;
        override_from_env("ATR_PERIOD", &mut ind.atr_period)?;
        override_from_env("MACD_FAST", &mut ind.macd_fast)?;
        override_from_env("MACD_SLOW", &mut ind.macd_slow)?;
        override_from_env("MACD_SIGNAL", &mut ind.macd_signal)?;

        override_from_env("RSI_OVERBOUGHT", &mut config.thresholds.rsi_overbought)?;
        override_from_env("RSI_OVERSOLD", &mut config.thresholds.rsi_oversold)?;

        override_from_env("STOP_ATR_MULTIPLE", &mut config.risk.stop_atr_multiple)?;
        override_from_env("REWARD_RISK_RATIO", &mut config.risk.reward_risk_ratio)?;
        override_from_env("FALLBACK_RISK_PCT", &mut config.risk.fallback_risk_pct)?;

        override_from_env("SIGNAL_HISTORY_LIMIT", &mut config.tracker.history_limit)?;

        Ok(config)
    }
}

fn override_from_env<T: FromStr>(key: &str, target: &mut T) -> Result<(), ConfigError> {
    if let Ok(raw) = env::var(key) {
        *target = parse_value(key, &raw)?;
    }
    Ok(())
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: raw.to_string(),
    })
}
