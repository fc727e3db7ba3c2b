//! Trend signal engine: candles in, indicator series, LONG/SHORT/HOLD decision
//! and ATR-bounded trade levels out.

pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;

pub use config::EngineConfig;
pub use indicators::{IndicatorError, IndicatorPipeline};
pub use models::{Candle, EnrichedCandle, MarketSummary, Signal, TradeParams, TradeSuggestion};
pub use signals::{SignalEngine, TradeParameterAdvisor};
