//! Shared data models spanning the engine layers.

pub mod candle;
pub mod indicators;
pub mod signal;
pub mod strategy;
pub mod summary;
pub mod trade;

pub use candle::Candle;
pub use indicators::EnrichedCandle;
pub use signal::{Signal, SignalDecision};
pub use strategy::{Condition, RuleGroup, RuleSet};
pub use summary::MarketSummary;
pub use trade::{TradeParams, TradeSuggestion};
