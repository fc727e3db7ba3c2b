//! Collaborator seams: candle sources and alert delivery.

pub mod alerts;
pub mod market_data;

pub use alerts::{Alert, AlertDispatcher, LogAlertDispatcher};
pub use market_data::{JsonFileProvider, MarketDataError, MarketDataProvider};
