//! Signal evaluation interfaces.

pub mod decision;
pub mod engine;
pub mod summary;
pub mod tracker;

pub use decision::TradeParameterAdvisor;
pub use engine::{MissingIndicatorValue, SignalEngine};
pub use summary::snapshot;
pub use tracker::{HistoryEntry, SignalHistory, SignalState, SignalTracker, TrackerEvent};
