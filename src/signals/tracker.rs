//! Caller-owned signal state.
//!
//! The engine never remembers what it reported. A host that wants "only
//! alert on new signals" keeps a [`SignalState`] and threads it through each
//! cycle; every method here returns the next state instead of mutating.

use serde::{Deserialize, Serialize};

use crate::config::TrackerConfig;
use crate::models::Signal;

/// What a freshly observed signal means relative to the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TrackerEvent {
    /// An actionable signal different from the live one.
    NewSignal {
        signal: Signal,
        sequence: u64,
    },
    /// HOLD after a live signal.
    Ended { previous: Signal },
    Unchanged,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalTracker {
    pub last_signal: Option<Signal>,
    pub signal_count: u64,
}

impl SignalTracker {
    pub fn observe(&self, signal: Signal) -> (SignalTracker, TrackerEvent) {
        match (signal, self.last_signal) {
            (Signal::Hold, Some(previous)) => (
                SignalTracker {
                    last_signal: None,
                    signal_count: self.signal_count,
                },
                TrackerEvent::Ended { previous },
            ),
            (Signal::Hold, None) => (*self, TrackerEvent::Unchanged),
            (signal, Some(last)) if signal == last => (*self, TrackerEvent::Unchanged),
            (signal, _) => {
                let sequence = self.signal_count + 1;
                (
                    SignalTracker {
                        last_signal: Some(signal),
                        signal_count: sequence,
                    },
                    TrackerEvent::NewSignal { signal, sequence },
                )
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub signal: Signal,
    pub price: f64,
    pub timestamp: i64,
}

/// Bounded list of recorded signals, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalHistory {
    entries: Vec<HistoryEntry>,
    limit: usize,
    price_move_pct: f64,
}

impl SignalHistory {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            entries: Vec::new(),
            limit: config.history_limit.max(1),
            price_move_pct: config.price_move_pct,
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Whether `entry` is worth recording: the history is empty, the signal
    /// changed, or price moved more than `price_move_pct` of the new price.
    pub fn should_record(&self, entry: &HistoryEntry) -> bool {
        match self.entries.last() {
            None => true,
            Some(last) => {
                last.signal != entry.signal
                    || (last.price - entry.price).abs() > entry.price * self.price_move_pct
            }
        }
    }

    /// Next history and whether `entry` was appended.
    pub fn record(&self, entry: HistoryEntry) -> (SignalHistory, bool) {
        if !self.should_record(&entry) {
            return (self.clone(), false);
        }
        let mut entries = self.entries.clone();
        entries.push(entry);
        if entries.len() > self.limit {
            let excess = entries.len() - self.limit;
            entries.drain(..excess);
        }
        (
            SignalHistory {
                entries,
                limit: self.limit,
                price_move_pct: self.price_move_pct,
            },
            true,
        )
    }
}

impl Default for SignalHistory {
    fn default() -> Self {
        Self::new(&TrackerConfig::default())
    }
}

/// Everything a polling host carries between cycles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalState {
    pub tracker: SignalTracker,
    pub history: SignalHistory,
}

impl SignalState {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            tracker: SignalTracker::default(),
            history: SignalHistory::new(config),
        }
    }
}
