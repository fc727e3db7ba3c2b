//! Unit tests for caller-owned signal state

use trendsignal::config::TrackerConfig;
use trendsignal::models::Signal;
use trendsignal::signals::{HistoryEntry, SignalHistory, SignalTracker, TrackerEvent};

fn entry(signal: Signal, price: f64, timestamp: i64) -> HistoryEntry {
    HistoryEntry {
        signal,
        price,
        timestamp,
    }
}

#[test]
fn test_hold_without_live_signal_is_unchanged() {
    let tracker = SignalTracker::default();
    let (next, event) = tracker.observe(Signal::Hold);
    assert_eq!(event, TrackerEvent::Unchanged);
    assert_eq!(next, tracker);
}

#[test]
fn test_observe_does_not_mutate() {
    let tracker = SignalTracker::default();
    let _ = tracker.observe(Signal::Short);
    assert_eq!(tracker.last_signal, None);
    assert_eq!(tracker.signal_count, 0);
}

#[test]
fn test_history_dedups_same_signal_near_same_price() {
    let history = SignalHistory::default();
    let (history, recorded) = history.record(entry(Signal::Long, 100.0, 0));
    assert!(recorded);

    let (history, recorded) = history.record(entry(Signal::Long, 100.5, 60));
    assert!(!recorded);

    let (history, recorded) = history.record(entry(Signal::Long, 102.0, 120));
    assert!(recorded);

    let (history, recorded) = history.record(entry(Signal::Short, 102.0, 180));
    assert!(recorded);
    assert_eq!(history.entries().len(), 3);
    assert_eq!(history.last().map(|e| e.signal), Some(Signal::Short));
}

#[test]
fn test_history_keeps_most_recent_entries() {
    let mut history = SignalHistory::new(&TrackerConfig {
        history_limit: 3,
        price_move_pct: 0.01,
    });
    for i in 0..5 {
        let signal = if i % 2 == 0 { Signal::Long } else { Signal::Short };
        history = history.record(entry(signal, 100.0, i)).0;
    }
    let stamps: Vec<i64> = history.entries().iter().map(|e| e.timestamp).collect();
    assert_eq!(stamps, vec![2, 3, 4]);
}
