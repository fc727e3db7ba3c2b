//! Unit tests for market summary snapshots

use trendsignal::models::{Candle, EnrichedCandle};
use trendsignal::signals::snapshot;

fn enriched(timestamp: i64, close: f64, volume: f64) -> EnrichedCandle {
    EnrichedCandle {
        candle: Candle::new(timestamp, close, close + 1.0, close - 1.0, close, volume),
        ema_short: close - 1.0,
        ema_long: close - 2.0,
        macd_line: 0.4,
        macd_signal: 0.3,
        macd_histogram: 0.1,
        rsi: 61.0,
        atr: 1.5,
        obv: 12_000.0,
    }
}

#[test]
fn test_snapshot_needs_two_rows() {
    assert!(snapshot(&[]).is_none());
    assert!(snapshot(&[enriched(0, 100.0, 1.0)]).is_none());
}

#[test]
fn test_snapshot_projection() {
    let rows = [enriched(0, 90.0, 1.0), enriched(60, 100.0, 3.0), enriched(120, 105.0, 7.0)];
    let summary = snapshot(&rows).unwrap();

    assert_eq!(summary.timestamp, 120);
    assert_eq!(summary.current_price, 105.0);
    assert_eq!(summary.price_change, 5.0);
    assert!((summary.price_change_pct - 5.0).abs() < 1e-12);
    assert_eq!(summary.volume, 7.0);
    assert_eq!(summary.rsi, 61.0);
    assert_eq!(summary.macd, 0.4);
    assert_eq!(summary.macd_signal, 0.3);
    assert_eq!(summary.ema_short, 104.0);
    assert_eq!(summary.ema_long, 103.0);
    assert_eq!(summary.atr, 1.5);
    assert_eq!(summary.obv, 12_000.0);
}

#[test]
fn test_format_update() {
    let summary = snapshot(&[enriched(0, 100.0, 1.0), enriched(60, 99.0, 1234.4)]).unwrap();
    assert_eq!(
        summary.format_update("ETH/USDT"),
        "ETH/USDT: $99.00 (-1.00%) | Volume: 1234 | RSI: 61.0"
    );
}
