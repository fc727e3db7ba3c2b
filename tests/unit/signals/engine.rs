//! Unit tests for signal engine

use trendsignal::config::DecisionThresholds;
use trendsignal::models::{Candle, EnrichedCandle, Signal};
use trendsignal::signals::SignalEngine;

fn row(
    ema_short: f64,
    ema_long: f64,
    macd_line: f64,
    macd_signal: f64,
    rsi: f64,
    obv: f64,
) -> EnrichedCandle {
    EnrichedCandle {
        candle: Candle::new(0, 100.0, 101.0, 99.0, 100.0, 10.0),
        ema_short,
        ema_long,
        macd_line,
        macd_signal,
        macd_histogram: macd_line - macd_signal,
        rsi,
        atr: 2.0,
        obv,
    }
}

fn long_pair() -> (EnrichedCandle, EnrichedCandle) {
    (
        row(101.0, 100.0, 0.5, 0.2, 55.0, 1100.0),
        row(99.0, 100.0, -1.0, -1.0, 50.0, 1000.0),
    )
}

fn short_pair() -> (EnrichedCandle, EnrichedCandle) {
    (
        row(99.0, 100.0, -0.5, -0.2, 45.0, 900.0),
        row(101.0, 100.0, 1.0, 1.0, 50.0, 1000.0),
    )
}

#[test]
fn test_bullish_crossover_confirmed_is_long() {
    let (current, previous) = long_pair();
    let engine = SignalEngine::default();
    assert_eq!(engine.decide(Some(&current), Some(&previous)), Signal::Long);

    let decision = engine.evaluate(Some(&current), Some(&previous));
    assert_eq!(decision.rule.as_deref(), Some("long_entry"));
}

#[test]
fn test_bearish_crossover_confirmed_is_short() {
    let (current, previous) = short_pair();
    let engine = SignalEngine::default();
    assert_eq!(engine.decide(Some(&current), Some(&previous)), Signal::Short);
}

#[test]
fn test_crossover_from_equal_emas_counts() {
    let previous = row(100.0, 100.0, -1.0, -1.0, 50.0, 1000.0);
    let (current, _) = long_pair();
    assert_eq!(SignalEngine::default().decide(Some(&current), Some(&previous)), Signal::Long);
}

#[test]
fn test_each_confirmation_is_required_for_long() {
    let engine = SignalEngine::default();
    let (current, previous) = long_pair();

    let mut overbought = current;
    overbought.rsi = 70.0;
    assert_eq!(engine.decide(Some(&overbought), Some(&previous)), Signal::Hold);

    let mut macd_under = current;
    macd_under.macd_line = 0.2;
    assert_eq!(engine.decide(Some(&macd_under), Some(&previous)), Signal::Hold);

    let mut flat_obv = current;
    flat_obv.obv = previous.obv;
    assert_eq!(engine.decide(Some(&flat_obv), Some(&previous)), Signal::Hold);

    let mut no_cross = previous;
    no_cross.ema_short = 100.5;
    assert_eq!(engine.decide(Some(&current), Some(&no_cross)), Signal::Hold);
}

#[test]
fn test_oversold_blocks_short() {
    let (mut current, previous) = short_pair();
    current.rsi = 30.0;
    assert_eq!(SignalEngine::default().decide(Some(&current), Some(&previous)), Signal::Hold);
}

#[test]
fn test_absent_rows_hold() {
    let engine = SignalEngine::default();
    let (current, previous) = long_pair();
    assert_eq!(engine.decide(None, Some(&previous)), Signal::Hold);
    assert_eq!(engine.decide(Some(&current), None), Signal::Hold);
    assert_eq!(engine.decide_latest(&[]), Signal::Hold);
    assert_eq!(engine.decide_latest(&[current]), Signal::Hold);
}

#[test]
fn test_decide_latest_uses_last_two_rows() {
    let (current, previous) = long_pair();
    let filler = row(50.0, 100.0, 0.0, 0.0, 50.0, 0.0);
    let engine = SignalEngine::default();
    assert_eq!(engine.decide_latest(&[filler, previous, current]), Signal::Long);
    assert_eq!(engine.decide_latest(&[previous, current, filler]), Signal::Hold);
}

#[test]
fn test_missing_previous_value_holds() {
    let (current, mut previous) = long_pair();
    previous.obv = f64::NAN;
    assert_eq!(SignalEngine::default().decide(Some(&current), Some(&previous)), Signal::Hold);
}

#[test]
fn test_decision_is_repeatable() {
    let engine = SignalEngine::default();
    let (current, previous) = long_pair();
    let first = engine.decide(Some(&current), Some(&previous));
    let second = engine.decide(Some(&current), Some(&previous));
    assert_eq!(first, second);
}

#[test]
fn test_custom_thresholds() {
    let engine = SignalEngine::with_thresholds(&DecisionThresholds {
        rsi_overbought: 50.0,
        rsi_oversold: 30.0,
    });
    let (current, previous) = long_pair();
    assert_eq!(engine.decide(Some(&current), Some(&previous)), Signal::Hold);
}
