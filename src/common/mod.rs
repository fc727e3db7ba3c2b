//! Shared helpers used across indicator and decision code.

pub mod math;
