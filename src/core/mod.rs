//! Core application primitives (evaluation cycle)

pub mod runtime;

pub use runtime::*;
