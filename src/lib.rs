//! covidtrend-rs
//!
//! Umbrella crate. Re-exports [`covidtrend_core`] so the demos under `demos/`
//! can be run from the workspace root (`cargo run --example basic_usage`).
pub use covidtrend_core::*;
