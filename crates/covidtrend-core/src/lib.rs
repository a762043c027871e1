// crates/covidtrend-core/src/lib.rs

//! # covidtrend-core
//!
//! In-memory trend and lookup engine over county- and state-level daily
//! COVID counts (NYT layout).
//!
//! - [`window`]: trailing window of the last N distinct days
//! - [`aggregate`]: per-region baseline/peak inside a window
//! - [`trend`]: ranking by percent increase
//! - [`region`]: county/state resolution, incl. merged areas (NYC)
//! - [`suggest`]: capped prefix search for autocomplete
//! - [`engine`]: [`TrendEngine`], the injected-dependency front door
//!
//! ```no_run
//! use covidtrend_core::{Dataset, EngineConfig, TrendEngine};
//!
//! let engine = TrendEngine::new(Dataset::load()?, EngineConfig::default())?;
//! for entry in engine.trending_counties(7).iter().rev().take(5) {
//!     println!("{} +{}%", entry.name, entry.percent_increase);
//! }
//! # Ok::<(), covidtrend_core::TrendError>(())
//! ```

pub mod aggregate;
pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod region;
pub mod suggest;
pub mod text;
pub mod timeframe;
pub mod traits;
pub mod trend;
pub mod window;

// Re-exports
pub use crate::config::{EngineConfig, MergeRule, Routes};
pub use crate::engine::TrendEngine;
pub use crate::error::{Result, TrendError};
pub use crate::model::{
    CountySnapshot, DailyRecord, Dataset, DbStats, PercentIncrease, RegionView, SearchSuggestion,
    StateName, StateValue, TrendEntry, ZipRecord, ZipValue,
};
pub use crate::timeframe::TimeFrame;
pub use crate::traits::{LinkBuilder, SearchFields};
