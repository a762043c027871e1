//! covidtrend prelude: bring common types and traits into scope for demos and tests.

#![allow(unused_imports)]

pub use crate::config::{EngineConfig, MergeRule, Routes};
pub use crate::engine::TrendEngine;
pub use crate::error::{Result, TrendError};
pub use crate::model::{
    CountySnapshot, DailyRecord, Dataset, DbStats, PercentIncrease, RegionView, SearchSuggestion,
    StateName, StateValue, TrendEntry, ZipRecord, ZipValue,
};
pub use crate::timeframe::TimeFrame;
pub use crate::traits::{LinkBuilder, SearchFields};
