// crates/covidtrend-core/src/timeframe.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Chart time frames offered for a single region's series.
///
/// Unlike the trend window these count *records*, not distinct dates: a
/// resolved region holds one record per day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeFrame {
    Week,
    Month,
    #[default]
    Max,
}

impl TimeFrame {
    pub const ALL: [TimeFrame; 3] = [TimeFrame::Week, TimeFrame::Month, TimeFrame::Max];

    /// Number of trailing records kept, `None` for everything.
    pub fn days(self) -> Option<usize> {
        match self {
            TimeFrame::Week => Some(7),
            TimeFrame::Month => Some(30),
            TimeFrame::Max => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeFrame::Week => "7 days",
            TimeFrame::Month => "30 days",
            TimeFrame::Max => "Max",
        }
    }

    /// Trailing part of `records` covered by this time frame.
    pub fn slice<T>(self, records: &[T]) -> &[T] {
        match self.days() {
            Some(n) => &records[records.len().saturating_sub(n)..],
            None => records,
        }
    }
}

impl fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
