// crates/covidtrend-core/src/window.rs

//! # Window Finder
//!
//! Locates the trailing slice of a date-ordered series that covers the last
//! N distinct calendar days.

use crate::model::DailyRecord;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Start index of the trailing window covering `distinct_day_count` days.
///
/// Scans from the end; the first record belonging to day N+1 marks the
/// boundary and is excluded. If the series holds `distinct_day_count` days
/// or fewer, the whole series is the window and `0` is returned.
///
/// A count of `0` returns `records.len()`: the very first date seen from the
/// end is already "one day too many", so the window is empty.
pub fn find_window_start(records: &[DailyRecord], distinct_day_count: usize) -> usize {
    let mut seen: HashSet<NaiveDate> = HashSet::new();

    for (i, record) in records.iter().enumerate().rev() {
        if !seen.contains(&record.date) {
            if seen.len() == distinct_day_count {
                return i + 1;
            }
            seen.insert(record.date);
        }
    }

    0
}

/// The trailing window itself.
pub fn window(records: &[DailyRecord], distinct_day_count: usize) -> &[DailyRecord] {
    let start = find_window_start(records, distinct_day_count);
    log::debug!(
        "window: {} of {} records cover the last {} day(s)",
        records.len() - start,
        records.len(),
        distinct_day_count
    );
    &records[start..]
}
