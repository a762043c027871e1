// crates/covidtrend-core/src/aggregate.rs
use crate::model::DailyRecord;
use std::collections::HashMap;

/// Baseline and peak case counts of one region inside a window.
///
/// `baseline` is the value at the region's *first* record in the window and
/// is never lowered afterwards; it is not a true minimum. `peak` is the
/// true maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BaselinePeak {
    pub baseline: u64,
    pub peak: u64,
}

/// Per-region baseline/peak over `window`, in first-sighting order.
pub fn aggregate_baseline_peak(window: &[DailyRecord]) -> Vec<(&str, BaselinePeak)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut out: Vec<(&str, BaselinePeak)> = Vec::new();

    for record in window {
        match index.get(record.region_id.as_str()) {
            Some(&slot) => {
                let entry = &mut out[slot].1;
                entry.peak = entry.peak.max(record.cases);
            }
            None => {
                index.insert(record.region_id.as_str(), out.len());
                out.push((
                    record.region_id.as_str(),
                    BaselinePeak {
                        baseline: record.cases,
                        peak: record.cases,
                    },
                ));
            }
        }
    }

    out
}
