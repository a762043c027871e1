// crates/covidtrend-core/src/region.rs

//! # Region Resolver
//!
//! Maps a FIPS code to its display name and series. County resolution knows
//! about [`MergeRule`]s: every code of a rule resolves to the same merged
//! region, matched by record label.

use crate::config::MergeRule;
use crate::model::{CountySnapshot, DailyRecord, RegionView, StateName};
use crate::text::state_prefix;
use crate::window::window;
use std::collections::BTreeMap;

/// Resolve a county code into its series and `"County, State"` label.
pub fn resolve_county<'a>(
    fips: &str,
    records: &'a [DailyRecord],
    county_names: &BTreeMap<String, String>,
    state_names: &BTreeMap<String, StateName>,
    merge_rules: &[MergeRule],
) -> RegionView<'a> {
    if records.is_empty() {
        return RegionView::empty(fips);
    }

    let rule = MergeRule::find(merge_rules, fips);

    let (series, county_name): (Vec<&DailyRecord>, String) = match rule {
        Some(rule) => (
            records
                .iter()
                .filter(|r| r.region_label == rule.label)
                .collect(),
            rule.display_name.clone(),
        ),
        None => (
            records.iter().filter(|r| r.region_id == fips).collect(),
            county_names
                .get(fips)
                .cloned()
                .unwrap_or_else(|| fips.to_string()),
        ),
    };

    let parent = state_prefix(fips).and_then(|code| state_names.get(code));
    let display_name = match parent {
        Some(state) => format!("{county_name}, {}", state.full),
        None => county_name,
    };

    RegionView {
        id: fips.to_string(),
        records: series,
        display_name,
    }
}

/// Resolve a state code into its series and full name.
pub fn resolve_state<'a>(
    fips: &str,
    records: &'a [DailyRecord],
    state_names: &BTreeMap<String, StateName>,
) -> RegionView<'a> {
    if records.is_empty() {
        return RegionView::empty(fips);
    }

    RegionView {
        id: fips.to_string(),
        records: records.iter().filter(|r| r.region_id == fips).collect(),
        display_name: state_names
            .get(fips)
            .map(|s| s.full.clone())
            .unwrap_or_default(),
    }
}

/// Latest day's counts for every county whose code starts with `state_fips`.
pub fn counties_by_state<L>(
    state_fips: &str,
    records: &[DailyRecord],
    link: L,
) -> Vec<CountySnapshot>
where
    L: Fn(&str) -> String,
{
    window(records, 1)
        .iter()
        .filter(|r| r.region_id.starts_with(state_fips))
        .map(|r| CountySnapshot {
            county_name: r.region_label.clone(),
            fips: r.region_id.clone(),
            cases: r.cases,
            deaths: r.deaths,
            href: link(&r.region_id),
        })
        .collect()
}
