// crates/covidtrend-core/src/model.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// One day of counts for one region (a county or a state).
///
/// The flat series mixes all regions; records appear in non-decreasing date
/// order, which is what the window finder relies on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    /// FIPS code. May be empty for rows the source feed could not geocode
    /// (e.g. "Unknown" counties or the merged New York City rows).
    pub region_id: String,
    /// County name for county rows, state name for state rows.
    pub region_label: String,
    pub cases: u64,
    pub deaths: u64,
}

/// Full name + postal abbreviation of a state, keyed by two-digit FIPS.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateName {
    pub full: String,
    #[serde(alias = "abrv")]
    pub abbreviation: String,
}

/// One ZIP → county FIPS row.
///
/// Field order (zip, fips, city, state, county) is the order used by the
/// positional [`crate::traits::SearchFields`] impl.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipRecord {
    pub zip: String,
    pub fips: String,
    pub city: String,
    pub state: String,
    pub county: String,
}

/// Everything the engine reads. Owned by the caller, never mutated by queries.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub counties: Vec<DailyRecord>,
    pub states: Vec<DailyRecord>,
    /// County FIPS (5 digits) → county name.
    pub county_names: BTreeMap<String, String>,
    /// State FIPS (2 digits) → names.
    pub state_names: BTreeMap<String, StateName>,
    #[serde(default)]
    pub zips: Vec<ZipRecord>,
}

/// Simple aggregate statistics for a loaded [`Dataset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub county_records: usize,
    pub state_records: usize,
    pub county_names: usize,
    pub state_names: usize,
    pub zip_codes: usize,
}

impl Dataset {
    pub fn stats(&self) -> DbStats {
        DbStats {
            county_records: self.counties.len(),
            state_records: self.states.len(),
            county_names: self.county_names.len(),
            state_names: self.state_names.len(),
            zip_codes: self.zips.len(),
        }
    }

    /// Most recent date in the county series, if any.
    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.counties.last().map(|r| r.date)
    }
}

// -----------------------------------------------------------------------------
// DERIVED VIEWS
// -----------------------------------------------------------------------------

/// Percent change from baseline to peak, fixed to two decimals.
///
/// A zero baseline has no meaningful ratio and is reported as
/// [`PercentIncrease::Undefined`] instead of an infinite value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PercentIncrease {
    Defined(String),
    Undefined,
}

impl PercentIncrease {
    pub fn from_counts(baseline: u64, peak: u64) -> Self {
        if baseline == 0 {
            return PercentIncrease::Undefined;
        }
        let pct = (peak as f64 / baseline as f64 - 1.0) * 100.0;
        PercentIncrease::Defined(fixed_two(pct))
    }

    /// Numeric value parsed back from the fixed-point text.
    pub fn value(&self) -> Option<f64> {
        match self {
            PercentIncrease::Defined(s) => s.parse::<f64>().ok(),
            PercentIncrease::Undefined => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, PercentIncrease::Defined(_))
    }

    /// Ascending numeric order; undefined trends sort after every defined one.
    pub fn ascending(a: &Self, b: &Self) -> Ordering {
        match (a.value(), b.value()) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// Two-decimal text with exact halves rounded away from zero.
///
/// `{:.2}` breaks an exact tie towards the even digit. A value sits exactly on
/// a `.xx5` tie only when it is an odd multiple of 1/8, so that case is
/// rounded explicitly and every other value keeps the formatter's rounding.
fn fixed_two(x: f64) -> String {
    let eighths = x * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        let rounded = (x * 100.0).round() / 100.0;
        return format!("{rounded:.2}");
    }
    format!("{x:.2}")
}

impl fmt::Display for PercentIncrease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercentIncrease::Defined(s) => f.pad(s),
            PercentIncrease::Undefined => f.pad("undefined"),
        }
    }
}

impl Serialize for PercentIncrease {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One row of a "trending" ranking.
///
/// `baseline` is the case count at the region's first record inside the
/// window, `peak` the maximum inside the window. They serialize as
/// `low`/`high` for dashboard consumers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrendEntry {
    #[serde(rename = "fips")]
    pub region_id: String,
    pub name: String,
    #[serde(rename = "low")]
    pub baseline: u64,
    #[serde(rename = "high")]
    pub peak: u64,
    pub percent_increase: PercentIncrease,
    pub href: String,
}

/// A single autocomplete suggestion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchSuggestion<V> {
    pub display_text: String,
    pub value: V,
}

/// Value carried by ZIP-code suggestions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ZipValue {
    pub fips: String,
    pub zip_code: String,
}

/// Value carried by state suggestions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StateValue {
    pub fips: String,
    pub name: String,
}

/// A resolved county or state with its series, ready for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegionView<'a> {
    pub id: String,
    pub records: Vec<&'a DailyRecord>,
    pub display_name: String,
}

impl<'a> RegionView<'a> {
    pub fn empty(id: &str) -> Self {
        RegionView {
            id: id.to_string(),
            records: Vec::new(),
            display_name: String::new(),
        }
    }
}

/// Latest-day counts for one county of a state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CountySnapshot {
    pub county_name: String,
    pub fips: String,
    pub cases: u64,
    pub deaths: u64,
    pub href: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_increase_is_fixed_to_two_decimals() {
        assert_eq!(PercentIncrease::from_counts(100, 150).to_string(), "50.00");
        assert_eq!(PercentIncrease::from_counts(3, 4).to_string(), "33.33");
        assert_eq!(PercentIncrease::from_counts(200, 200).to_string(), "0.00");
    }

    #[test]
    fn exact_halves_round_up() {
        // 3.125% sits exactly between two cents.
        assert_eq!(PercentIncrease::from_counts(320, 330).to_string(), "3.13");
        assert_eq!(PercentIncrease::from_counts(32, 33).to_string(), "3.13");
        assert_eq!(PercentIncrease::from_counts(8, 9).to_string(), "12.50");
    }

    #[test]
    fn zero_baseline_is_undefined() {
        let p = PercentIncrease::from_counts(0, 500);
        assert_eq!(p, PercentIncrease::Undefined);
        assert_eq!(p.value(), None);
        assert_eq!(p.to_string(), "undefined");
    }

    #[test]
    fn ordering_is_numeric_not_lexicographic() {
        let hundred = PercentIncrease::Defined("100.00".into());
        let twenty = PercentIncrease::Defined("20.00".into());
        assert_eq!(PercentIncrease::ascending(&twenty, &hundred), Ordering::Less);
        assert_eq!(
            PercentIncrease::ascending(&hundred, &PercentIncrease::Undefined),
            Ordering::Less
        );
    }

    #[cfg(feature = "json")]
    #[test]
    fn state_name_accepts_abrv_key() {
        let s: StateName =
            serde_json::from_str(r#"{"full":"New York","abrv":"NY"}"#).unwrap();
        assert_eq!(s.abbreviation, "NY");
    }
}
