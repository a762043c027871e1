// crates/covidtrend-core/src/config.rs
use crate::error::{Result, TrendError};
use crate::suggest::DEFAULT_SUGGESTION_LIMIT;
use crate::traits::LinkBuilder;
use crate::trend::DEFAULT_MIN_PEAK_CASES;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// County codes of the five New York City boroughs.
pub const NYC_BOROUGH_CODES: [&str; 5] = ["36061", "36047", "36081", "36005", "36085"];

/// The built-in merge rule: all boroughs report as "New York City".
pub static NEW_YORK_CITY: Lazy<MergeRule> = Lazy::new(|| MergeRule {
    codes: NYC_BOROUGH_CODES.iter().map(|s| s.to_string()).collect(),
    label: "New York City".to_string(),
    display_name: "New York City".to_string(),
});

/// Several county codes that report as one unit.
///
/// The source feed files such areas under a single label (and usually no
/// FIPS code at all), so records are matched by `label`, not by code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRule {
    pub codes: Vec<String>,
    /// Value of `DailyRecord::region_label` carried by the merged rows.
    pub label: String,
    /// Name shown instead of a per-code county name.
    pub display_name: String,
}

impl MergeRule {
    pub fn new_york_city() -> Self {
        NEW_YORK_CITY.clone()
    }

    pub fn covers(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    /// First rule in `rules` covering `code`, if any.
    pub fn find<'r>(rules: &'r [MergeRule], code: &str) -> Option<&'r MergeRule> {
        rules.iter().find(|r| r.covers(code))
    }
}

/// Href templates; `{fips}` is replaced with the region id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Routes {
    pub county: String,
    pub state: String,
}

impl Default for Routes {
    fn default() -> Self {
        Routes {
            county: "/county/{fips}".to_string(),
            state: "/state/{fips}".to_string(),
        }
    }
}

impl LinkBuilder for Routes {
    fn county_href(&self, fips: &str) -> String {
        self.county.replace("{fips}", fips)
    }

    fn state_href(&self, fips: &str) -> String {
        self.state.replace("{fips}", fips)
    }
}

/// Engine tunables. Every field has a default, so a config file only needs
/// the keys it changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Trend rows need a peak strictly above this.
    pub min_peak_cases: u64,
    pub suggestion_limit: usize,
    pub merge_rules: Vec<MergeRule>,
    pub routes: Routes,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            min_peak_cases: DEFAULT_MIN_PEAK_CASES,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            merge_rules: vec![MergeRule::new_york_city()],
            routes: Routes::default(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        for rule in &self.merge_rules {
            if rule.codes.is_empty() {
                return Err(TrendError::Config(format!(
                    "merge rule '{}' has no codes",
                    rule.display_name
                )));
            }
            if rule.label.is_empty() {
                return Err(TrendError::Config(format!(
                    "merge rule for {:?} has an empty label",
                    rule.codes
                )));
            }
        }
        Ok(())
    }

    #[cfg(feature = "json")]
    pub fn from_json_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let reader = crate::loader::open_stream(path.as_ref())?;
        let config: EngineConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_merges_the_five_boroughs() {
        let cfg = EngineConfig::default();
        for code in NYC_BOROUGH_CODES {
            assert_eq!(
                MergeRule::find(&cfg.merge_rules, code).map(|r| r.display_name.as_str()),
                Some("New York City")
            );
        }
        assert!(MergeRule::find(&cfg.merge_rules, "36001").is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn routes_fill_in_the_code() {
        let routes = Routes::default();
        assert_eq!(routes.county_href("06001"), "/county/06001");
        assert_eq!(routes.state_href("06"), "/state/06");
    }

    #[test]
    fn rejects_empty_rules() {
        let mut cfg = EngineConfig::default();
        cfg.merge_rules.push(MergeRule {
            codes: Vec::new(),
            label: "X".into(),
            display_name: "X".into(),
        });
        assert!(matches!(cfg.validate(), Err(TrendError::Config(_))));
    }

    #[cfg(feature = "json")]
    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: EngineConfig = serde_json::from_str(r#"{"min_peak_cases": 10}"#).unwrap();
        assert_eq!(cfg.min_peak_cases, 10);
        assert_eq!(cfg.suggestion_limit, DEFAULT_SUGGESTION_LIMIT);
        assert_eq!(cfg.merge_rules.len(), 1);
    }
}
