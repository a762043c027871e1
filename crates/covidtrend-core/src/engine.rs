// crates/covidtrend-core/src/engine.rs

//! # Trend & Lookup Engine
//!
//! [`TrendEngine`] owns a [`Dataset`] and an [`EngineConfig`] and answers the
//! dashboard's queries. Tables are checked once in [`TrendEngine::new`]; after
//! that every query is infallible and side-effect free.

use crate::config::EngineConfig;
use crate::error::{Result, TrendError};
use crate::model::{
    CountySnapshot, Dataset, DbStats, RegionView, SearchSuggestion, StateName, StateValue,
    TrendEntry, ZipValue,
};
use crate::region::{counties_by_state, resolve_county, resolve_state};
use crate::suggest::match_prefix;
use crate::text::state_prefix;
use crate::traits::LinkBuilder;
use crate::trend::rank_trends;
use once_cell::sync::OnceCell;

pub struct TrendEngine {
    dataset: Dataset,
    config: EngineConfig,
    links: Box<dyn LinkBuilder>,
    /// `(fips, county name)` sorted by name; built on first use.
    sorted_county_names: OnceCell<Vec<(String, String)>>,
}

impl TrendEngine {
    /// Build an engine whose hrefs come from `config.routes`.
    pub fn new(dataset: Dataset, config: EngineConfig) -> Result<Self> {
        let links = Box::new(config.routes.clone());
        Self::build(dataset, config, links)
    }

    /// Build an engine with a custom link builder.
    pub fn with_links<L>(dataset: Dataset, config: EngineConfig, links: L) -> Result<Self>
    where
        L: LinkBuilder + 'static,
    {
        Self::build(dataset, config, Box::new(links))
    }

    fn build(dataset: Dataset, config: EngineConfig, links: Box<dyn LinkBuilder>) -> Result<Self> {
        config.validate()?;
        validate_tables(&dataset)?;
        Ok(TrendEngine {
            dataset,
            config,
            links,
            sorted_county_names: OnceCell::new(),
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn stats(&self) -> DbStats {
        self.dataset.stats()
    }

    // -----------------------------------------------------------------------
    // REGIONS
    // -----------------------------------------------------------------------

    pub fn county_by_fips(&self, fips: &str) -> RegionView<'_> {
        resolve_county(
            fips,
            &self.dataset.counties,
            &self.dataset.county_names,
            &self.dataset.state_names,
            &self.config.merge_rules,
        )
    }

    pub fn state_by_fips(&self, fips: &str) -> RegionView<'_> {
        resolve_state(fips, &self.dataset.states, &self.dataset.state_names)
    }

    /// Latest-day county rows of one state.
    pub fn counties_by_state(&self, state_fips: &str) -> Vec<CountySnapshot> {
        counties_by_state(state_fips, &self.dataset.counties, |f| {
            self.links.county_href(f)
        })
    }

    pub fn state_name(&self, fips: &str) -> Option<&StateName> {
        self.dataset.state_names.get(fips)
    }

    // -----------------------------------------------------------------------
    // TRENDS
    // -----------------------------------------------------------------------

    /// Counties ranked by percent increase over the last `days` days.
    /// Names read `"County, ST"`.
    pub fn trending_counties(&self, days: usize) -> Vec<TrendEntry> {
        let names = &self.dataset.county_names;
        let states = &self.dataset.state_names;
        rank_trends(
            &self.dataset.counties,
            days,
            self.config.min_peak_cases,
            |fips| {
                let county = names.get(fips).map(String::as_str).unwrap_or(fips);
                let abbreviation = state_prefix(fips)
                    .and_then(|code| states.get(code))
                    .map(|s| s.abbreviation.as_str())
                    .unwrap_or("");
                Some(format!("{county}, {abbreviation}"))
            },
            |fips| self.links.county_href(fips),
        )
    }

    /// States ranked by percent increase over the last `days` days.
    pub fn trending_states(&self, days: usize) -> Vec<TrendEntry> {
        let states = &self.dataset.state_names;
        rank_trends(
            &self.dataset.states,
            days,
            self.config.min_peak_cases,
            |fips| states.get(fips).map(|s| s.full.clone()),
            |fips| self.links.state_href(fips),
        )
    }

    // -----------------------------------------------------------------------
    // SUGGESTIONS
    // -----------------------------------------------------------------------

    /// County table as `(fips, name)`, sorted by name (ties keep FIPS order).
    pub fn sorted_county_names(&self) -> &[(String, String)] {
        self.sorted_county_names.get_or_init(|| {
            let mut list: Vec<(String, String)> = self
                .dataset
                .county_names
                .iter()
                .map(|(fips, name)| (fips.clone(), name.clone()))
                .collect();
            list.sort_by(|a, b| a.1.cmp(&b.1));
            list
        })
    }

    /// Counties whose name starts with `term`; value is the county FIPS.
    pub fn county_suggestions_by_name(&self, term: &str) -> Vec<SearchSuggestion<String>> {
        let states = &self.dataset.state_names;
        match_prefix(
            self.sorted_county_names(),
            term,
            1,
            |(fips, name)| {
                let state = state_prefix(fips)
                    .and_then(|code| states.get(code))
                    .map(|s| s.full.as_str())
                    .unwrap_or("");
                format!("{name}, {state}")
            },
            |(fips, _)| fips.clone(),
            self.config.suggestion_limit,
        )
    }

    /// ZIP codes starting with `term`.
    pub fn county_suggestions_by_zip(&self, term: &str) -> Vec<SearchSuggestion<ZipValue>> {
        match_prefix(
            &self.dataset.zips,
            term,
            0,
            |z| format!("{}, {} {} {}", z.city, z.state, z.zip, z.county),
            |z| ZipValue {
                fips: z.fips.clone(),
                zip_code: z.zip.clone(),
            },
            self.config.suggestion_limit,
        )
    }

    /// States whose full name starts with `term`, in FIPS order.
    pub fn state_suggestions(&self, term: &str) -> Vec<SearchSuggestion<StateValue>> {
        let states: Vec<(&str, &str)> = self
            .dataset
            .state_names
            .iter()
            .map(|(fips, s)| (fips.as_str(), s.full.as_str()))
            .collect();

        match_prefix(
            &states,
            term,
            1,
            |(_, name)| name.to_string(),
            |(fips, name)| StateValue {
                fips: fips.to_string(),
                name: name.to_string(),
            },
            self.config.suggestion_limit,
        )
    }
}

/// Every named county must have its parent state in the state table; the
/// resolvers and suggestion labels depend on it.
fn validate_tables(dataset: &Dataset) -> Result<()> {
    for fips in dataset.county_names.keys() {
        let parent = state_prefix(fips).filter(|code| dataset.state_names.contains_key(*code));
        if parent.is_none() {
            return Err(TrendError::IncompleteTable(format!(
                "county {fips} has no parent state entry"
            )));
        }
    }

    let unnamed = dataset
        .states
        .iter()
        .filter(|r| !r.region_id.is_empty() && !dataset.state_names.contains_key(&r.region_id))
        .count();
    if unnamed > 0 {
        log::warn!("engine: {unnamed} state record(s) have no state name entry");
    }
    Ok(())
}
