//! Basic usage example for covidtrend-rs
//!
//! This example demonstrates how to:
//! - Load the bundled dataset and build the engine
//! - Resolve a county (including the merged New York City area)
//! - Rank trending counties and states
//! - Ask for autocomplete suggestions

use covidtrend_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== covidtrend-rs Basic Usage Example ===\n");

    println!("Loading dataset...");
    let engine = TrendEngine::new(Dataset::load()?, EngineConfig::default())?;
    let stats = engine.stats();
    println!(
        "✓ Loaded {} county rows and {} state rows\n",
        stats.county_records, stats.state_records
    );

    // Example 1: A single county, last week
    println!("--- Example 1: Alameda County, last 7 days ---");
    let alameda = engine.county_by_fips("06001");
    println!("{}", alameda.display_name);
    for r in TimeFrame::Week.slice(&alameda.records) {
        println!("  {}  {:>6} cases", r.date, r.cases);
    }
    println!();

    // Example 2: Any borough code resolves to the whole city
    println!("--- Example 2: Brooklyn (36047) ---");
    let nyc = engine.county_by_fips("36047");
    println!("{} with {} records", nyc.display_name, nyc.records.len());
    println!();

    // Example 3: Fastest rising counties
    println!("--- Example 3: Trending counties (7 days) ---");
    for t in engine.trending_counties(7).iter().rev().take(5) {
        println!("  +{:>7}%  {}  ({} -> {})", t.percent_increase, t.name, t.baseline, t.peak);
    }
    println!();

    // Example 4: Trending states
    println!("--- Example 4: Trending states (7 days) ---");
    for t in engine.trending_states(7).iter().rev() {
        println!("  +{:>7}%  {}", t.percent_increase, t.name);
    }
    println!();

    // Example 5: Autocomplete
    println!("--- Example 5: Suggestions ---");
    for s in engine.county_suggestions_by_name("al") {
        println!("  county: {} [{}]", s.display_text, s.value);
    }
    for s in engine.county_suggestions_by_zip("10") {
        println!("  zip:    {} [{}]", s.display_text, s.value.fips);
    }
    for s in engine.state_suggestions("new") {
        println!("  state:  {} [{}]", s.display_text, s.value.fips);
    }

    Ok(())
}
