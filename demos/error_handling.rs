//! Error handling example for covidtrend-rs
//!
//! This example demonstrates how failures surface and which lookups are
//! deliberately infallible.

use covidtrend_rs::prelude::*;
use covidtrend_rs::loader::{read_daily_records, Granularity};

fn main() -> Result<()> {
    println!("=== covidtrend-rs Error Handling Example ===\n");

    // Example 1: Loading from a directory that doesn't exist
    println!("--- Example 1: Missing data directory ---");
    match Dataset::load_dir("/no/such/dir") {
        Ok(_) => println!("✓ unexpectedly loaded"),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 2: Malformed rows fail fast with their row number
    println!("--- Example 2: Malformed CSV row ---");
    let csv = "date,state,fips,cases,deaths\n2020-04-01,Ohio,39,12,\n";
    match read_daily_records(csv.as_bytes(), Granularity::State) {
        Ok(rows) => println!("✓ parsed {} rows", rows.len()),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 3: Incomplete tables are rejected before the first query
    println!("--- Example 3: County without a parent state ---");
    let mut dataset = Dataset::load()?;
    dataset.county_names.insert("48201".into(), "Harris".into());
    match TrendEngine::new(dataset, EngineConfig::default()) {
        Ok(_) => println!("✓ engine built"),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 4: Unknown ids are not errors
    println!("--- Example 4: Unknown lookups fall back ---");
    let engine = TrendEngine::new(Dataset::load()?, EngineConfig::default())?;
    let view = engine.county_by_fips("99999");
    println!("  county 99999 -> '{}' ({} records)", view.display_name, view.records.len());
    println!("  state 72 -> {:?}", engine.state_name("72"));
    println!("  suggestions for 'zz' -> {}", engine.state_suggestions("zz").len());

    Ok(())
}
