//! covidtrend: command-line interface for covidtrend-core
//!
//! Usage examples
//! --------------
//!
//! - Dataset summary
//!   $ covidtrend stats
//!
//! - A county's last 7 days (any NYC borough code shows the whole city)
//!   $ covidtrend county 36047 --time-frame week
//!
//! - Latest counts per county of a state
//!   $ covidtrend counties 06
//!
//! - Fastest rising counties/states over the last week
//!   $ covidtrend trending --top 10
//!   $ covidtrend trending --states --days 30
//!
//! - Autocomplete
//!   $ covidtrend suggest zip 606
//!
//! Data source
//! -----------
//!
//! By default the CLI loads the sample bundled with `covidtrend-core` and
//! caches a binary snapshot next to it. Point `--data-dir` at a directory
//! with the full NYT files (optionally `.gz`) for real data. Set `RUST_LOG`
//! to see loader and ranking diagnostics.
mod args;

use crate::args::{CliArgs, Commands, SuggestKind};
use clap::Parser;
use covidtrend_core::{Dataset, EngineConfig, RegionView, TimeFrame, TrendEngine};
use serde_json::to_string_pretty;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    let data_dir = args
        .data_dir
        .map(Into::into)
        .unwrap_or_else(Dataset::default_data_dir);
    log::info!("loading dataset from {}", data_dir.display());
    let dataset = Dataset::load_dir(&data_dir)?;

    let config = match &args.config {
        Some(path) => EngineConfig::from_json_path(path)?,
        None => EngineConfig::default(),
    };
    let engine = TrendEngine::new(dataset, config)?;

    match args.command {
        Commands::Stats => {
            let stats = engine.stats();
            if args.json {
                println!("{}", to_string_pretty(&stats)?);
            } else {
                println!("Dataset statistics:");
                println!("  County records: {}", stats.county_records);
                println!("  State records: {}", stats.state_records);
                println!("  Named counties: {}", stats.county_names);
                println!("  Named states: {}", stats.state_names);
                println!("  ZIP codes: {}", stats.zip_codes);
                if let Some(latest) = engine.dataset().latest_date() {
                    println!("  Latest date: {latest}");
                }
            }
        }

        Commands::County { fips, time_frame } => {
            let view = engine.county_by_fips(&fips);
            print_region(&view, time_frame.into(), args.json)?;
        }

        Commands::State { fips, time_frame } => {
            let view = engine.state_by_fips(&fips);
            print_region(&view, time_frame.into(), args.json)?;
        }

        Commands::Counties { state_fips } => {
            let rows = engine.counties_by_state(&state_fips);
            if args.json {
                println!("{}", to_string_pretty(&rows)?);
            } else if rows.is_empty() {
                println!("No counties found for state {state_fips}");
            } else {
                for r in rows {
                    println!(
                        "{} ({}): {} cases, {} deaths",
                        r.county_name, r.fips, r.cases, r.deaths
                    );
                }
            }
        }

        Commands::Trending { states, days, top } => {
            let mut trends = if states {
                engine.trending_states(days)
            } else {
                engine.trending_counties(days)
            };
            // Fastest risers sit at the end of the ascending list.
            if let Some(n) = top {
                let skip = trends.len().saturating_sub(n);
                trends = trends.split_off(skip);
            }
            if args.json {
                println!("{}", to_string_pretty(&trends)?);
            } else {
                for t in trends.iter().rev() {
                    println!(
                        "{:>10}%  {} ({} → {})",
                        t.percent_increase, t.name, t.baseline, t.peak
                    );
                }
            }
        }

        Commands::Suggest { kind, term } => {
            let lines: Vec<(String, serde_json::Value)> = match kind {
                SuggestKind::County => engine
                    .county_suggestions_by_name(&term)
                    .into_iter()
                    .map(|s| Ok((s.display_text, serde_json::to_value(s.value)?)))
                    .collect::<serde_json::Result<_>>()?,
                SuggestKind::Zip => engine
                    .county_suggestions_by_zip(&term)
                    .into_iter()
                    .map(|s| Ok((s.display_text, serde_json::to_value(s.value)?)))
                    .collect::<serde_json::Result<_>>()?,
                SuggestKind::State => engine
                    .state_suggestions(&term)
                    .into_iter()
                    .map(|s| Ok((s.display_text, serde_json::to_value(s.value)?)))
                    .collect::<serde_json::Result<_>>()?,
            };
            if args.json {
                let json: Vec<_> = lines
                    .into_iter()
                    .map(|(display_text, value)| {
                        serde_json::json!({ "display_text": display_text, "value": value })
                    })
                    .collect();
                println!("{}", to_string_pretty(&json)?);
            } else if lines.is_empty() {
                println!("No suggestions for: {term}");
            } else {
                for (text, _) in lines {
                    println!("{text}");
                }
            }
        }
    }

    Ok(())
}

fn print_region(view: &RegionView<'_>, frame: TimeFrame, json: bool) -> anyhow::Result<()> {
    let records = frame.slice(&view.records);
    if json {
        let out = serde_json::json!({
            "id": view.id,
            "display_name": view.display_name,
            "time_frame": frame,
            "records": records,
        });
        println!("{}", to_string_pretty(&out)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No data for {}", view.id);
        return Ok(());
    }
    println!("{} ({})", view.display_name, frame);
    for r in records {
        println!("  {}  cases {:>9}  deaths {:>7}", r.date, r.cases, r.deaths);
    }
    Ok(())
}
