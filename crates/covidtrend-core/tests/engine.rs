// Integration tests against the bundled sample in `data/`.
use covidtrend_core::config::NYC_BOROUGH_CODES;
use covidtrend_core::prelude::*;
use std::path::PathBuf;

fn sample() -> Dataset {
    Dataset::read_dir(Dataset::default_data_dir()).expect("bundled dataset should load")
}

fn engine() -> TrendEngine {
    let dataset = sample();
    TrendEngine::new(dataset, EngineConfig::default()).expect("bundled tables are complete")
}

#[test]
fn loads_the_bundled_sample() {
    let stats = engine().stats();
    assert_eq!(stats.county_records, 100);
    assert_eq!(stats.state_records, 40);
    assert_eq!(stats.state_names, 4);
    assert_eq!(stats.zip_codes, 13);
}

#[test]
fn weekly_county_trends() {
    let trends = engine().trending_counties(7);
    let rows: Vec<(&str, u64, u64, String)> = trends
        .iter()
        .map(|t| (t.name.as_str(), t.baseline, t.peak, t.percent_increase.to_string()))
        .collect();

    assert_eq!(
        rows,
        vec![
            ("San Francisco, CA", 660, 780, "18.18".to_string()),
            ("King, WA", 2570, 3110, "21.01".to_string()),
            ("Alameda, CA", 575, 725, "26.09".to_string()),
            ("Westchester, NY", 10800, 14400, "33.33".to_string()),
            ("Albany, NY", 340, 520, "52.94".to_string()),
            ("Los Angeles, CA", 4850, 7550, "55.67".to_string()),
            ("Cook, IL", 7100, 11300, "59.15".to_string()),
        ]
    );
    assert_eq!(trends[0].href, "/county/06075");
}

#[test]
fn whole_series_sorts_numerically_past_one_hundred_percent() {
    let trends = engine().trending_counties(30);
    let pct: Vec<String> = trends.iter().map(|t| t.percent_increase.to_string()).collect();
    assert_eq!(
        pct,
        ["30.00", "35.22", "45.00", "60.00", "108.00", "115.71", "126.00"]
    );
}

#[test]
fn weekly_state_trends() {
    let trends = engine().trending_states(7);
    let names: Vec<&str> = trends.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Washington", "New York", "California", "Illinois"]);
    assert_eq!(trends[1].percent_increase.to_string(), "40.77");
    assert_eq!(trends[3].href, "/state/17");
}

#[test]
fn every_borough_resolves_to_new_york_city() {
    let e = engine();
    let first = e.county_by_fips(NYC_BOROUGH_CODES[0]);
    assert_eq!(first.display_name, "New York City, New York");
    assert_eq!(first.records.len(), 10);
    for code in NYC_BOROUGH_CODES {
        let view = e.county_by_fips(code);
        assert_eq!(view.display_name, first.display_name);
        assert_eq!(view.records, first.records);
    }
}

#[test]
fn week_time_frame_on_a_county() {
    let e = engine();
    let view = e.county_by_fips("06001");
    assert_eq!(view.display_name, "Alameda, California");
    let week = TimeFrame::Week.slice(&view.records);
    assert_eq!(week.len(), 7);
    assert_eq!(week[6].cases, 725);
}

#[test]
fn counties_of_new_york_on_the_latest_day() {
    let rows = engine().counties_by_state("36");
    let names: Vec<&str> = rows.iter().map(|r| r.county_name.as_str()).collect();
    assert_eq!(names, ["Albany", "Westchester"]);
}

#[test]
fn suggestions_are_capped_at_five() {
    let e = engine();
    assert_eq!(e.county_suggestions_by_zip("606").len(), 5);

    let by_name = e.county_suggestions_by_name("a");
    let labels: Vec<&str> = by_name.iter().map(|s| s.display_text.as_str()).collect();
    assert_eq!(
        labels,
        [
            "Adams, Illinois",
            "Adams, Washington",
            "Alameda, California",
            "Albany, New York",
            "Allegany, New York",
        ]
    );

    let states = e.state_suggestions("w");
    assert_eq!(states[0].value.name, "Washington");
}

#[test]
fn queries_are_idempotent() {
    let e = engine();
    assert_eq!(e.trending_counties(7), e.trending_counties(7));
    assert_eq!(e.county_by_fips("53033"), e.county_by_fips("53033"));
    assert_eq!(e.state_suggestions("n"), e.state_suggestions("n"));
}

#[test]
fn snapshot_round_trip() {
    let dataset = sample();
    let path: PathBuf =
        std::env::temp_dir().join(format!("covidtrend-snapshot-{}.bin", std::process::id()));
    dataset.save_snapshot(&path).unwrap();
    let restored = Dataset::load_snapshot(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(restored, dataset);
}

#[test]
fn missing_data_dir_is_not_found() {
    let err = Dataset::load_dir("/definitely/not/here").unwrap_err();
    assert!(matches!(err, TrendError::NotFound(_)));
}

/// Copy the bundled sources into a fresh scratch directory.
fn scratch_data_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("covidtrend-{tag}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    for entry in std::fs::read_dir(Dataset::default_data_dir()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap();
        if path.is_file() && name != "dataset.bin" && name != ".gitignore" {
            std::fs::copy(&path, dir.join(name)).unwrap();
        }
    }
    dir
}

#[test]
fn load_dir_caches_and_reuses_a_snapshot() {
    let dir = scratch_data_dir("cache");
    let first = Dataset::load_dir(&dir).unwrap();
    assert!(dir.join("dataset.bin").is_file());
    let second = Dataset::load_dir(&dir).unwrap();
    let _ = std::fs::remove_dir_all(&dir);
    assert_eq!(first, second);
    assert_eq!(first, sample());
}

#[test]
fn removing_a_source_invalidates_the_snapshot() {
    let dir = scratch_data_dir("zip-removed");
    assert_eq!(Dataset::load_dir(&dir).unwrap().zips.len(), 13);

    std::fs::remove_file(dir.join("zip-fips.csv")).unwrap();
    let reloaded = Dataset::load_dir(&dir).unwrap();
    let _ = std::fs::remove_dir_all(&dir);
    assert!(reloaded.zips.is_empty());
    assert_eq!(reloaded.counties.len(), 100);
}
