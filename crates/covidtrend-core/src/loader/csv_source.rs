// crates/covidtrend-core/src/loader/csv_source.rs
use crate::error::{Result, TrendError};
use crate::model::{DailyRecord, ZipRecord};
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;

/// Date format of the `date` column: "YYYY-MM-DD".
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which NYT file a reader holds; decides where the region label comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// `date,county,state,fips,cases,deaths`
    County,
    /// `date,state,fips,cases,deaths`
    State,
}

/// Raw row as it comes from either NYT file. Every field is optional here so
/// that a missing value surfaces as a [`TrendError::MalformedRecord`] with
/// its row number instead of a bare deserialization error.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RecordRaw {
    date: Option<String>,
    county: Option<String>,
    state: Option<String>,
    fips: Option<String>,
    cases: Option<String>,
    deaths: Option<String>,
}

impl RecordRaw {
    fn into_record(self, row: usize, granularity: Granularity) -> Result<DailyRecord> {
        let malformed = |reason: String| TrendError::MalformedRecord { row, reason };

        let date_text = required(self.date, "date").map_err(malformed)?;
        let date = NaiveDate::parse_from_str(&date_text, DATE_FORMAT)
            .map_err(|e| malformed(format!("invalid date '{date_text}': {e}")))?;

        let label = match granularity {
            Granularity::County => self.county,
            Granularity::State => self.state,
        };
        let region_label = required(label, "region label").map_err(malformed)?;

        Ok(DailyRecord {
            date,
            region_id: self.fips.map(|f| f.trim().to_string()).unwrap_or_default(),
            region_label,
            cases: count(self.cases, "cases").map_err(malformed)?,
            deaths: count(self.deaths, "deaths").map_err(malformed)?,
        })
    }
}

fn required(value: Option<String>, field: &str) -> std::result::Result<String, String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(format!("missing {field}")),
    }
}

fn count(value: Option<String>, field: &str) -> std::result::Result<u64, String> {
    let text = required(value, field)?;
    text.parse::<u64>()
        .map_err(|_| format!("{field} must be a non-negative integer, got '{text}'"))
}

/// Parse an NYT-style CSV (with header row) into daily records.
///
/// Fails on the first malformed row. An empty `fips` is accepted: the feed
/// leaves it blank for merged or unknown areas.
pub fn read_daily_records<R: Read>(
    reader: R,
    granularity: Granularity,
) -> Result<Vec<DailyRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut out = Vec::new();
    for (i, result) in rdr.deserialize::<RecordRaw>().enumerate() {
        let raw = result?;
        out.push(raw.into_record(i + 1, granularity)?);
    }
    log::debug!("csv: parsed {} {:?} records", out.len(), granularity);
    Ok(out)
}

/// Parse a `zip,fips,city,state,county` CSV (with header row).
pub fn read_zip_records<R: Read>(reader: R) -> Result<Vec<ZipRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut out = Vec::new();
    for result in rdr.deserialize::<ZipRecord>() {
        out.push(result?);
    }
    Ok(out)
}
