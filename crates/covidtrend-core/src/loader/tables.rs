// crates/covidtrend-core/src/loader/tables.rs
#![cfg(feature = "json")]

use crate::error::Result;
use crate::model::StateName;
use std::collections::BTreeMap;
use std::io::Read;

/// `{ "36061": "New York", ... }`
pub fn read_county_names<R: Read>(reader: R) -> Result<BTreeMap<String, String>> {
    Ok(serde_json::from_reader(reader)?)
}

/// `{ "36": { "full": "New York", "abrv": "NY" }, ... }`
pub fn read_state_names<R: Read>(reader: R) -> Result<BTreeMap<String, StateName>> {
    Ok(serde_json::from_reader(reader)?)
}
