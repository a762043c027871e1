// crates/covidtrend-core/src/loader/snapshot.rs
use crate::error::Result;
use crate::model::Dataset;
use bincode::Options;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Upper bound for a snapshot; guards against garbage or truncated files.
const SNAPSHOT_LIMIT: u64 = 256 * 1024 * 1024;

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(SNAPSHOT_LIMIT)
        .allow_trailing_bytes()
}

impl Dataset {
    /// Write the dataset as a bincode snapshot.
    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        options().serialize_into(&mut writer, self)?;
        writer.flush()?;
        log::debug!("snapshot: wrote {}", path.display());
        Ok(())
    }

    /// Read a snapshot written by [`Dataset::save_snapshot`].
    pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Self> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        Ok(options().deserialize_from(reader)?)
    }
}

/// File names of the inputs, in the order the loader reads them.
fn source_names(sources: &[&Path]) -> Vec<String> {
    sources
        .iter()
        .filter_map(|p| p.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect()
}

/// Write the directory cache: the source file names, then the dataset.
#[cfg_attr(not(feature = "json"), allow(dead_code))]
pub(super) fn write_cache(path: &Path, sources: &[&Path], ds: &Dataset) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    options().serialize_into(&mut writer, &source_names(sources))?;
    options().serialize_into(&mut writer, ds)?;
    writer.flush()?;
    log::debug!("snapshot: wrote {}", path.display());
    Ok(())
}

/// Read the directory cache when it is fresh and was built from exactly
/// `sources`; `Ok(None)` means it must be rebuilt.
#[cfg_attr(not(feature = "json"), allow(dead_code))]
pub(super) fn read_cache(path: &Path, sources: &[&Path]) -> Result<Option<Dataset>> {
    if !is_fresh(path, sources) {
        return Ok(None);
    }
    let mut reader = BufReader::new(File::open(path)?);
    let built_from: Vec<String> = options().deserialize_from(&mut reader)?;
    if built_from != source_names(sources) {
        log::info!("snapshot: source files changed since {}", path.display());
        return Ok(None);
    }
    Ok(Some(options().deserialize_from(&mut reader)?))
}

/// A snapshot is fresh when it exists and is no older than any source.
#[cfg_attr(not(feature = "json"), allow(dead_code))]
fn is_fresh(snapshot: &Path, sources: &[&Path]) -> bool {
    let Ok(snap_time) = fs::metadata(snapshot).and_then(|m| m.modified()) else {
        return false;
    };
    sources.iter().all(|src| {
        fs::metadata(src)
            .and_then(|m| m.modified())
            .is_ok_and(|t| t <= snap_time)
    })
}
