// crates/covidtrend-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (files, optional gzip) and delegates to the
//! format parsers: NYT-style CSV for the series, JSON for the name tables,
//! bincode for the snapshot cache.

use crate::error::{Result, TrendError};
use crate::model::Dataset;
use once_cell::sync::OnceCell;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

mod csv_source;
mod snapshot;
#[cfg(feature = "json")]
mod tables;

pub use csv_source::{read_daily_records, read_zip_records, Granularity};
#[cfg(feature = "json")]
pub use tables::{read_county_names, read_state_names};

#[cfg(feature = "json")]
static DATASET_CACHE: OnceCell<Dataset> = OnceCell::new();

pub const COUNTIES_FILE: &str = "us-counties.csv";
pub const STATES_FILE: &str = "us-states.csv";
pub const COUNTY_NAMES_FILE: &str = "county-names.json";
pub const STATE_NAMES_FILE: &str = "state-names.json";
pub const ZIPS_FILE: &str = "zip-fips.csv";
pub const SNAPSHOT_FILE: &str = "dataset.bin";

impl Dataset {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    /// Load the bundled dataset once per process.
    #[cfg(feature = "json")]
    pub fn load() -> Result<Self> {
        DATASET_CACHE
            .get_or_try_init(|| Self::load_dir(Self::default_data_dir()))
            .cloned()
    }

    /// **Smart Load:** use `dataset.bin` when it is newer than every source
    /// and was built from the same set of files, otherwise parse the sources
    /// and refresh the snapshot (best effort).
    #[cfg(feature = "json")]
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let snapshot_path = dir.join(SNAPSHOT_FILE);
        let sources = SourceFiles::locate(dir)?;
        let inputs = sources.all();

        // 1. Check cache
        match snapshot::read_cache(&snapshot_path, &inputs) {
            Ok(Some(ds)) => {
                log::info!("loader: using snapshot {}", snapshot_path.display());
                return Ok(ds);
            }
            Ok(None) => {}
            Err(e) => log::warn!("loader: ignoring unreadable snapshot: {e}"),
        }

        // 2. Build from sources
        let ds = Self::load_sources(&sources)?;

        // 3. Cache
        if let Err(e) = snapshot::write_cache(&snapshot_path, &inputs, &ds) {
            log::warn!("loader: could not write {}: {e}", snapshot_path.display());
        }
        Ok(ds)
    }

    /// Parse the sources in `dir` without reading or writing a snapshot.
    #[cfg(feature = "json")]
    pub fn read_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Self::load_sources(&SourceFiles::locate(dir.as_ref())?)
    }

    #[cfg(feature = "json")]
    fn load_sources(sources: &SourceFiles) -> Result<Self> {
        let counties = read_daily_records(open_stream(&sources.counties)?, Granularity::County)?;
        let states = read_daily_records(open_stream(&sources.states)?, Granularity::State)?;
        let county_names = read_county_names(open_stream(&sources.county_names)?)?;
        let state_names = read_state_names(open_stream(&sources.state_names)?)?;
        let zips = match &sources.zips {
            Some(path) => read_zip_records(open_stream(path)?)?,
            None => Vec::new(),
        };

        let ds = Dataset {
            counties,
            states,
            county_names,
            state_names,
            zips,
        };
        let stats = ds.stats();
        log::info!(
            "loader: {} county rows, {} state rows, {} county names, {} state names, {} zip codes",
            stats.county_records,
            stats.state_records,
            stats.county_names,
            stats.state_names,
            stats.zip_codes
        );
        Ok(ds)
    }
}

/// Paths of the source files inside a data directory.
#[derive(Debug, Clone)]
pub struct SourceFiles {
    pub counties: PathBuf,
    pub states: PathBuf,
    pub county_names: PathBuf,
    pub state_names: PathBuf,
    pub zips: Option<PathBuf>,
}

impl SourceFiles {
    /// Find each source as `<name>.gz` or `<name>`. Everything but the ZIP
    /// table is required.
    pub fn locate(dir: &Path) -> Result<Self> {
        let required = |name: &str| {
            find_source(dir, name).ok_or_else(|| {
                TrendError::NotFound(format!("{name} not found in {}", dir.display()))
            })
        };
        Ok(SourceFiles {
            counties: required(COUNTIES_FILE)?,
            states: required(STATES_FILE)?,
            county_names: required(COUNTY_NAMES_FILE)?,
            state_names: required(STATE_NAMES_FILE)?,
            zips: find_source(dir, ZIPS_FILE),
        })
    }

    pub fn all(&self) -> Vec<&Path> {
        let mut out = vec![
            self.counties.as_path(),
            self.states.as_path(),
            self.county_names.as_path(),
            self.state_names.as_path(),
        ];
        if let Some(z) = &self.zips {
            out.push(z.as_path());
        }
        out
    }
}

fn find_source(dir: &Path, name: &str) -> Option<PathBuf> {
    let gz = dir.join(format!("{name}.gz"));
    if cfg!(feature = "compact") && gz.is_file() {
        return Some(gz);
    }
    let plain = dir.join(name);
    plain.is_file().then_some(plain)
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Opens a file, buffers it, and wraps `*.gz` files in a gzip decoder.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        TrendError::NotFound(format!("Data file not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(TrendError::Config(format!(
                "{} is gzip-compressed but the 'compact' feature is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}
