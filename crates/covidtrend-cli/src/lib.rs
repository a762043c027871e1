//! covidtrend-cli
//! ==============
//!
//! Command-line interface for the `covidtrend-core` trend and lookup engine.
//!
//! This crate primarily provides a binary (`covidtrend`). The library target
//! only exists so the crate has a rendered documentation page.
//!
//! Basic usage
//! -----------
//!
//! ```text
//! covidtrend --help
//! covidtrend stats
//! covidtrend county 36061 --time-frame week
//! covidtrend trending --days 7 --top 10
//! covidtrend suggest county ala
//! ```
//!
//! For programmatic access use [`covidtrend-core`] directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
