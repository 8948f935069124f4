// crates/countries-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (file access, optional gzip) and hands the
//! stream to `serde_json`.

use crate::error::Result;
use crate::raw::RawRecords;
use std::io::Read;
use std::path::Path;
use tracing::debug;

mod common_io;

/// Loads the source dump: a JSON array of flat row objects.
pub fn load_records(path: impl AsRef<Path>) -> Result<RawRecords> {
    let path = path.as_ref();
    let reader = common_io::open_stream(path)?;
    let records = load_from_reader(reader)?;
    debug!(path = %path.display(), rows = records.len(), "loaded source dump");
    Ok(records)
}

pub fn load_from_reader<R: Read>(reader: R) -> Result<RawRecords> {
    Ok(serde_json::from_reader(reader)?)
}
