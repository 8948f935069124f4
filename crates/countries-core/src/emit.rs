// crates/countries-core/src/emit.rs

//! # Artifact Writer
//!
//! Serializes the pipeline output to disk. Files are truncated and rewritten
//! on every run; `serde_json` writes non-ASCII text as-is.

use crate::config::BuildConfig;
use crate::error::Result;
use crate::model::CountryRecord;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Writes `countries.json` and `areas.json` under the configured output directory.
pub fn emit_artifacts(
    countries: &[CountryRecord],
    areas: &[String],
    config: &BuildConfig,
) -> Result<()> {
    fs::create_dir_all(config.out_dir()).map_err(|e| with_path(e, config.out_dir()))?;

    write_json(&config.countries_path(), countries)?;
    write_json(&config.areas_path(), areas)?;
    Ok(())
}

/// Writes ANY serializable value as compact JSON, overwriting `path`.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).map_err(|e| with_path(e, path))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer(&mut writer, value)?;
    writer.flush().map_err(|e| with_path(e, path))?;

    debug!(path = %path.display(), "wrote artifact");
    Ok(())
}

fn with_path(e: io::Error, path: &Path) -> io::Error {
    io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
}
