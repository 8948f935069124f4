// crates/countries-core/src/pipeline/mod.rs

//! # Build Pipeline
//!
//! `load -> filter -> aggregate -> normalize -> duplicate check -> emit`,
//! one sequential pass over owned collections.

use crate::common::BuildReport;
use crate::config::BuildConfig;
use crate::emit::emit_artifacts;
use crate::error::Result;
use crate::loader::load_records;
use std::path::Path;
use tracing::debug;

pub mod aggregate;
pub mod duplicates;
pub mod filter;
pub mod normalize;

pub use aggregate::aggregate;
pub use duplicates::{find_duplicate_names, report_duplicates};
pub use filter::{filter_records, is_country_tld};
pub use normalize::{normalize, rename};

/// Builds `countries.json` and `areas.json` from the dump at `input`.
///
/// Fails only on I/O or JSON errors. Duplicate names are logged and listed
/// in the returned report; both artifacts are written regardless.
pub fn build_dataset(input: impl AsRef<Path>, config: &BuildConfig) -> Result<BuildReport> {
    let records = load_records(input)?;
    let raw_records = records.len();

    let kept = filter_records(records, &config.excluded_tlds);
    let kept_records = kept.len();
    debug!(rows = kept_records, "filtered rows");

    let mut countries = aggregate(kept, &config.continents);
    debug!(countries = countries.len(), "aggregated countries");
    normalize(&mut countries, &config.renames);

    let duplicates = find_duplicate_names(&countries);
    report_duplicates(&duplicates);

    let areas = config.continents.areas();
    emit_artifacts(&countries, &areas, config)?;

    Ok(BuildReport {
        raw_records,
        kept_records,
        countries: countries.len(),
        areas: areas.len(),
        duplicates,
    })
}
