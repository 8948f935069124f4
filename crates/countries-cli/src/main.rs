//! countries-build — turns a country dump into the app's static data files
//!
//! Reads a JSON array of Wikidata rows (`countryLabel`, `capitalLabel`,
//! `continentLabel`, `iso2`, `tldLabel`), keeps the rows carrying a
//! two-letter country TLD, folds them into one record per country and
//! writes two files:
//!
//! - `<out-dir>/countries.json` — one object per country
//! - `<out-dir>/areas.json` — the continent slugs
//!
//! Usage examples
//! --------------
//!
//! - Build into `src/data/` (the default)
//!   $ countries-build query.json
//!
//! - Build somewhere else, warnings only
//!   $ countries-build --out-dir public/data -q query.json
//!
//! Duplicate country names after renaming are logged as a warning; the
//! files are still written and the exit status is 0.
mod args;
mod logging;

use crate::args::CliArgs;
use anyhow::Context;
use clap::Parser;
use countries_core::{build_dataset, BuildConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logging::init_logging(args.quiet);

    let config = BuildConfig::default().with_out_dir(args.out_dir.clone());

    let report = build_dataset(&args.input, &config)
        .with_context(|| format!("failed to build dataset from {}", args.input.display()))?;

    info!(
        rows = report.raw_records,
        kept = report.kept_records,
        countries = report.countries,
        areas = report.areas,
        "dataset built"
    );
    info!("wrote {}", config.countries_path().display());
    info!("wrote {}", config.areas_path().display());

    Ok(())
}
