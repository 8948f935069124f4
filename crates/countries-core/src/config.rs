// crates/countries-core/src/config.rs

//! # Build Configuration
//!
//! Static tables that drive the pipeline: the continent map, the TLD
//! exclusions, the country rename table and the output locations.
//! `BuildConfig::default()` is the configuration the artifacts are built with.

use crate::common::OrderedSet;
use std::path::{Path, PathBuf};

// -----------------------------------------------------------------------------
// DEFAULT TABLES
// -----------------------------------------------------------------------------

/// Source continent labels (Japanese) and their slugs, in output order.
pub const CONTINENTS: &[(&str, &str)] = &[
    ("アジア", "asia"),
    ("ヨーロッパ", "europe"),
    ("アフリカ", "africa"),
    ("北アメリカ", "north-america"),
    ("南アメリカ", "south-america"),
    ("オセアニア", "oceania"),
    ("オセアニア島嶼部", "oceania"),
];

pub const EXCLUDED_TLDS: &[&str] = &[".gb", ".su"];

pub const RENAMES: &[(&str, &str)] = &[
    ("中華民国", "台湾"),
    ("朝鮮民主主義人民共和国", "北朝鮮"),
];

pub const DEFAULT_OUT_DIR: &str = "src/data";
pub const COUNTRIES_FILENAME: &str = "countries.json";
pub const AREAS_FILENAME: &str = "areas.json";

// -----------------------------------------------------------------------------
// CONTINENT MAP
// -----------------------------------------------------------------------------

/// Ordered mapping from source continent label to slug.
///
/// Several labels may share one slug (both Oceania labels map to `oceania`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinentMap {
    entries: Vec<(String, String)>,
}

impl ContinentMap {
    pub fn new<L, S>(entries: impl IntoIterator<Item = (L, S)>) -> Self
    where
        L: Into<String>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(label, slug)| (label.into(), slug.into()))
                .collect(),
        }
    }

    pub fn slug_for(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, slug)| slug.as_str())
    }

    /// Distinct slugs in map order. This is the content of `areas.json`.
    pub fn areas(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(_, slug)| slug.clone())
            .collect::<OrderedSet<_>>()
            .into_vec()
    }
}

impl Default for ContinentMap {
    fn default() -> Self {
        Self::new(CONTINENTS.iter().copied())
    }
}

// -----------------------------------------------------------------------------
// BUILD CONFIG
// -----------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub continents: ContinentMap,
    /// Dropped after the pattern filter. Opaque list, matched exactly.
    pub excluded_tlds: Vec<String>,
    /// `(from, to)` pairs applied to country names after aggregation.
    pub renames: Vec<(String, String)>,
    pub out_dir: PathBuf,
}

impl BuildConfig {
    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    pub fn countries_path(&self) -> PathBuf {
        self.out_dir.join(COUNTRIES_FILENAME)
    }

    pub fn areas_path(&self) -> PathBuf {
        self.out_dir.join(AREAS_FILENAME)
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            continents: ContinentMap::default(),
            excluded_tlds: EXCLUDED_TLDS.iter().map(|s| s.to_string()).collect(),
            renames: RENAMES
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}
