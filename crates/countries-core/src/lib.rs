// crates/countries-core/src/lib.rs

pub mod common;
pub mod config;
pub mod emit;
pub mod error;
pub mod loader; // Reads the source dump
pub mod model;
pub mod pipeline; // Filter -> aggregate -> rename -> duplicate check
// Shared Raw Input (mirrors the external dump)
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::common::{BuildReport, OrderedSet};
pub use crate::config::{BuildConfig, ContinentMap};
pub use crate::error::{DatasetError, Result};
pub use crate::model::CountryRecord;
pub use crate::pipeline::build_dataset;
pub use crate::raw::RawRecord;
