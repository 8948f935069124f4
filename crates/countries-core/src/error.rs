// crates/countries-core/src/error.rs
use thiserror::Error;

/// Failures that abort a dataset build.
///
/// Data-quality findings (duplicate names) are not errors; they are reported
/// through [`crate::BuildReport::duplicates`].
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DatasetError>;
