// crates/countries-core/src/loader/common_io.rs
use crate::error::{DatasetError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens the dump, buffered. With `compact`, a `.gz` path is gunzipped on the fly.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        DatasetError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    if is_gzip_path(path) {
        return Ok(Box::new(GzDecoder::new(reader)));
    }

    Ok(Box::new(reader))
}

#[cfg(feature = "compact")]
fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

#[cfg(all(test, feature = "compact"))]
mod tests {
    use super::*;

    #[test]
    fn detects_gzip_by_extension() {
        assert!(is_gzip_path(Path::new("dump.json.gz")));
        assert!(is_gzip_path(Path::new("dump.JSON.GZ")));
        assert!(!is_gzip_path(Path::new("dump.json")));
        assert!(!is_gzip_path(Path::new("gz")));
    }
}
