//! Best-effort JSON record loading.
//!
//! The loader never fails: a missing file, unreadable file, or malformed
//! document is reported as a warning and yields an empty record list.
//! Downstream stages are contracted to treat an empty input sequence as a
//! valid (if degenerate) case, so do not tighten this into a hard error
//! without changing those stages too.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Load a JSON array of records from `path`.
///
/// Returns an empty vec on any I/O or parse failure.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(error) => {
            warn!(path = %path.display(), %error, "failed to read input file");
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<T>>(&contents) {
        Ok(records) => {
            debug!(path = %path.display(), count = records.len(), "loaded records");
            records
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "failed to parse input file");
            Vec::new()
        }
    }
}
