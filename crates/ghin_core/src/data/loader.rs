//! GHIN document loader.
//!
//! Reads the JSON file the collector left on disk and turns it into a
//! [`GhinRecord`]. Only whole-document problems are errors here: a missing
//! file, invalid JSON, or a top level that is not an object. Field-level gaps
//! are absorbed by the record's lenient deserializers.

use crate::error::LoadError;
use crate::models::lenient::value_kind;
use crate::models::GhinRecord;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Load a GHIN record from a JSON file.
///
/// # Errors
///
/// * [`LoadError::NotFound`] - nothing at `path`
/// * [`LoadError::Io`] - the file exists but cannot be read
/// * [`LoadError::Malformed`] - the file is not valid JSON
/// * [`LoadError::NotAnObject`] - valid JSON, but not a mapping at the top
pub fn load_record(path: &Path) -> Result<GhinRecord, LoadError> {
    let shown = path.display().to_string();

    let json_str = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound {
            path: shown.clone(),
        },
        _ => LoadError::Io {
            path: shown.clone(),
            source,
        },
    })?;
    debug!(path = %shown, bytes = json_str.len(), "read GHIN data file");

    let record = parse_document(&json_str, &shown)?;
    info!(
        path = %shown,
        revisions = record.handicap_history.len(),
        rounds = record.scores.len(),
        "loaded GHIN record"
    );
    Ok(record)
}

/// Parse a GHIN record from JSON text.
pub fn parse_record(json_str: &str) -> Result<GhinRecord, LoadError> {
    parse_document(json_str, "<memory>")
}

fn parse_document(json_str: &str, origin: &str) -> Result<GhinRecord, LoadError> {
    let malformed = |source| LoadError::Malformed {
        path: origin.to_string(),
        source,
    };

    let value: Value = serde_json::from_str(json_str).map_err(malformed)?;
    if !value.is_object() {
        return Err(LoadError::NotAnObject {
            path: origin.to_string(),
            found: value_kind(&value),
        });
    }

    serde_json::from_value(value).map_err(malformed)
}
