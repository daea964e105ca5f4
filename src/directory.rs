// src/directory.rs
//
// Loads the record collection. One read at startup; everything downstream
// works off the in-memory set. A missing or malformed file is fatal at the
// caller — there is no partial-load path.

use std::error::Error;
use std::fs;
use std::path::Path;

use crate::model::PersonRecord;

/// Read and parse the full directory file.
///
/// Errors bubble up unchanged: file-not-found, not-JSON, or any record
/// missing its `households` list all land here and abort startup.
pub fn load(path: &Path) -> Result<Vec<PersonRecord>, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("{}: {}", path.display(), e))?;
    let records: Vec<PersonRecord> = serde_json::from_str(&text)
        .map_err(|e| format!("{}: {}", path.display(), e))?;

    logf!("Directory: loaded {} record(s) from {}", records.len(), path.display());
    Ok(records)
}
