//! Vectra export loader
//!
//! Reads one export file and returns its records in file order, optionally
//! keeping only the lesions flagged for display.

use std::fs;
use std::path::Path;
use tracing::debug;

use super::data::{TileRecord, VectraExport};
use crate::error::{Result, TileError};

/// Load the records under `root.children` of a JSON export
///
/// # Arguments
/// * `path` - Path to the export
/// * `lesions_only` - Keep only records with `status == 0`
///
/// # Returns
/// * `Ok(records)` - Records in their original relative order
/// * `Err(TileError::Io)` - The file could not be read
/// * `Err(TileError::Parse)` - Not JSON, no `root.children`, or a record with a
///   missing or mistyped `status`/`uuid`
pub fn load_export(path: &Path, lesions_only: bool) -> Result<Vec<TileRecord>> {
    let bytes = fs::read(path).map_err(|e| TileError::io(path, e))?;
    let export: VectraExport =
        serde_json::from_slice(&bytes).map_err(|source| TileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut records = export.root.children;
    if lesions_only {
        let total = records.len();
        records.retain(TileRecord::is_selected);
        debug!(
            "Kept {} of {} records with status 0 in {}",
            records.len(),
            total,
            path.display()
        );
    }

    Ok(records)
}
