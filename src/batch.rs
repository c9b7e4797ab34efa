//! Batch driver: dump every `*.json` export found directly inside a folder

use std::path::{Path, PathBuf};

use tracing::info;
use walkdir::WalkDir;

use crate::config::{DumpOptions, EXPORT_EXTENSION};
use crate::error::{Result, TileError};
use crate::tile::dump::{dump_all_images, DumpSummary};

/// Result of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub exports: Vec<DumpSummary>,
}

impl BatchSummary {
    pub fn tiles_written(&self) -> usize {
        self.exports.iter().map(|d| d.tiles_written).sum()
    }
}

/// Dump either a single export or every export in a directory
pub fn run(input: &Path, opts: DumpOptions) -> Result<BatchSummary> {
    if input.is_dir() {
        return dump_directory(input, opts);
    }

    if !is_export(input) {
        return Err(TileError::NotJson {
            path: input.to_path_buf(),
        });
    }

    Ok(BatchSummary {
        exports: vec![dump_export(input, opts)?],
    })
}

fn dump_export(json_path: &Path, opts: DumpOptions) -> Result<DumpSummary> {
    let summary = dump_all_images(json_path, opts)?;
    info!(
        "📸 Wrote {} tiles to {}",
        summary.tiles_written,
        summary.output_dir.display()
    );
    Ok(summary)
}

/// Exports directly inside `dir` (non-recursive), sorted by file name
pub fn find_exports(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut exports = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_file() && is_export(entry.path()) {
            exports.push(entry.into_path());
        }
    }

    Ok(exports)
}

/// Dump every export in `dir`, one after another
///
/// Stops at the first export that fails; exports already dumped keep their
/// tiles.
pub fn dump_directory(dir: &Path, opts: DumpOptions) -> Result<BatchSummary> {
    info!("🔍 Scanning folder: {}", dir.display());

    let mut summary = BatchSummary::default();
    for export in find_exports(dir)? {
        summary.exports.push(dump_export(&export, opts)?);
    }

    info!(
        "✅ Batch complete: {} tiles from {} exports",
        summary.tiles_written(),
        summary.exports.len()
    );
    Ok(summary)
}

/// Matches the `*.json` glob: exact, case-sensitive extension
fn is_export(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == EXPORT_EXTENSION)
}
