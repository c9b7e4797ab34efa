//! Dump the selected tiles of one export to `<stem>_tiles/<uuid>.png`

use std::fs;
use std::path::{Component, Path, PathBuf};

use image::ImageFormat;
use tracing::{debug, info};

use super::decoder::decode_tile;
use crate::config::{DumpOptions, TILES_DIR_SUFFIX, TILE_EXTENSION};
use crate::document::data::{ImageField, TileRecord};
use crate::document::loader::load_export;
use crate::error::{Result, TileError};

/// What one export produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpSummary {
    pub output_dir: PathBuf,
    pub tiles_written: usize,
}

/// Output directory for an export: a `_tiles` sibling named after its stem
pub fn tiles_dir_for(json_path: &Path) -> PathBuf {
    let stem = json_path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();
    let dir_name = format!("{}{}", stem, TILES_DIR_SUFFIX);

    match json_path.parent() {
        Some(parent) => parent.join(dir_name),
        None => PathBuf::from(dir_name),
    }
}

/// Decode and write every `status == 0` tile of an export
///
/// The output directory is created if absent and reused otherwise. Existing
/// tiles with the same uuid are overwritten. The first failing record aborts
/// the dump; tiles written before it stay on disk.
pub fn dump_all_images(json_path: &Path, opts: DumpOptions) -> Result<DumpSummary> {
    let records = load_export(json_path, true)?;
    let field = ImageField::from_color_corrected(opts.color_corrected);

    let output_dir = tiles_dir_for(json_path);
    fs::create_dir_all(&output_dir).map_err(|e| TileError::io(&output_dir, e))?;

    info!(
        "📂 Dumping {} {} tiles from {} into {}",
        records.len(),
        field.name(),
        json_path.display(),
        output_dir.display()
    );

    for record in &records {
        write_tile(record, field, &output_dir)?;
    }

    Ok(DumpSummary {
        output_dir,
        tiles_written: records.len(),
    })
}

fn write_tile(record: &TileRecord, field: ImageField, output_dir: &Path) -> Result<PathBuf> {
    let file_name = tile_file_name(&record.uuid)?;
    let img = decode_tile(record.payload(field)?).map_err(|e| e.for_record(&record.uuid))?;

    let tile_path = output_dir.join(file_name);
    img.save_with_format(&tile_path, ImageFormat::Png)
        .map_err(|source| match source {
            image::ImageError::IoError(e) => TileError::io(&tile_path, e),
            source => TileError::Image {
                uuid: record.uuid.clone(),
                source,
            },
        })?;

    debug!("📸 Wrote {}", tile_path.display());
    Ok(tile_path)
}

/// `<uuid>.png`, refusing uuids that would land outside the output directory
fn tile_file_name(uuid: &str) -> Result<String> {
    let mut components = Path::new(uuid).components();
    let is_plain_name = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(name)), None) if name == uuid
    );

    if !is_plain_name {
        return Err(TileError::InvalidUuid {
            uuid: uuid.to_string(),
        });
    }

    Ok(format!("{}.{}", uuid, TILE_EXTENSION))
}
