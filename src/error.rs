use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a tile extraction run.
///
/// None of these are recovered from: the first one aborts the document being
/// dumped and, through the batch driver, the rest of the batch.
#[derive(Error, Debug)]
pub enum TileError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse Vectra export {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Record {uuid} has no `{field}` image field")]
    MissingImage { uuid: String, field: &'static str },

    #[error("Record {uuid} has a malformed base64 payload: {source}")]
    Base64 {
        uuid: String,
        #[source]
        source: base64::DecodeError,
    },

    #[error("Record {uuid} does not hold a valid PNG: {source}")]
    Image {
        uuid: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Record uuid {uuid:?} is not usable as a file name")]
    InvalidUuid { uuid: String },

    #[error("Not a JSON export: {}", path.display())]
    NotJson { path: PathBuf },

    #[error("Directory scan failed: {0}")]
    Walk(#[from] walkdir::Error),
}

impl TileError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TileError>;
