//! Base64 PNG tile decoding
//!
//! Vectra stores every tile as base64 text holding PNG bytes. Decoding is
//! pure: text in, in-memory image out.

use std::borrow::Cow;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{DynamicImage, ImageFormat};
use thiserror::Error;

use crate::error::TileError;

/// Prefix some exporters put in front of the payload
const DATA_URL_PREFIX: &str = "data:image/png;base64,";

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid PNG: {0}")]
    Image(#[from] image::ImageError),
}

impl DecodeError {
    /// Attach the record the payload came from
    pub fn for_record(self, uuid: &str) -> TileError {
        let uuid = uuid.to_string();
        match self {
            Self::Base64(source) => TileError::Base64 { uuid, source },
            Self::Image(source) => TileError::Image { uuid, source },
        }
    }
}

/// Decode a base64 PNG payload into an image
pub fn decode_tile(b64_data: &str) -> Result<DynamicImage, DecodeError> {
    let bytes = STANDARD.decode(normalize_payload(b64_data).as_bytes())?;
    let img = image::load_from_memory_with_format(&bytes, ImageFormat::Png)?;
    Ok(img)
}

/// Strip a data-URL prefix and any whitespace (wrapped lines, trailing newline)
fn normalize_payload(b64_data: &str) -> Cow<'_, str> {
    let trimmed = b64_data.trim();
    let trimmed = trimmed.strip_prefix(DATA_URL_PREFIX).unwrap_or(trimmed);

    if trimmed.bytes().any(|b| b.is_ascii_whitespace()) {
        Cow::Owned(trimmed.chars().filter(|c| !c.is_ascii_whitespace()).collect())
    } else {
        Cow::Borrowed(trimmed)
    }
}
