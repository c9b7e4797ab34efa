//! Record model of a Vectra JSON export
//!
//! An export nests its tiles under `root.children`. Only the fields the
//! extractor reads are modelled; everything else in a record is ignored.

use serde::Deserialize;

use crate::config::SELECTED_STATUS;
use crate::error::{Result, TileError};

/// Top-level shape of an export file
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct VectraExport {
    pub root: ExportRoot,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ExportRoot {
    /// Candidate tiles, in file order
    pub children: Vec<TileRecord>,
}

/// One candidate tile
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TileRecord {
    /// 0 marks a lesion selected for display
    pub status: i64,
    /// Output file stem, expected unique within an export
    pub uuid: String,
    /// Raw tile, base64-encoded PNG
    #[serde(default)]
    pub img64: Option<String>,
    /// Colour-corrected tile, base64-encoded PNG
    #[serde(default)]
    pub img64cc: Option<String>,
}

impl TileRecord {
    pub fn is_selected(&self) -> bool {
        self.status == SELECTED_STATUS
    }

    /// Base64 payload of the requested image field
    pub fn payload(&self, field: ImageField) -> Result<&str> {
        let value = match field {
            ImageField::ColorCorrected => self.img64cc.as_deref(),
            ImageField::Raw => self.img64.as_deref(),
        };

        value.ok_or_else(|| TileError::MissingImage {
            uuid: self.uuid.clone(),
            field: field.name(),
        })
    }
}

/// Which of a record's two images gets dumped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageField {
    /// `img64cc`, normalised against the subject's pixel statistics
    ColorCorrected,
    /// `img64`, as captured
    Raw,
}

impl ImageField {
    pub fn from_color_corrected(color_corrected: bool) -> Self {
        if color_corrected {
            Self::ColorCorrected
        } else {
            Self::Raw
        }
    }

    /// JSON field name in the export
    pub fn name(self) -> &'static str {
        match self {
            Self::ColorCorrected => "img64cc",
            Self::Raw => "img64",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(img64: Option<&str>, img64cc: Option<&str>) -> TileRecord {
        TileRecord {
            status: 0,
            uuid: "a1".to_string(),
            img64: img64.map(str::to_string),
            img64cc: img64cc.map(str::to_string),
        }
    }

    #[test]
    fn test_flag_selects_field() {
        assert_eq!(ImageField::from_color_corrected(true), ImageField::ColorCorrected);
        assert_eq!(ImageField::from_color_corrected(false), ImageField::Raw);
        assert_eq!(ImageField::ColorCorrected.name(), "img64cc");
        assert_eq!(ImageField::Raw.name(), "img64");
    }

    #[test]
    fn test_payload_reads_chosen_field() {
        let rec = record(Some("raw"), Some("cc"));
        assert_eq!(rec.payload(ImageField::Raw).unwrap(), "raw");
        assert_eq!(rec.payload(ImageField::ColorCorrected).unwrap(), "cc");
    }

    #[test]
    fn test_missing_field_is_reported() {
        let rec = record(Some("raw"), None);
        match rec.payload(ImageField::ColorCorrected) {
            Err(TileError::MissingImage { uuid, field }) => {
                assert_eq!(uuid, "a1");
                assert_eq!(field, "img64cc");
            }
            other => panic!("expected MissingImage, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{"status": 1, "uuid": "b2", "img64": "x", "bodySite": "back", "score": 0.4}"#;
        let rec: TileRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.uuid, "b2");
        assert!(!rec.is_selected());
        assert!(rec.img64cc.is_none());
    }

    #[test]
    fn test_missing_uuid_fails_to_parse() {
        let json = r#"{"status": 0, "img64": "x"}"#;
        assert!(serde_json::from_str::<TileRecord>(json).is_err());
    }
}
