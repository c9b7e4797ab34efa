/// Application-level constants
pub const APP_NAME: &str = "vectra-tiles";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Appended to an export's file stem to name its output directory
pub const TILES_DIR_SUFFIX: &str = "_tiles";

/// Extension of the input exports picked up by a directory scan
pub const EXPORT_EXTENSION: &str = "json";

/// Extension of every written tile
pub const TILE_EXTENSION: &str = "png";

/// Vectra's `status` value for a lesion flagged for display
pub const SELECTED_STATUS: i64 = 0;

/// Log filter used when RUST_LOG is unset
pub fn default_log_filter() -> &'static str {
    "vectra_tiles=info"
}

/// Knobs shared by the dumper and the batch driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpOptions {
    /// Dump `img64cc` when true, `img64` when false
    pub color_corrected: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            color_corrected: true,
        }
    }
}
