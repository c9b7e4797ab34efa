/// Tile image handling
///
/// This module handles:
/// - Decoding base64 PNG payloads into images (decoder.rs)
/// - Dumping every selected tile of an export to disk (dump.rs)

pub mod decoder;
pub mod dump;
