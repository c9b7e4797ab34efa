/// Vectra export documents
///
/// This module handles:
/// - The typed record model of an export (data.rs)
/// - Loading and status filtering of exports (loader.rs)

pub mod data;
pub mod loader;
