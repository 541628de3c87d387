//! Manifest serialization functionality
//!
//! This module renders a manifest to JSON and persists it.

use std::fs;
use std::path::Path;

use log::debug;

use crate::errors::{Result, file_operation_error, serialization_error};

use super::model::Manifest;

/// Renders the manifest as JSON
///
/// # Errors
/// Returns an error if the manifest cannot be serialized
pub fn render_manifest(manifest: &Manifest, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(manifest)
    } else {
        serde_json::to_string(manifest)
    };

    rendered.map_err(|e| serialization_error(e, "test manifest"))
}

/// Writes the manifest to `output`, replacing any previous content
///
/// The parent directory of `output` must already exist.
///
/// # Errors
/// Returns an error if the manifest cannot be serialized or the file cannot
/// be written
pub fn write_manifest(manifest: &Manifest, output: &Path, pretty: bool) -> Result<()> {
    let json = render_manifest(manifest, pretty)?;
    debug!("Writing {} bytes to {}", json.len(), output.display());

    fs::write(output, json).map_err(|e| file_operation_error(e, output.to_path_buf(), "write"))?;

    Ok(())
}
