//! Configuration loading functionality
//!
//! This module contains functions for loading and validating configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use log::{debug, info};
use serde_yaml::from_str;

use crate::errors::config_parsing_error;

use super::model::Settings;

/// Values given on the command line that take precedence over the config file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    /// Manifest location
    pub output: Option<PathBuf>,
    /// Pretty-print the manifest
    pub pretty: bool,
    /// Extension of the test sources
    pub extension: Option<String>,
    /// Marker ending every test source name
    pub test_marker: Option<String>,
    /// Marker ending every build target name
    pub target_marker: Option<String>,
}

/// Loads settings from a YAML file
///
/// # Arguments
/// * `file` - Path to the configuration file
///
/// # Errors
/// Returns an error if the file cannot be read or if the YAML is invalid
pub fn load_config(file: &Path) -> Result<Settings> {
    let file_content = fs::read(file).map_err(|e| {
        anyhow!(
            "Failed to read configuration file {}: {}",
            file.display(),
            e
        )
    })?;

    let content_str = String::from_utf8(file_content).map_err(|e| {
        anyhow!(
            "Configuration file {} contains invalid UTF-8 characters: {}",
            file.display(),
            e
        )
    })?;

    // An empty file means "all defaults"
    if content_str.trim().is_empty() {
        debug!("Configuration file {} is empty", file.display());
        return Ok(Settings::default());
    }

    let settings: Settings = from_str(&content_str).map_err(|e| {
        config_parsing_error(
            e,
            &format!(
                "{} could not be parsed. Please check the YAML syntax.",
                file.display()
            ),
        )
    })?;

    Ok(settings)
}

/// Resolves the settings for a run
///
/// Starts from the defaults, applies the config file when one is given and
/// then the command-line overrides. The result is validated.
///
/// # Errors
/// Returns an error if the config file cannot be loaded or the resulting
/// settings are invalid
pub fn resolve_settings(config: Option<&Path>, overrides: &Overrides) -> Result<Settings> {
    let mut settings = match config {
        Some(file) => {
            info!("Reading settings from {}", file.display());
            load_config(file)?
        }
        None => Settings::default(),
    };

    apply_overrides(&mut settings, overrides);
    settings.validate()?;

    debug!("Resolved settings: {settings:?}");
    Ok(settings)
}

fn apply_overrides(settings: &mut Settings, overrides: &Overrides) {
    if let Some(output) = &overrides.output {
        settings.output = output.clone();
    }
    if overrides.pretty {
        settings.pretty = true;
    }
    if let Some(extension) = &overrides.extension {
        settings.convention.extension = extension.clone();
    }
    if let Some(test_marker) = &overrides.test_marker {
        settings.convention.test_marker = test_marker.clone();
    }
    if let Some(target_marker) = &overrides.target_marker {
        settings.convention.target_marker = target_marker.clone();
    }
}
