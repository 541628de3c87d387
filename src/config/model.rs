//! Configuration data structures
//!
//! This module contains the data structures for configuration.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_EXTENSION, DEFAULT_OUTPUT_PATH, DEFAULT_TARGET_MARKER, DEFAULT_TEST_MARKER,
};

/// Settings for one run of the deployer
///
/// Every field has a default, so a config file may set any subset of them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Where the manifest is written
    pub output: PathBuf,
    /// Whether the manifest JSON is pretty-printed
    pub pretty: bool,
    /// Naming convention used to recognise tests
    pub convention: Convention,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            pretty: false,
            convention: Convention::default(),
        }
    }
}

impl Settings {
    /// Validates the settings
    ///
    /// # Errors
    /// Returns an error with a detailed message if validation fails
    pub fn validate(&self) -> Result<()> {
        if self.output.as_os_str().is_empty() {
            return Err(anyhow!(
                "No output file specified. Please give the manifest a location."
            ));
        }

        self.convention.validate()
    }
}

/// Naming convention shared by test sources and their build targets
///
/// A test source is named `<target><test_marker><extension>` and builds the
/// executable `<target><target_marker>`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Convention {
    /// Extension of the test sources, including the dot
    pub extension: String,
    /// Marker ending every test source name
    pub test_marker: String,
    /// Marker ending every build target name
    pub target_marker: String,
}

impl Default for Convention {
    fn default() -> Self {
        Convention {
            extension: DEFAULT_EXTENSION.to_string(),
            test_marker: DEFAULT_TEST_MARKER.to_string(),
            target_marker: DEFAULT_TARGET_MARKER.to_string(),
        }
    }
}

impl Convention {
    /// The suffix a directory entry must end with to be a test source
    pub fn suffix(&self) -> String {
        format!("{}{}", self.test_marker, self.extension)
    }

    /// Validates the convention
    ///
    /// # Errors
    /// Returns an error if a part is empty, the extension has no leading dot,
    /// or both markers are the same
    pub fn validate(&self) -> Result<()> {
        if !self.extension.starts_with('.') || self.extension.len() < 2 {
            return Err(anyhow!(
                "Invalid extension '{}'. It must start with a dot, e.g. '.c'.",
                self.extension
            ));
        }

        if self.test_marker.is_empty() {
            return Err(anyhow!("The test marker must not be empty."));
        }

        if self.target_marker.is_empty() {
            return Err(anyhow!("The target marker must not be empty."));
        }

        if self.test_marker == self.target_marker {
            return Err(anyhow!(
                "The test marker and the target marker are both '{}'. Build targets must be named differently from test sources.",
                self.test_marker
            ));
        }

        Ok(())
    }
}
