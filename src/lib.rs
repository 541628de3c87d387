use std::path::{Path, PathBuf};

use log::{debug, info};

pub use cli::*;
pub use errors::*;

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
mod errors;
pub mod logging;
pub mod manifest;
pub mod utils;

use config::{Convention, resolve_settings};
use discovery::{match_test_sources, scan_directory};
use manifest::{Manifest, render_manifest, write_manifest};
use utils::normalize_source_path;

pub mod prelude {
    pub use crate::config::{Convention, Overrides, Settings};
    pub use crate::constants::USAGE;
    pub use crate::errors::{
        config_parsing_error, file_operation_error, invalid_filename_error, serialization_error,
        usage_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{LogLevel, init_logger, success_message};
    pub use crate::manifest::{Manifest, TestRecord};
    pub use crate::{Deployment, Invocation, build_manifest, deploy, parse_invocation};
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deployment {
    /// The manifest was written to `output`
    Written { output: PathBuf, tests: usize },
    /// Dry run: the rendered manifest, nothing was written
    Rendered(String),
}

/// Builds the manifest for the test sources found under `source`
///
/// `source` is normalized first; records keep the sorted listing order.
///
/// # Errors
/// Returns an error if the directory cannot be listed or a record cannot be
/// derived
pub fn build_manifest(source: &str, convention: &Convention) -> Result<Manifest> {
    let directory = normalize_source_path(source);
    debug!("Normalized source {source:?} to {directory:?}");

    let files = scan_directory(Path::new(&directory))?;
    let records = match_test_sources(&directory, &files, convention)?;

    Ok(Manifest::from_records(records))
}

/// Runs the whole pipeline for one invocation
///
/// # Errors
/// Returns an error if the settings are invalid, the source directory
/// cannot be listed or the manifest cannot be written
pub fn deploy(invocation: &Invocation) -> anyhow::Result<Deployment> {
    let settings = resolve_settings(invocation.config.as_deref(), &invocation.overrides)?;
    let manifest = build_manifest(&invocation.source, &settings.convention)?;
    info!(
        "Found {} test(s) in {}",
        manifest.len(),
        invocation.source
    );

    if invocation.dry_run {
        return Ok(Deployment::Rendered(render_manifest(
            &manifest,
            settings.pretty,
        )?));
    }

    write_manifest(&manifest, &settings.output, settings.pretty)?;

    Ok(Deployment::Written {
        output: settings.output,
        tests: manifest.len(),
    })
}
