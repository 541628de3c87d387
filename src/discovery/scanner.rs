//! Directory scanning functionality
//!
//! This module contains functions for listing the candidate files of a
//! test directory.

use std::fs::read_dir;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::errors::{Result, file_operation_error, invalid_filename_error};

/// Information about a file found during scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// The path to the file
    pub path: PathBuf,
    /// The filename of the file
    pub filename: String,
}

impl FileInfo {
    /// Creates a new FileInfo from a path
    ///
    /// # Errors
    /// Returns an error if the path has no filename or the filename is not
    /// valid Unicode
    pub fn new(path: PathBuf) -> Result<Self> {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| invalid_filename_error(path.clone()))?
            .to_string();

        Ok(FileInfo { path, filename })
    }
}

/// Scans a directory for files
///
/// Only the immediate entries of `directory` are considered. Anything that
/// is not a regular file (or a link to one) is skipped, as are names that
/// are not valid Unicode. The result is sorted by filename so repeated runs
/// over the same directory agree.
///
/// # Errors
/// Returns an error if the directory cannot be listed
pub fn scan_directory(directory: &Path) -> Result<Vec<FileInfo>> {
    debug!("Scanning directory: {}", directory.display());

    let entries = read_dir(directory)
        .map_err(|e| file_operation_error(e, directory.to_path_buf(), "list directory"))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| file_operation_error(e, directory.to_path_buf(), "read entry of"))?
            .path();

        if !path.is_file() {
            debug!("Skipping {}: not a regular file", path.display());
            continue;
        }

        match FileInfo::new(path) {
            Ok(file) => files.push(file),
            Err(e) => warn!("Skipping entry: {e}"),
        }
    }

    files.sort_by(|a, b| a.filename.cmp(&b.filename));

    debug!("Found {} files in directory", files.len());

    Ok(files)
}
