//! Test source matching functionality
//!
//! This module recognises test sources by their naming convention and
//! derives the build target each one produces.

use log::{debug, info, trace};

use crate::config::Convention;
use crate::errors::Result;
use crate::manifest::TestRecord;
use crate::utils::join_target_path;

use super::scanner::FileInfo;

/// Checks whether a filename follows the test source convention
pub fn is_test_source(filename: &str, convention: &Convention) -> bool {
    filename.ends_with(&convention.suffix())
}

/// Derives the manifest record of a single test source
///
/// For `leds_test.c` under `./tests` with the default convention this gives
/// `name = leds_test`, `test_name = leds_unit_test` and
/// `path = ./tests/leds_unit_test`.
///
/// # Returns
/// * `Result<Option<TestRecord>>` - `None` when the filename does not follow
///   the convention
///
/// # Errors
/// Returns an error if the joined target path is not valid Unicode
pub fn derive_record(
    directory: &str,
    filename: &str,
    convention: &Convention,
) -> Result<Option<TestRecord>> {
    let Some(name) = filename.strip_suffix(convention.extension.as_str()) else {
        return Ok(None);
    };
    let Some(target) = name.strip_suffix(convention.test_marker.as_str()) else {
        return Ok(None);
    };

    let test_name = format!("{target}{}", convention.target_marker);
    let path = join_target_path(directory, &test_name)?;

    Ok(Some(TestRecord {
        name: name.to_string(),
        test_name,
        path,
    }))
}

/// Matches scanned files against the convention
///
/// Files that do not follow the convention are left out. The order of
/// `files` is kept.
///
/// # Errors
/// Returns an error if a record cannot be derived
pub fn match_test_sources(
    directory: &str,
    files: &[FileInfo],
    convention: &Convention,
) -> Result<Vec<TestRecord>> {
    let mut records = Vec::new();

    for file in files {
        if !is_test_source(&file.filename, convention) {
            trace!("{} is not a test source", file.filename);
            continue;
        }

        if let Some(record) = derive_record(directory, &file.filename, convention)? {
            info!("{} found! Building {}.", file.filename, record.test_name);
            records.push(record);
        }
    }

    debug!(
        "Matched {} of {} files in {}",
        records.len(),
        files.len(),
        directory
    );

    Ok(records)
}
