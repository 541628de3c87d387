use std::path::Path;

use crate::constants::RELATIVE_PREFIX;
use crate::errors::{Result, invalid_filename_error};

/// Turns the `--source` argument into a path relative to the working directory
///
/// Absolute-looking inputs keep their suffix and gain a leading `.`,
/// everything else gains a leading `./` unless it already has one.
/// Existence is not checked here.
///
/// # Examples
/// ```
/// use test_deployer::utils::normalize_source_path;
///
/// assert_eq!(normalize_source_path("/firmware/tests"), "./firmware/tests");
/// assert_eq!(normalize_source_path("firmware/tests"), "./firmware/tests");
/// assert_eq!(normalize_source_path("./firmware/tests"), "./firmware/tests");
/// ```
pub fn normalize_source_path(source: &str) -> String {
    if source.starts_with('/') {
        format!(".{source}")
    } else if !source.starts_with(RELATIVE_PREFIX) {
        format!("{RELATIVE_PREFIX}{source}")
    } else {
        source.to_string()
    }
}

/// Joins a build target name onto the scanned directory
///
/// A separator is inserted only when the directory does not already end
/// with one.
pub fn join_target_path(directory: &str, target: &str) -> Result<String> {
    let joined = Path::new(directory).join(target);
    joined
        .to_str()
        .map(str::to_string)
        .ok_or_else(|| invalid_filename_error(joined.clone()))
}
