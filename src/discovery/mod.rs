//! Test discovery module
//!
//! This module contains components for scanning a directory and finding
//! the test sources in it.

mod matcher;
mod scanner;

pub use matcher::{derive_record, is_test_source, match_test_sources};
pub use scanner::{FileInfo, scan_directory};
