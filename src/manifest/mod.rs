//! Manifest module
//!
//! This module contains the test matrix structures and their serialization.

mod model;
mod writer;

pub use model::{Manifest, TestRecord};
pub use writer::{render_manifest, write_manifest};
