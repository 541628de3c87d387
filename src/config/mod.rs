//! Configuration module
//!
//! This module contains components for loading and validating configuration.

mod loader;
mod model;

pub use loader::{Overrides, load_config, resolve_settings};
pub use model::{Convention, Settings};
