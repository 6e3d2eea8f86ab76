//! Site configuration for the roster engine.
//!
//! This module provides the [`SiteConfig`] type and the [`ConfigLoader`]
//! for loading it from a YAML file.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_SHOP_DAY_START_HOUR, SiteConfig};
