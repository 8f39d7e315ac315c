//! Configuration management.
//!
//! Loads `config.toml` from the platform config dir (or an explicit path),
//! filling every missing key with its default.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CatalogConfig, Config, UiConfig};
