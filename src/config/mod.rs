//! Configuration module for taxon
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TAXON_*)
//! 3. Config file (`--config`, else ~/.config/taxon/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{default_config_path, ConfigWarning};
pub use types::{Config, LogConfig, LogLevel, UiConfig, UnicodeMode};
