//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::editor::render::MAX_INDENT;
use crate::editor::RenderOptions;
use crate::error::TaxonResult;

use super::loader::{self, ConfigWarning};

/// Unicode icon mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnicodeMode {
    /// Detect from the terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl UnicodeMode {
    pub fn resolve(self, detected: bool) -> bool {
        match self {
            UnicodeMode::Auto => detected,
            UnicodeMode::Always => true,
            UnicodeMode::Never => false,
        }
    }
}

/// Terminal editor settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub unicode: UnicodeMode,

    /// Spaces per tree level, capped when rendering
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Capture mouse clicks and drags
    #[serde(default = "default_true")]
    pub mouse: bool,

    /// Show the content pane under the tree
    #[serde(default = "default_true")]
    pub show_content: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            unicode: UnicodeMode::default(),
            indent: default_indent(),
            mouse: true,
            show_content: true,
        }
    }
}

impl UiConfig {
    pub fn render_options(&self, detected_unicode: bool) -> RenderOptions {
        RenderOptions {
            unicode: self.unicode.resolve(detected_unicode),
            indent: self.indent.min(MAX_INDENT),
            show_content: self.show_content,
        }
    }
}

fn default_indent() -> usize {
    4
}

fn default_true() -> bool {
    true
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "off" => Some(LogLevel::Off),
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    /// Level raised by `count` repetitions of `-v`
    pub fn raised_by(self, count: u8) -> Self {
        const ORDER: [LogLevel; 6] = [
            LogLevel::Off,
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ];
        let current = ORDER.iter().position(|l| *l == self).unwrap_or(3);
        ORDER[(current + count as usize).min(ORDER.len() - 1)]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Log file settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LogConfig {
    #[serde(default)]
    pub level: LogLevel,

    /// Directory for log files; platform default when unset
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> TaxonResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> TaxonResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from `explicit`, else the user config file, else defaults.
    /// Environment overrides are applied last.
    pub fn load_or_default(explicit: Option<&Path>) -> TaxonResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit)
    }

    /// Apply environment variable overrides (TAXON_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
