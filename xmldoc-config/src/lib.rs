//! Shared configuration loader for the xmldoc toolchain.
//!
//! `defaults/xmldoc.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`XmldocConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use xmldoc_babel::ConvertOptions;

const DEFAULT_TOML: &str = include_str!("../defaults/xmldoc.default.toml");

/// Top-level configuration consumed by xmldoc applications.
#[derive(Debug, Clone, Deserialize)]
pub struct XmldocConfig {
    pub convert: ConvertConfig,
    pub logging: LoggingConfig,
}

/// Mirrors the knobs exposed by the comment converter.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub keep_unknown_params: bool,
    pub verbatim: bool,
}

impl From<ConvertConfig> for ConvertOptions {
    fn from(config: ConvertConfig) -> Self {
        ConvertOptions {
            keep_unknown_params: config.keep_unknown_params,
            verbatim: config.verbatim,
        }
    }
}

impl From<&ConvertConfig> for ConvertOptions {
    fn from(config: &ConvertConfig) -> Self {
        ConvertOptions {
            keep_unknown_params: config.keep_unknown_params,
            verbatim: config.verbatim,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// The level `steps` notches more verbose, saturating at trace.
    pub fn raised(self, steps: u8) -> LogLevel {
        const ORDER: [LogLevel; 5] = [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ];
        let current = ORDER.iter().position(|level| *level == self).unwrap_or(0);
        ORDER[(current + steps as usize).min(ORDER.len() - 1)]
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<XmldocConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<XmldocConfig, ConfigError> {
    Loader::new().build()
}
