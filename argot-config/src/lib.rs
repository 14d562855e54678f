//! Shared configuration loader for argot.
//!
//! `defaults/argot.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`ArgotConfig`].

use argot_parser::argot::{TokenCode, TokenCodes, TokenTable};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/argot.default.toml");

/// Top-level configuration consumed by argot applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ArgotConfig {
    pub tokens: TokenConfig,
    pub cli: CliConfig,
}

/// Token category codes and the end marker used by the classifier.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenConfig {
    pub function: TokenCode,
    pub option: TokenCode,
    pub argument: TokenCode,
    pub end: TokenCode,
    pub end_marker: String,
}

impl TokenConfig {
    pub fn codes(&self) -> TokenCodes {
        TokenCodes {
            function: self.function,
            option: self.option,
            argument: self.argument,
            end: self.end,
        }
    }

    /// An empty token table classifying with these codes and end marker.
    pub fn table(&self) -> TokenTable {
        TokenTable::with_codes(self.codes()).with_end_marker(self.end_marker.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    pub log_level: String,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Text,
    Json,
}

/// File name looked up by [`Loader::with_project_file`].
pub const PROJECT_FILE: &str = "argot.toml";

/// Builds an [`ArgotConfig`] from the embedded defaults plus any layers added on top.
///
/// Later layers win: a project `argot.toml`, then an explicit `--config` file, then
/// per-invocation overrides such as `--format`.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Seeded with `defaults/argot.default.toml`.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer `argot.toml` from `dir` when it exists.
    pub fn with_project_file(self, dir: impl AsRef<Path>) -> Self {
        self.layer(&dir.as_ref().join(PROJECT_FILE), false)
    }

    /// Layer a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer a TOML file, skipped when absent.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    /// Override `cli.format`. Unknown names fail at [build](Self::build).
    pub fn with_format(self, format: &str) -> Result<Self, ConfigError> {
        self.set_override("cli.format", format)
    }

    /// Override a single dotted key such as `tokens.end_marker`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<ArgotConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path)
            .format(FileFormat::Toml)
            .required(required);
        self.builder = self.builder.add_source(source);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone, as the classifier and CLI see them with no files present.
pub fn load_defaults() -> Result<ArgotConfig, ConfigError> {
    Loader::new().build()
}
