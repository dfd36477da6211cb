//! Shared configuration loader for the draft-bbcode toolchain.
//!
//! `defaults/draft-bbcode.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`BbConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use draft_bbcode::{ConvertOptions, HashtagConfig};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/draft-bbcode.default.toml");

/// Top-level configuration consumed by draft-bbcode applications.
#[derive(Debug, Clone, Deserialize)]
pub struct BbConfig {
    pub hashtag: HashtagSettings,
    pub output: OutputSettings,
}

/// Hashtag detection knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct HashtagSettings {
    pub enabled: bool,
    pub trigger: String,
    pub separator: String,
}

/// Output shaping knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    pub directional: bool,
}

impl From<&HashtagSettings> for HashtagConfig {
    fn from(settings: &HashtagSettings) -> Self {
        HashtagConfig::new(settings.trigger.clone(), settings.separator.clone())
    }
}

impl BbConfig {
    /// Conversion options matching this configuration (no entity transform).
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            hashtag: self
                .hashtag
                .enabled
                .then(|| HashtagConfig::from(&self.hashtag)),
            directional: self.output.directional,
            entity_transform: None,
        }
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
    pub fn build(self) -> Result<BbConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<BbConfig, ConfigError> {
    Loader::new().build()
}
