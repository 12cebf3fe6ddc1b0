//! Core `Config` struct, YAML loading and validation.

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{FontMetadataConfig, LogLevel};

/// Generator configuration.
///
/// Every field has a default, so an empty YAML document is a valid config.
/// Relative paths are resolved against the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Unicode `emoji-test.txt` registry to read emoji names from
    #[serde(default = "crate::defaults::emoji_test_file")]
    pub emoji_test_file: PathBuf,

    /// Typeface the name glyphs are copied from
    #[serde(default = "crate::defaults::source_font")]
    pub source_font: PathBuf,

    /// Directory generated files are written to
    #[serde(default = "crate::defaults::output_dir")]
    pub output_dir: PathBuf,

    #[serde(default)]
    pub log_level: LogLevel,

    #[serde(default)]
    pub font: FontMetadataConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            emoji_test_file: crate::defaults::emoji_test_file(),
            source_font: crate::defaults::source_font(),
            output_dir: crate::defaults::output_dir(),
            log_level: LogLevel::default(),
            font: FontMetadataConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from `path`, or use defaults when no path is given.
    ///
    /// An explicitly given path that does not exist is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            log::info!("No config file given, using defaults");
            return Ok(Self::default());
        };

        log::info!("Loading config from {:?}", path);
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = if contents.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml_ng::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Check field values that serde cannot check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::validate_font_name(&self.font.name)?;
        if self.font.version.trim().is_empty() {
            return Err(ConfigError::Validation(
                "font.version must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// The font name becomes an output file name, so it must be a single
    /// plain path component.
    fn validate_font_name(name: &str) -> Result<(), ConfigError> {
        if name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "font.name must not be empty".to_string(),
            ));
        }

        let mut components = Path::new(name).components();
        let single_normal = matches!(components.next(), Some(Component::Normal(_)))
            && components.next().is_none();
        if !single_normal || name.contains(['/', '\\']) {
            return Err(ConfigError::Validation(format!(
                "font.name '{name}' must not contain path separators or '..'"
            )));
        }

        Ok(())
    }

    /// Path of an output file named after the font, e.g. `fonts/Emoji2Text.plan.json`.
    pub fn output_path(&self, extension: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", self.font.name, extension))
    }

    pub fn with_emoji_test_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.emoji_test_file = path.into();
        self
    }

    pub fn with_source_font(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_font = path.into();
        self
    }

    pub fn with_output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = path.into();
        self
    }
}
