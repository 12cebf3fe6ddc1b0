//! Typed error variants for the emoji2text-config crate.
//!
//! Callers that work with `anyhow` can still match on these via
//! `downcast_ref::<ConfigError>()`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading the config file.
    #[error("I/O error reading config '{path}': {source}")]
    Io {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file contained invalid YAML that could not be parsed.
    #[error("YAML parse error in config '{path}': {source}")]
    Parse {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    #[error("Config validation error: {0}")]
    Validation(String),
}
