//! Typed error types for emoji2text-registry.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building emoji tables from a registry file.
///
/// Malformed lines are not errors: they are skipped while parsing. Only
/// conditions that must halt generation end up here.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The registry file could not be opened or read.
    #[error("Failed to read emoji registry '{path}': {source}")]
    Io {
        /// Path of the registry file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line of the registry could not be read from the underlying reader.
    #[error("Failed to read line {line} of emoji registry: {source}")]
    Read {
        /// 1-based line number.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A codepoint token was not a valid hexadecimal `u32`.
    ///
    /// The registry is trusted input, so this means the file format does not
    /// match what the parser expects.
    #[error("Invalid codepoint '{token}' on line {line} of emoji registry: {source}")]
    InvalidCodepoint {
        /// 1-based line number.
        line: usize,
        /// Offending token text.
        token: String,
        /// Integer conversion error.
        #[source]
        source: ParseIntError,
    },
}
