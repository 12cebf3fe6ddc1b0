//! Typed error types for emoji2text-fonts.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the source font or editing the glyph plan.
#[derive(Debug, Error)]
pub enum FontError {
    /// The source font file could not be read.
    #[error("Failed to read font file '{path}': {source}")]
    Io {
        /// Path to the font file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not a font swash can parse.
    #[error("'{path}' is not a valid OpenType/TrueType font")]
    InvalidFont {
        /// Path to the font file.
        path: PathBuf,
    },

    /// A glyph with this name already exists in the plan.
    #[error("Glyph '{0}' already exists")]
    DuplicateGlyph(String),

    /// The codepoint is already mapped to another glyph.
    #[error("U+{codepoint:04X} is already mapped to glyph '{existing}'")]
    DuplicateCodepoint {
        /// Codepoint being mapped.
        codepoint: u32,
        /// Glyph that already owns the codepoint.
        existing: String,
    },

    /// A referenced glyph does not exist in the plan.
    #[error("Unknown glyph '{0}'")]
    UnknownGlyph(String),

    /// A lookup subtable was referenced before being created.
    #[error("Unknown lookup subtable '{0}'")]
    UnknownSubtable(String),

    /// A lookup with this name already exists in the plan.
    #[error("Lookup '{0}' already exists")]
    DuplicateLookup(String),
}
