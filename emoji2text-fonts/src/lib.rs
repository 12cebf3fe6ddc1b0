//! Glyph plan assembly for the emoji2text font generator.
//!
//! This crate provides:
//! - Source typeface loading via swash (charmap, advance widths, naming)
//! - An in-memory glyph plan: glyphs, cmap, ligature lookups and metadata
//! - The assembly driver that turns emoji tables into text glyphs and
//!   substitution rules
//!
//! # Architecture
//!
//! `build_font` drives three passes over a fresh [`FontPlan`]:
//! 1. Copy the name alphabet (`0-9`, `a-z`, `#()*_`) from the source font
//! 2. Compose one text glyph per single-codepoint emoji
//! 3. Compose one glyph per emoji sequence and a `ccmp` ligature rule for it
//!
//! Outline storage and binary font serialization belong to the font engine
//! that consumes the finished plan.

pub mod assembly;
pub mod error;
pub mod glyph_names;
pub mod plan;
pub mod source;

// Re-export main types for convenience
pub use assembly::{
    BuildStats, build_font, copy_source_glyphs, create_composition_glyphs, create_emoji_glyphs,
    create_text_glyph,
};
pub use error::FontError;
pub use plan::{
    Component, FontInfo, FontPlan, Glyph, LigatureRule, Lookup, LookupKind, Outline,
    ScriptLanguages, SfntName, SfntNameId, Subtable,
};
pub use source::{GlyphSource, SourceFont, SourceGlyph};
