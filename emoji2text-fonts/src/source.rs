//! Source typeface access.
//!
//! The name glyphs are copied from an existing font. The assembly driver only
//! needs a few facts about it, behind [`GlyphSource`], so it can run against
//! an in-memory fake in tests.

use std::fs;
use std::path::Path;

use swash::{CacheKey, FontRef, StringId};

use crate::error::FontError;

/// Glyph of the source font that a codepoint maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceGlyph {
    /// Glyph id in the source font.
    pub glyph_id: u16,
    /// Advance width in font units.
    pub advance_width: u32,
}

/// Read-only view of the typeface the name alphabet is copied from.
pub trait GlyphSource {
    /// Glyph for `codepoint`, or `None` if the font does not map it.
    fn glyph(&self, codepoint: u32) -> Option<SourceGlyph>;

    /// Family name from the naming table.
    fn family_name(&self) -> String;

    /// Version string from the naming table.
    fn version(&self) -> String;

    fn units_per_em(&self) -> u16;
}

/// An OpenType/TrueType font loaded with swash.
///
/// Owns the font bytes and rebuilds a borrowed `FontRef` on demand, so no
/// self-referential lifetime is needed.
#[derive(Clone)]
pub struct SourceFont {
    data: Vec<u8>,
    offset: u32,
    key: CacheKey,
}

impl std::fmt::Debug for SourceFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFont")
            .field("data_len", &self.data.len())
            .field("offset", &self.offset)
            .finish()
    }
}

impl SourceFont {
    /// Load the first face of the font file at `path`.
    pub fn open(path: &Path) -> Result<Self, FontError> {
        let data = fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let font = Self::from_bytes(data).ok_or_else(|| FontError::InvalidFont {
            path: path.to_path_buf(),
        })?;
        log::info!(
            "Loaded source font '{}' {} from {}",
            font.family_name(),
            font.version(),
            path.display()
        );
        Ok(font)
    }

    /// Create a SourceFont from raw bytes using face index 0.
    ///
    /// # Returns
    /// `Some(SourceFont)` if the font data is valid, `None` otherwise.
    pub fn from_bytes(data: Vec<u8>) -> Option<Self> {
        let (offset, key) = {
            let font = FontRef::from_index(&data, 0)?;
            (font.offset, font.key)
        };
        Some(Self { data, offset, key })
    }

    fn font_ref(&self) -> FontRef<'_> {
        FontRef {
            data: &self.data,
            offset: self.offset,
            key: self.key,
        }
    }

    fn localized(&self, id: StringId) -> String {
        self.font_ref()
            .localized_strings()
            .find_by_id(id, None)
            .map(|s| s.chars().collect())
            .unwrap_or_default()
    }
}

impl GlyphSource for SourceFont {
    fn glyph(&self, codepoint: u32) -> Option<SourceGlyph> {
        let font = self.font_ref();
        let glyph_id = font.charmap().map(codepoint);
        if glyph_id == 0 {
            return None;
        }
        let advance = font.glyph_metrics(&[]).advance_width(glyph_id);
        Some(SourceGlyph {
            glyph_id,
            advance_width: advance.max(0.0).round() as u32,
        })
    }

    fn family_name(&self) -> String {
        self.localized(StringId::Family)
    }

    fn version(&self) -> String {
        self.localized(StringId::Version)
    }

    fn units_per_em(&self) -> u16 {
        self.font_ref().metrics(&[]).units_per_em
    }
}
