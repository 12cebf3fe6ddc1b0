//! Font assembly driver.
//!
//! Turns [`EmojiTables`] into glyphs of a [`FontPlan`]: every emoji becomes a
//! composite of the name alphabet glyphs copied from the source font, and
//! every multi-codepoint sequence becomes a `ccmp` ligature.

use std::collections::BTreeSet;

use emoji2text_config::FontMetadataConfig;
use emoji2text_registry::EmojiTables;
use emoji2text_registry::unicode::name_alphabet;

use crate::error::FontError;
use crate::glyph_names::{composition_name, production_name, uni_name};
use crate::plan::{FontPlan, LookupKind, Outline, ScriptLanguages, SfntNameId};
use crate::source::GlyphSource;

const CCMP_LOOKUP: &str = "ccmp_lookup";
const CCMP_SUBTABLE: &str = "ccmp_subtable";
const SFNT_LANGUAGE: &str = "English (US)";

/// Glyph counts produced by [`build_font`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Name alphabet glyphs copied from the source font
    pub copied: usize,
    /// Single-codepoint emoji glyphs
    pub emoji: usize,
    /// Component glyphs created for sequences
    pub components: usize,
    /// Sequence glyphs, one ligature rule each
    pub compositions: usize,
}

/// Copy the name alphabet from `source` into `plan`.
///
/// Characters the source font does not map are skipped. Returns the number
/// of glyphs copied.
pub fn copy_source_glyphs(
    plan: &mut FontPlan,
    source: &dyn GlyphSource,
) -> Result<usize, FontError> {
    let mut copied = 0;
    for codepoint in name_alphabet() {
        let Some(source_glyph) = source.glyph(codepoint) else {
            log::warn!("Source font has no glyph for U+{codepoint:04X}");
            continue;
        };

        let glyph = plan.create_glyph(&production_name(codepoint), Some(codepoint))?;
        glyph.outline = Outline::Source {
            glyph_id: source_glyph.glyph_id,
        };
        glyph.advance_width = source_glyph.advance_width;
        copied += 1;
    }
    Ok(copied)
}

/// Replace the outline of `glyph_name` with `text` set in the plan's glyphs.
///
/// Characters without a drawable glyph in the plan are dropped. The advance
/// width becomes the total width of the referenced glyphs.
pub fn create_text_glyph(plan: &mut FontPlan, glyph_name: &str, text: &str) -> Result<(), FontError> {
    let mut references = Vec::new();
    let mut x: u32 = 0;
    for c in text.chars() {
        if let Some(glyph) = plan.glyph_for_codepoint(c as u32)
            && glyph.is_worth_outputting()
        {
            references.push((glyph.name.clone(), x));
            x += glyph.advance_width;
        }
    }

    let glyph = plan
        .glyph_mut(glyph_name)
        .ok_or_else(|| FontError::UnknownGlyph(glyph_name.to_string()))?;
    glyph.clear();
    for (name, offset) in references {
        glyph.add_reference(name, offset as i32);
    }
    glyph.advance_width = x;
    Ok(())
}

fn create_encoded_text_glyph(
    plan: &mut FontPlan,
    codepoint: u32,
    text: &str,
) -> Result<(), FontError> {
    let name = uni_name(codepoint);
    plan.create_glyph(&name, Some(codepoint))?;
    create_text_glyph(plan, &name, text)
}

/// Create a `uniXXXX` text glyph for every standalone emoji.
///
/// Codepoints of the name alphabet keep their copied glyphs. Returns the
/// number of glyphs created.
pub fn create_emoji_glyphs(plan: &mut FontPlan, tables: &EmojiTables) -> Result<usize, FontError> {
    let alphabet: BTreeSet<u32> = name_alphabet().into_iter().collect();

    let mut count = 0;
    for (&codepoint, name) in &tables.emoji {
        if alphabet.contains(&codepoint) {
            continue;
        }
        create_encoded_text_glyph(plan, codepoint, name)?;
        count += 1;
    }
    Ok(count)
}

/// Create the sequence glyphs and their `ccmp` ligature rules.
///
/// Returns `(components, compositions)`: how many component glyphs had to be
/// created and how many sequence glyphs were added.
pub fn create_composition_glyphs(
    plan: &mut FontPlan,
    tables: &EmojiTables,
) -> Result<(usize, usize), FontError> {
    plan.add_lookup(
        CCMP_LOOKUP,
        LookupKind::GsubLigature,
        "ccmp",
        vec![
            ScriptLanguages::new("DFLT", &["dflt"]),
            ScriptLanguages::new("latn", &["dflt"]),
        ],
        CCMP_SUBTABLE,
    )?;

    // Each component once, however many sequences share it (the joiner
    // appears in thousands).
    let needed: BTreeSet<u32> = tables
        .sequences
        .iter()
        .flat_map(|sequence| sequence.codepoints.iter().copied())
        .collect();

    let mut components = 0;
    for codepoint in needed {
        if plan.contains_codepoint(codepoint) {
            continue;
        }
        let text = match tables.combined.get(&codepoint) {
            Some(text) => text.as_str(),
            None => {
                log::debug!("U+{codepoint:04X} has no name, using an empty glyph");
                ""
            }
        };
        create_encoded_text_glyph(plan, codepoint, text)?;
        components += 1;
    }

    for (index, sequence) in tables.sequences.iter().enumerate() {
        let name = composition_name(index);
        plan.create_glyph(&name, None)?;
        create_text_glyph(plan, &name, &sequence.name)?;

        let rule = sequence
            .codepoints
            .iter()
            .map(|&cp| {
                plan.glyph_for_codepoint(cp)
                    .map(|glyph| glyph.name.clone())
                    .unwrap_or_else(|| uni_name(cp))
            })
            .collect();
        plan.add_ligature(CCMP_SUBTABLE, rule, &name)?;
    }

    Ok((components, tables.sequences.len()))
}

/// Build the complete glyph plan.
///
/// Copies the name alphabet from `source`, creates the emoji and sequence
/// glyphs from `tables`, then fills in the naming metadata from `meta`.
pub fn build_font(
    source: &dyn GlyphSource,
    tables: &EmojiTables,
    meta: &FontMetadataConfig,
) -> Result<(FontPlan, BuildStats), FontError> {
    let mut plan = FontPlan::new(source.units_per_em());

    let copied = copy_source_glyphs(&mut plan, source)?;
    log::info!("Copied {copied} glyphs from the source font");

    let emoji = create_emoji_glyphs(&mut plan, tables)?;
    log::info!("Created {emoji} emoji glyphs");

    let (components, compositions) = create_composition_glyphs(&mut plan, tables)?;
    log::info!("Created {compositions} compositions ({components} component glyphs)");

    let info = &mut plan.info;
    info.font_name = meta.name.clone();
    info.family_name = meta.name.clone();
    info.full_name = meta.full_name();
    info.version = meta.version.clone();
    info.weight = meta.weight.clone();
    info.copyright = meta.copyright.clone();

    let unique_id = format!(
        "{} {} from {} {}",
        info.full_name,
        meta.version,
        source.family_name(),
        source.version()
    );
    info.append_sfnt_name(SFNT_LANGUAGE, SfntNameId::UniqueId, unique_id);
    info.append_sfnt_name(SFNT_LANGUAGE, SfntNameId::License, meta.license.as_str());
    info.append_sfnt_name(SFNT_LANGUAGE, SfntNameId::LicenseUrl, meta.license_url.as_str());
    info.append_sfnt_name(SFNT_LANGUAGE, SfntNameId::Manufacturer, meta.manufacturer.as_str());
    info.append_sfnt_name(SFNT_LANGUAGE, SfntNameId::VendorUrl, meta.vendor_url.as_str());

    let stats = BuildStats {
        copied,
        emoji,
        components,
        compositions,
    };
    Ok((plan, stats))
}
