//! Tests for loading a real source font with swash.

use emoji2text_config::FontMetadataConfig;
use emoji2text_fonts::{GlyphSource, Outline, SourceFont, build_font};
use emoji2text_registry::EmojiTables;
use std::path::Path;

/// Embedded DejaVu Sans Mono for testing.
const TEST_FONT: &[u8] = include_bytes!("fonts/DejaVuSansMono.ttf");

fn test_font() -> SourceFont {
    SourceFont::from_bytes(TEST_FONT.to_vec()).expect("Should load embedded font successfully")
}

#[test]
fn test_font_from_embedded() {
    let font = test_font();
    assert_eq!(font.family_name(), "DejaVu Sans Mono");
    assert!(font.version().starts_with("Version"), "got {:?}", font.version());
    assert_eq!(font.units_per_em(), 2048);
}

#[test]
fn test_font_open_from_path() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fonts/DejaVuSansMono.ttf");
    let font = SourceFont::open(&path).expect("Should open font file");
    assert_eq!(font.family_name(), "DejaVu Sans Mono");
}

#[test]
fn test_font_maps_name_alphabet() {
    let font = test_font();

    let a = font.glyph('a' as u32).expect("'a' should be mapped");
    let hash = font.glyph('#' as u32).expect("'#' should be mapped");
    assert_ne!(a.glyph_id, 0);
    assert_ne!(hash.glyph_id, 0);
    assert_ne!(a.glyph_id, hash.glyph_id);
    assert!(a.advance_width > 0);
    // Monospace: every name glyph has the same advance
    assert_eq!(a.advance_width, hash.advance_width);
}

#[test]
fn test_font_has_no_emoji() {
    assert!(test_font().glyph(0x1F600).is_none());
}

#[test]
fn test_build_font_from_real_source() {
    let font = test_font();
    let registry = "\
1F600 ; fully-qualified # 😀 E1.0 grinning face
1F1EF 1F1F5 ; fully-qualified # 🇯🇵 E0.6 flag: Japan
";
    let tables = EmojiTables::from_reader(registry.as_bytes()).unwrap();
    let (plan, stats) = build_font(&font, &tables, &FontMetadataConfig::default()).unwrap();

    assert_eq!(stats.copied, 41);
    assert_eq!(stats.emoji, 1);
    assert_eq!(stats.components, 2);
    assert_eq!(stats.compositions, 1);
    assert_eq!(plan.units_per_em, 2048);

    let a = font.glyph('a' as u32).unwrap();
    assert_eq!(
        plan.glyph("a").unwrap().outline,
        Outline::Source {
            glyph_id: a.glyph_id
        }
    );
    assert_eq!(
        plan.glyph("uni1F600").unwrap().advance_width,
        a.advance_width * "grinning_face".len() as u32
    );
    assert!(
        plan.info
            .sfnt_names
            .iter()
            .any(|n| n.value.ends_with(&format!("from DejaVu Sans Mono {}", font.version())))
    );
}
