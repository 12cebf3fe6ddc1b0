//! Glyph naming.
//!
//! Name-alphabet glyphs keep their Adobe Glyph List names; every other glyph
//! is named `uniXXXX` after its codepoint, and sequence glyphs `comp_NNNN`
//! after their position in the registry.

/// AGL names for the punctuation of the name alphabet.
const PUNCTUATION_NAMES: &[(char, &str)] = &[
    ('#', "numbersign"),
    ('(', "parenleft"),
    (')', "parenright"),
    ('*', "asterisk"),
    ('_', "underscore"),
];

const DIGIT_NAMES: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Production name for a codepoint.
///
/// Digits, lowercase letters and the name punctuation get their AGL names;
/// anything else falls back to [`uni_name`].
pub fn production_name(codepoint: u32) -> String {
    let Some(c) = char::from_u32(codepoint) else {
        return uni_name(codepoint);
    };

    if c.is_ascii_digit() {
        return DIGIT_NAMES[(codepoint - '0' as u32) as usize].to_string();
    }
    if c.is_ascii_lowercase() {
        return c.to_string();
    }
    PUNCTUATION_NAMES
        .iter()
        .find(|(p, _)| *p == c)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| uni_name(codepoint))
}

/// `uni` followed by at least four uppercase hex digits, e.g. `uni1F600`.
pub fn uni_name(codepoint: u32) -> String {
    format!("uni{codepoint:04X}")
}

/// Name of the glyph for the `index`-th composition sequence.
pub fn composition_name(index: usize) -> String {
    format!("comp_{index:04}")
}
