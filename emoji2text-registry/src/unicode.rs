//! Codepoint constants used while building emoji tables and glyphs.

// ASCII
pub const ASCII_DIGIT_0: u32 = 0x30;
pub const ASCII_DIGIT_9: u32 = 0x39;
pub const ASCII_SMALL_A: u32 = 0x61;
pub const ASCII_SMALL_Z: u32 = 0x7A;

/// Regional Indicator Symbol Letter A.
pub const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;
/// Regional Indicator Symbol Letter Z.
pub const REGIONAL_INDICATOR_Z: u32 = 0x1F1FF;

/// Zero Width Joiner.
pub const ZWJ: u32 = 0x200D;

/// Characters that may appear in a normalized emoji name.
///
/// These are the only glyphs copied from the source typeface, so every
/// normalized name must be spelled with them.
pub const NAME_PUNCTUATION: &[char] = &['#', '(', ')', '*', '_'];

/// Codepoints of every character allowed in a normalized name, in glyph order.
pub fn name_alphabet() -> Vec<u32> {
    (ASCII_DIGIT_0..=ASCII_DIGIT_9)
        .chain(ASCII_SMALL_A..=ASCII_SMALL_Z)
        .chain(NAME_PUNCTUATION.iter().map(|&c| c as u32))
        .collect()
}

/// Whether `codepoint` is one of the 26 regional indicator letters.
pub fn is_regional_indicator(codepoint: u32) -> bool {
    (REGIONAL_INDICATOR_A..=REGIONAL_INDICATOR_Z).contains(&codepoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_alphabet_size() {
        // 10 digits + 26 letters + 5 punctuation characters
        assert_eq!(name_alphabet().len(), 41);
    }

    #[test]
    fn test_name_alphabet_order() {
        let alphabet = name_alphabet();
        assert_eq!(alphabet.first(), Some(&ASCII_DIGIT_0));
        assert_eq!(alphabet[10], ASCII_SMALL_A);
        assert_eq!(alphabet.last(), Some(&('_' as u32)));
    }

    #[test]
    fn test_regional_indicator_range() {
        assert!(is_regional_indicator(0x1F1E6));
        assert!(is_regional_indicator(0x1F1FF));
        assert!(!is_regional_indicator(0x1F1E5));
        assert!(!is_regional_indicator(0x1F200));
    }
}
