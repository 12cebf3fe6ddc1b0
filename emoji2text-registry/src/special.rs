//! Fixed names for codepoints that the registry does not name on their own.

use crate::tables::CodepointNames;
use crate::unicode::{REGIONAL_INDICATOR_A, REGIONAL_INDICATOR_Z, ZWJ};

/// Build the table of special codepoint names.
///
/// - The zero width joiner renders as `_`, so ZWJ sequences whose parts are
///   shown individually stay readable.
/// - Each regional indicator maps to `regional_indicator_<letter>`, with the
///   letter taken from its offset from U+1F1E6.
pub fn special_mappings() -> CodepointNames {
    let mut mappings = CodepointNames::new();
    mappings.insert(ZWJ, "_".to_string());

    for (codepoint, letter) in (REGIONAL_INDICATOR_A..=REGIONAL_INDICATOR_Z).zip('a'..='z') {
        mappings.insert(codepoint, format!("regional_indicator_{letter}"));
    }

    mappings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::is_regional_indicator;

    #[test]
    fn test_joiner_maps_to_underscore() {
        assert_eq!(special_mappings().get(&ZWJ).map(String::as_str), Some("_"));
    }

    #[test]
    fn test_regional_indicator_count() {
        let mappings = special_mappings();
        let indicators: Vec<_> = mappings
            .keys()
            .filter(|cp| is_regional_indicator(**cp))
            .collect();
        assert_eq!(indicators.len(), 26);
        assert_eq!(mappings.len(), 27);
    }

    #[test]
    fn test_regional_indicators_in_codepoint_order() {
        let mappings = special_mappings();
        let names: Vec<&str> = (REGIONAL_INDICATOR_A..=REGIONAL_INDICATOR_Z)
            .map(|cp| mappings[&cp].as_str())
            .collect();
        assert_eq!(names.first(), Some(&"regional_indicator_a"));
        assert_eq!(names[1], "regional_indicator_b");
        assert_eq!(names[17], "regional_indicator_r");
        assert_eq!(names.last(), Some(&"regional_indicator_z"));
    }
}
