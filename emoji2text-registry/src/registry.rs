//! Whole-file parsing of `emoji-test.txt`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::RegistryError;
use crate::line::parse_line;
use crate::normalize::normalize_name;
use crate::tables::{Codepoint, CodepointNames, CompositionSequence};

/// Names parsed from the registry, before special codepoints are merged in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmojiRegistry {
    /// Single-codepoint emoji. A later line for the same codepoint overwrites
    /// an earlier one.
    pub mappings: CodepointNames,
    /// Multi-codepoint sequences in file order, duplicates included.
    ///
    /// The codepoints of a sequence are not added to `mappings`; glyphs for
    /// them are provided when the substitution rules are built.
    pub sequences: Vec<CompositionSequence>,
}

impl EmojiRegistry {
    /// Parse the registry file at `path`.
    pub fn from_path(path: &Path) -> Result<Self, RegistryError> {
        let file = File::open(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse registry text line by line.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, RegistryError> {
        let mut registry = Self::default();
        let mut skipped = 0usize;

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|source| RegistryError::Read {
                line: line_number,
                source,
            })?;

            let Some(parsed) = parse_line(line.trim()) else {
                skipped += 1;
                continue;
            };

            let codepoints = parsed
                .codepoints
                .iter()
                .map(|token| parse_codepoint(token, line_number))
                .collect::<Result<Vec<_>, _>>()?;
            let name = normalize_name(parsed.name);

            if let [codepoint] = *codepoints.as_slice() {
                if let Some(previous) = registry.mappings.insert(codepoint, name) {
                    log::debug!(
                        "Line {line_number}: U+{codepoint:04X} redefined (was '{previous}')"
                    );
                }
            } else {
                registry
                    .sequences
                    .push(CompositionSequence::new(codepoints, name));
            }
        }

        log::debug!(
            "Parsed {} single codepoints and {} sequences ({} lines skipped)",
            registry.mappings.len(),
            registry.sequences.len(),
            skipped
        );

        Ok(registry)
    }
}

/// Parse the registry file at `path` into single mappings and sequences.
pub fn parse_emoji_test(
    path: &Path,
) -> Result<(CodepointNames, Vec<CompositionSequence>), RegistryError> {
    let registry = EmojiRegistry::from_path(path)?;
    Ok((registry.mappings, registry.sequences))
}

fn parse_codepoint(token: &str, line: usize) -> Result<Codepoint, RegistryError> {
    Codepoint::from_str_radix(token, 16).map_err(|source| RegistryError::InvalidCodepoint {
        line,
        token: token.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<EmojiRegistry, RegistryError> {
        EmojiRegistry::from_reader(text.as_bytes())
    }

    #[test]
    fn test_single_codepoint_line() {
        let registry = parse("1F600 ; fully-qualified # 😀 E1.0 grinning face\n").unwrap();
        assert_eq!(registry.mappings.len(), 1);
        assert_eq!(registry.mappings[&0x1F600], "grinning_face");
        assert!(registry.sequences.is_empty());
    }

    #[test]
    fn test_sequence_line_adds_no_single_entries() {
        let registry = parse("1F1E6 1F1F7 ; fully-qualified # 🇦🇷 E2.0 Argentina\n").unwrap();
        assert!(registry.mappings.is_empty());
        assert_eq!(
            registry.sequences,
            vec![CompositionSequence::new(vec![0x1F1E6, 0x1F1F7], "argentina")]
        );
    }

    #[test]
    fn test_sequences_keep_file_order_and_duplicates() {
        let text = "\
0023 FE0F 20E3 ; fully-qualified # #️⃣ E0.6 keycap: #
0023 20E3 ; unqualified # #⃣ E0.6 keycap: #
0023 FE0F 20E3 ; fully-qualified # #️⃣ E0.6 keycap: #
";
        let registry = parse(text).unwrap();
        let names: Vec<_> = registry.sequences.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["flag_#", "flag_#", "flag_#"]);
        assert_eq!(registry.sequences[0].codepoints, vec![0x23, 0xFE0F, 0x20E3]);
        assert_eq!(registry.sequences[1].codepoints, vec![0x23, 0x20E3]);
        assert_eq!(registry.sequences[0], registry.sequences[2]);
    }

    #[test]
    fn test_last_write_wins_for_single_codepoint() {
        let text = "\
263A ; unqualified # ☺ E0.6 smiling face
263A ; fully-qualified # ☺ E0.6 relaxed
";
        let registry = parse(text).unwrap();
        assert_eq!(registry.mappings[&0x263A], "relaxed");
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let text = "\
# emoji-test.txt
# Date: 2024-08-14

# group: Smileys & Emotion
# subgroup: face-smiling
1F600 ; fully-qualified # 😀 E1.0 grinning face

# Smileys & Emotion subtotal:		184
";
        let registry = parse(text).unwrap();
        assert_eq!(registry.mappings.len(), 1);
    }

    #[test]
    fn test_lowercase_hex_is_accepted() {
        let registry = parse("1f600 ; fully-qualified # 😀 E1.0 grinning face\n").unwrap();
        assert!(registry.mappings.contains_key(&0x1F600));
    }

    #[test]
    fn test_invalid_codepoint_is_fatal() {
        let text = "\
1F600 ; fully-qualified # 😀 E1.0 grinning face
1F60G ; fully-qualified # ? E1.0 broken
";
        let err = parse(text).unwrap_err();
        match err {
            RegistryError::InvalidCodepoint { line, token, .. } => {
                assert_eq!(line, 2);
                assert_eq!(token, "1F60G");
            }
            other => panic!("Expected InvalidCodepoint, got {other:?}"),
        }
    }

    #[test]
    fn test_overflowing_codepoint_is_fatal() {
        let err = parse("1FFFFFFFF ; fully-qualified # ? E1.0 huge\n").unwrap_err();
        assert!(matches!(err, RegistryError::InvalidCodepoint { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = EmojiRegistry::from_path(Path::new("/nonexistent/emoji-test.txt")).unwrap_err();
        assert!(matches!(err, RegistryError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/emoji-test.txt"));
    }
}
