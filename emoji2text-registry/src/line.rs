//! Line-level parsing of the `emoji-test.txt` registry format.
//!
//! A data line looks like:
//!
//! ```text
//! 1F600 ; fully-qualified # 😀 E1.0 grinning face
//! ```
//!
//! Everything left of `;` is the codepoint sequence. After `#` comes the
//! preview glyph, the emoji version and the display name.

/// Codepoint tokens and raw display name extracted from one registry line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryLine<'a> {
    /// Hexadecimal codepoint tokens in sequence order.
    pub codepoints: Vec<&'a str>,
    /// Display name as written in the registry, before normalization.
    pub name: &'a str,
}

/// Parse a single (already trimmed) registry line.
///
/// Returns `None` for blank lines, comments, and lines that do not follow the
/// `codepoints ; status # preview version name` shape. Rejection is expected
/// filtering, not an error.
pub fn parse_line(line: &str) -> Option<RegistryLine<'_>> {
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    if !line.contains(';') || !line.contains('#') {
        return None;
    }

    let (codepoints_part, rest) = line.split_once(';')?;

    // A '#' before the ';' does not start the comment field.
    let (_, comment_part) = rest.split_once('#')?;
    let name = extract_name(comment_part.trim())?;

    let codepoints: Vec<&str> = codepoints_part.split_whitespace().collect();
    if codepoints.is_empty() {
        return None;
    }

    Some(RegistryLine { codepoints, name })
}

/// Extract the name from a comment of the form `preview version name...`.
fn extract_name(comment: &str) -> Option<&str> {
    comment
        .splitn(3, char::is_whitespace)
        .nth(2)
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_codepoint() {
        let parsed = parse_line("1F600 ; fully-qualified # 😀 E1.0 grinning face").unwrap();
        assert_eq!(parsed.codepoints, vec!["1F600"]);
        assert_eq!(parsed.name, "grinning face");
    }

    #[test]
    fn test_parse_sequence() {
        let parsed =
            parse_line("1F1E6 1F1F7                                ; fully-qualified     # 🇦🇷 E2.0 flag: Argentina")
                .unwrap();
        assert_eq!(parsed.codepoints, vec!["1F1E6", "1F1F7"]);
        assert_eq!(parsed.name, "flag: Argentina");
    }

    #[test]
    fn test_name_keeps_internal_spaces() {
        let parsed =
            parse_line("1F3F3 FE0F 200D 1F308 ; fully-qualified # 🏳️‍🌈 E4.0 rainbow flag").unwrap();
        assert_eq!(parsed.codepoints.len(), 4);
        assert_eq!(parsed.name, "rainbow flag");
    }

    #[test]
    fn test_reject_blank_and_comment() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("# group: Smileys & Emotion"), None);
        assert_eq!(parse_line("#EOF"), None);
    }

    #[test]
    fn test_reject_missing_separators() {
        assert_eq!(parse_line("1F600 fully-qualified # 😀 E1.0 grinning face"), None);
        assert_eq!(parse_line("1F600 ; fully-qualified"), None);
    }

    #[test]
    fn test_reject_hash_only_before_semicolon() {
        assert_eq!(parse_line("1F600 # x ; fully-qualified"), None);
    }

    #[test]
    fn test_reject_missing_name() {
        assert_eq!(parse_line("1F600 ; fully-qualified # 😀 E1.0"), None);
        assert_eq!(parse_line("1F600 ; fully-qualified # 😀"), None);
        assert_eq!(parse_line("1F600 ; fully-qualified #"), None);
    }

    #[test]
    fn test_reject_empty_codepoint_field() {
        assert_eq!(parse_line(" ; fully-qualified # 😀 E1.0 grinning face"), None);
    }

    #[test]
    fn test_tokens_are_not_validated() {
        // Hex conversion is left to the caller.
        let parsed = parse_line("XYZ ; fully-qualified # ? E1.0 bogus").unwrap();
        assert_eq!(parsed.codepoints, vec!["XYZ"]);
    }
}
