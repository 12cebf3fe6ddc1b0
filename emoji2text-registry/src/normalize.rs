//! Emoji display name normalization.
//!
//! Names are rendered with glyphs copied from the source typeface, so the
//! output alphabet is limited to `[a-z0-9#()*_]`. Anything else degrades to a
//! single `_` separator.

use std::sync::LazyLock;

use regex::Regex;

/// Runs of characters that have no glyph in the generated font.
static UNSUPPORTED_RUN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-z0-9#()*_]+").expect("UNSUPPORTED_RUN_RE is a valid static regex pattern")
});

static UNDERSCORE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"_+").expect("UNDERSCORE_RUN_RE is a valid static regex pattern")
});

/// Prefixes whose suffix names the flag or keycap itself.
///
/// Keycaps share the `flag_` prefix in generated names.
const FLAG_PREFIXES: &[&str] = &["flag:", "keycap:"];

/// Normalize an emoji display name into a glyph-name-safe identifier.
///
/// This never fails. Pathological input can produce a degenerate result such
/// as `"_"`.
///
/// # Examples
///
/// ```
/// use emoji2text_registry::normalize_name;
///
/// assert_eq!(normalize_name("grinning face"), "grinning_face");
/// assert_eq!(normalize_name("flag: Japan"), "flag_japan");
/// assert_eq!(normalize_name("keycap: 5"), "flag_5");
/// assert_eq!(normalize_name("Congo - Kinshasa"), "congo_kinshasa");
/// ```
pub fn normalize_name(raw: &str) -> String {
    let name = strip_qualifier(raw).to_lowercase().replace('ñ', "n");
    let name = UNSUPPORTED_RUN_RE.replace_all(&name, "_");
    UNDERSCORE_RUN_RE.replace_all(&name, "_").into_owned()
}

/// Resolve the part of a name before or after its first colon.
///
/// `flag: Japan` becomes `flag_japan`; `woman: beard` becomes `woman`.
fn strip_qualifier(raw: &str) -> std::borrow::Cow<'_, str> {
    let Some((head, suffix)) = raw.split_once(':') else {
        return raw.into();
    };

    if FLAG_PREFIXES.iter().any(|prefix| raw.starts_with(prefix)) {
        format!("flag_{}", suffix.trim().to_lowercase()).into()
    } else {
        head.trim().into()
    }
}
