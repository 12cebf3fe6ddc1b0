//! Default value functions for configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on
//! `Config` and `FontMetadataConfig` fields.

use std::path::PathBuf;

pub fn emoji_test_file() -> PathBuf {
    PathBuf::from("data").join("emoji-test.txt")
}

pub fn source_font() -> PathBuf {
    PathBuf::from("source-fonts").join("SourceCodePro-Regular.otf")
}

pub fn output_dir() -> PathBuf {
    PathBuf::from("fonts")
}

pub fn font_name() -> String {
    "Emoji2Text".to_string()
}

pub fn font_version() -> String {
    "1.0".to_string()
}

pub fn font_weight() -> String {
    "Regular".to_string()
}

pub fn copyright() -> String {
    "© 2025 yukidaruma. All rights reserved, with Reserved Font Name 'Emoji2Text'.".to_string()
}

pub fn license() -> String {
    "SIL Open Font License".to_string()
}

pub fn license_url() -> String {
    "http://scripts.sil.org/OFL".to_string()
}

pub fn manufacturer() -> String {
    "Yuki.games".to_string()
}

pub fn vendor_url() -> String {
    "https://yuki.games".to_string()
}
