//! Configuration types shared by the generator and the CLI.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Log level for diagnostic output.
///
/// The `--log-level` CLI flag and the `RUST_LOG` environment variable take
/// precedence over the configured value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No diagnostics
    Off,
    /// Errors only
    Error,
    /// Warnings and errors
    #[default]
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Most verbose
    Trace,
}

impl LogLevel {
    /// Lowercase name as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// All available levels
    pub fn all() -> &'static [LogLevel] {
        &[
            LogLevel::Off,
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ]
    }

    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        LogLevel::all()
            .iter()
            .copied()
            .find(|level| level.name() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown log level '{s}' (expected one of: off, error, warn, info, debug, trace)"
                )
            })
    }
}

/// Metadata written into the generated font's naming fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontMetadataConfig {
    /// Family and PostScript name; also the base name of output files
    #[serde(default = "crate::defaults::font_name")]
    pub name: String,

    #[serde(default = "crate::defaults::font_version")]
    pub version: String,

    #[serde(default = "crate::defaults::font_weight")]
    pub weight: String,

    #[serde(default = "crate::defaults::copyright")]
    pub copyright: String,

    #[serde(default = "crate::defaults::license")]
    pub license: String,

    #[serde(default = "crate::defaults::license_url")]
    pub license_url: String,

    #[serde(default = "crate::defaults::manufacturer")]
    pub manufacturer: String,

    #[serde(default = "crate::defaults::vendor_url")]
    pub vendor_url: String,
}

impl Default for FontMetadataConfig {
    fn default() -> Self {
        Self {
            name: crate::defaults::font_name(),
            version: crate::defaults::font_version(),
            weight: crate::defaults::font_weight(),
            copyright: crate::defaults::copyright(),
            license: crate::defaults::license(),
            license_url: crate::defaults::license_url(),
            manufacturer: crate::defaults::manufacturer(),
            vendor_url: crate::defaults::vendor_url(),
        }
    }
}

impl FontMetadataConfig {
    /// Full name, e.g. `Emoji2Text Regular`
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.weight)
    }
}
