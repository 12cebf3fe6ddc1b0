//! Configuration system for the emoji2text font generator.
//!
//! This crate provides configuration loading and default values for the
//! generator. It includes:
//!
//! - Input/output path settings (registry file, source font, output directory)
//! - Font metadata written into the generated font
//! - Log level selection shared with the CLI

pub mod config;
pub mod defaults;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;
pub use types::{FontMetadataConfig, LogLevel};
