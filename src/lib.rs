//! emoji2text: generate a font that renders every emoji as its name.
//!
//! The binary wires the workspace crates together:
//! - `emoji2text-registry` parses `emoji-test.txt` into name tables
//! - `emoji2text-fonts` assembles the glyph plan from a source typeface
//! - `emoji2text-config` supplies paths and font metadata

pub mod app;
pub mod cli;
pub mod debug;
