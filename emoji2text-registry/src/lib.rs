//! Unicode emoji registry parsing for emoji2text.
//!
//! This crate provides:
//! - Line parsing for the `emoji-test.txt` registry format
//! - Normalization of emoji display names into the `[a-z0-9#()*_]` alphabet
//! - The fixed table of special codepoints (joiner, regional indicators)
//! - An explicit build step that merges everything into immutable tables
//!
//! # Architecture
//!
//! `EmojiTables::build` is called once at startup. It parses the registry
//! into single-codepoint mappings and composition sequences, builds the
//! special table, and folds both into the combined table with
//! [`merge_tables`]. The result is passed by reference to the font assembly
//! step; nothing here holds global state.

pub mod error;
pub mod line;
pub mod normalize;
pub mod registry;
pub mod special;
pub mod tables;
pub mod unicode;

// Re-export main types for convenience
pub use error::RegistryError;
pub use line::{RegistryLine, parse_line};
pub use normalize::normalize_name;
pub use registry::{EmojiRegistry, parse_emoji_test};
pub use special::special_mappings;
pub use tables::{Codepoint, CodepointNames, CompositionSequence, EmojiTables, merge_tables};
