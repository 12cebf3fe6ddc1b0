//! Name tables and the explicit build step that produces them.

use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;

use serde::Serialize;

use crate::error::RegistryError;
use crate::registry::EmojiRegistry;
use crate::special::special_mappings;

/// A single Unicode scalar value.
pub type Codepoint = u32;

/// Codepoint to normalized name, ordered by codepoint.
pub type CodepointNames = BTreeMap<Codepoint, String>;

/// A multi-codepoint emoji (flag, keycap, ZWJ sequence, ...) and its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompositionSequence {
    /// Codepoints in the order they must be matched.
    pub codepoints: Vec<Codepoint>,
    /// Normalized name rendered in place of the sequence.
    pub name: String,
}

impl CompositionSequence {
    pub fn new(codepoints: Vec<Codepoint>, name: impl Into<String>) -> Self {
        Self {
            codepoints,
            name: name.into(),
        }
    }
}

/// Merge name tables in order.
///
/// Later tables take precedence: when a codepoint appears in more than one
/// source, the value from the last source containing it wins.
pub fn merge_tables(sources: &[&CodepointNames]) -> CodepointNames {
    sources.iter().fold(CodepointNames::new(), |mut merged, source| {
        merged.extend(source.iter().map(|(cp, name)| (*cp, name.clone())));
        merged
    })
}

/// Every table the font assembly step needs, built once at startup.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmojiTables {
    /// Standalone emoji from the registry.
    pub emoji: CodepointNames,
    /// Multi-codepoint sequences from the registry, in file order.
    pub sequences: Vec<CompositionSequence>,
    /// Fixed names for the joiner and regional indicators.
    pub special: CodepointNames,
    /// `emoji` with `special` laid over it.
    pub combined: CodepointNames,
}

impl EmojiTables {
    /// Build all tables from the registry file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Io`] if the file cannot be opened and
    /// [`RegistryError::InvalidCodepoint`] if a codepoint token is not hex.
    pub fn build(path: &Path) -> Result<Self, RegistryError> {
        log::info!("Parsing emoji registry: {}", path.display());
        let registry = EmojiRegistry::from_path(path)?;
        Ok(Self::from_registry(registry))
    }

    /// Build all tables from registry text supplied by `reader`.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, RegistryError> {
        let registry = EmojiRegistry::from_reader(reader)?;
        Ok(Self::from_registry(registry))
    }

    /// Combine a parsed registry with the special table.
    pub fn from_registry(registry: EmojiRegistry) -> Self {
        let special = special_mappings();
        let combined = merge_tables(&[&registry.mappings, &special]);

        log::info!(
            "Built emoji tables: {} single, {} sequences, {} special, {} combined",
            registry.mappings.len(),
            registry.sequences.len(),
            special.len(),
            combined.len()
        );

        Self {
            emoji: registry.mappings,
            sequences: registry.sequences,
            special,
            combined,
        }
    }
}
