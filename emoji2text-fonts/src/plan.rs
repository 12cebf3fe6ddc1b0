//! In-memory glyph plan.
//!
//! A `FontPlan` is the font under construction: the ordered glyph list, the
//! cmap, GSUB lookups and naming metadata. Glyph outlines are either copied
//! from the source font by glyph id or composed from references to other
//! glyphs in the plan.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::error::FontError;

/// Reference to another glyph of the plan, offset horizontally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component {
    /// Name of the referenced glyph.
    pub glyph: String,
    pub x_offset: i32,
    pub y_offset: i32,
}

impl Component {
    pub fn at(glyph: impl Into<String>, x_offset: i32) -> Self {
        Self {
            glyph: glyph.into(),
            x_offset,
            y_offset: 0,
        }
    }
}

/// Where a glyph's outline comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outline {
    /// No outline (blank glyph)
    #[default]
    Empty,
    /// Copied from the source font
    Source { glyph_id: u16 },
    /// Built from references to other glyphs
    Composite { components: Vec<Component> },
}

/// One glyph of the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Glyph {
    pub name: String,
    /// Encoded codepoint; `None` for glyphs only reachable through GSUB.
    pub codepoint: Option<u32>,
    /// Advance width in font units.
    pub advance_width: u32,
    pub outline: Outline,
}

impl Glyph {
    fn new(name: impl Into<String>, codepoint: Option<u32>) -> Self {
        Self {
            name: name.into(),
            codepoint,
            advance_width: 0,
            outline: Outline::Empty,
        }
    }

    /// Remove the outline and reset the advance width.
    pub fn clear(&mut self) {
        self.outline = Outline::Empty;
        self.advance_width = 0;
    }

    /// Append a reference to `glyph` at `x_offset`.
    ///
    /// A copied source outline cannot be mixed with references, so it is
    /// replaced.
    pub fn add_reference(&mut self, glyph: impl Into<String>, x_offset: i32) {
        let component = Component::at(glyph, x_offset);
        match &mut self.outline {
            Outline::Composite { components } => components.push(component),
            _ => {
                self.outline = Outline::Composite {
                    components: vec![component],
                }
            }
        }
    }

    /// References of a composite glyph, empty otherwise.
    pub fn components(&self) -> &[Component] {
        match &self.outline {
            Outline::Composite { components } => components,
            _ => &[],
        }
    }

    /// Whether the glyph draws anything or takes up space.
    pub fn is_worth_outputting(&self) -> bool {
        !matches!(self.outline, Outline::Empty) || self.advance_width != 0
    }
}

/// GSUB lookup type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupKind {
    /// Many glyphs to one (GSUB type 4)
    GsubLigature,
}

/// Script and the language systems a feature is registered for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptLanguages {
    pub script: String,
    pub languages: Vec<String>,
}

impl ScriptLanguages {
    pub fn new(script: &str, languages: &[&str]) -> Self {
        Self {
            script: script.to_string(),
            languages: languages.iter().map(|l| l.to_string()).collect(),
        }
    }
}

/// Replace `components`, in order, with `ligature`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LigatureRule {
    pub components: Vec<String>,
    pub ligature: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subtable {
    pub name: String,
    pub ligatures: Vec<LigatureRule>,
}

/// A GSUB lookup and the feature it is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lookup {
    pub name: String,
    pub kind: LookupKind,
    /// OpenType feature tag, e.g. `ccmp`
    pub feature: String,
    pub scripts: Vec<ScriptLanguages>,
    pub subtables: Vec<Subtable>,
}

/// Naming-table record identifiers set by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SfntNameId {
    UniqueId,
    License,
    LicenseUrl,
    Manufacturer,
    VendorUrl,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SfntName {
    pub language: String,
    pub id: SfntNameId,
    pub value: String,
}

/// Font-wide naming metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct FontInfo {
    pub font_name: String,
    pub family_name: String,
    pub full_name: String,
    pub version: String,
    pub weight: String,
    pub copyright: String,
    pub sfnt_names: Vec<SfntName>,
}

impl FontInfo {
    /// Add or replace a naming record for `language`.
    pub fn append_sfnt_name(&mut self, language: &str, id: SfntNameId, value: impl Into<String>) {
        let value = value.into();
        if let Some(existing) = self
            .sfnt_names
            .iter_mut()
            .find(|n| n.language == language && n.id == id)
        {
            existing.value = value;
        } else {
            self.sfnt_names.push(SfntName {
                language: language.to_string(),
                id,
                value,
            });
        }
    }

    pub fn sfnt_name(&self, id: SfntNameId) -> Option<&str> {
        self.sfnt_names
            .iter()
            .find(|n| n.id == id)
            .map(|n| n.value.as_str())
    }
}

/// The font under construction.
#[derive(Debug, Clone, Serialize)]
pub struct FontPlan {
    pub info: FontInfo,
    pub units_per_em: u16,
    glyphs: Vec<Glyph>,
    /// Codepoint to glyph name
    cmap: BTreeMap<u32, String>,
    lookups: Vec<Lookup>,
    #[serde(skip)]
    by_name: HashMap<String, usize>,
}

impl FontPlan {
    pub fn new(units_per_em: u16) -> Self {
        Self {
            info: FontInfo::default(),
            units_per_em,
            glyphs: Vec::new(),
            cmap: BTreeMap::new(),
            lookups: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Glyphs in glyph-id order.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn cmap(&self) -> &BTreeMap<u32, String> {
        &self.cmap
    }

    pub fn lookups(&self) -> &[Lookup] {
        &self.lookups
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn contains_codepoint(&self, codepoint: u32) -> bool {
        self.cmap.contains_key(&codepoint)
    }

    pub fn glyph(&self, name: &str) -> Option<&Glyph> {
        self.by_name.get(name).map(|&index| &self.glyphs[index])
    }

    pub fn glyph_mut(&mut self, name: &str) -> Option<&mut Glyph> {
        let index = *self.by_name.get(name)?;
        Some(&mut self.glyphs[index])
    }

    pub fn glyph_for_codepoint(&self, codepoint: u32) -> Option<&Glyph> {
        self.cmap.get(&codepoint).and_then(|name| self.glyph(name))
    }

    /// Create an empty glyph, optionally encoded at `codepoint`.
    ///
    /// # Errors
    ///
    /// Fails if the name is taken or the codepoint is already mapped.
    pub fn create_glyph(
        &mut self,
        name: &str,
        codepoint: Option<u32>,
    ) -> Result<&mut Glyph, FontError> {
        if self.by_name.contains_key(name) {
            return Err(FontError::DuplicateGlyph(name.to_string()));
        }
        if let Some(cp) = codepoint
            && let Some(existing) = self.cmap.get(&cp)
        {
            return Err(FontError::DuplicateCodepoint {
                codepoint: cp,
                existing: existing.clone(),
            });
        }

        let index = self.glyphs.len();
        self.glyphs.push(Glyph::new(name, codepoint));
        self.by_name.insert(name.to_string(), index);
        if let Some(cp) = codepoint {
            self.cmap.insert(cp, name.to_string());
        }
        Ok(&mut self.glyphs[index])
    }

    /// Register a lookup with a single empty subtable.
    pub fn add_lookup(
        &mut self,
        name: &str,
        kind: LookupKind,
        feature: &str,
        scripts: Vec<ScriptLanguages>,
        subtable: &str,
    ) -> Result<(), FontError> {
        if self.lookups.iter().any(|l| l.name == name) {
            return Err(FontError::DuplicateLookup(name.to_string()));
        }
        self.lookups.push(Lookup {
            name: name.to_string(),
            kind,
            feature: feature.to_string(),
            scripts,
            subtables: vec![Subtable {
                name: subtable.to_string(),
                ligatures: Vec::new(),
            }],
        });
        Ok(())
    }

    /// Add a ligature rule `components -> ligature` to `subtable`.
    ///
    /// # Errors
    ///
    /// Every glyph named by the rule must already exist.
    pub fn add_ligature(
        &mut self,
        subtable: &str,
        components: Vec<String>,
        ligature: &str,
    ) -> Result<(), FontError> {
        if let Some(missing) = std::iter::once(ligature)
            .chain(components.iter().map(String::as_str))
            .find(|name| !self.by_name.contains_key(*name))
        {
            return Err(FontError::UnknownGlyph(missing.to_string()));
        }

        let target = self
            .lookups
            .iter_mut()
            .flat_map(|lookup| lookup.subtables.iter_mut())
            .find(|s| s.name == subtable)
            .ok_or_else(|| FontError::UnknownSubtable(subtable.to_string()))?;

        target.ligatures.push(LigatureRule {
            components,
            ligature: ligature.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_lookup_glyph() {
        let mut plan = FontPlan::new(1000);
        plan.create_glyph("a", Some('a' as u32)).unwrap().advance_width = 600;

        assert_eq!(plan.len(), 1);
        assert!(plan.contains_codepoint('a' as u32));
        assert_eq!(plan.glyph("a").unwrap().advance_width, 600);
        assert_eq!(plan.glyph_for_codepoint('a' as u32).unwrap().name, "a");
        assert!(plan.glyph("b").is_none());
    }

    #[test]
    fn test_duplicate_glyph_name() {
        let mut plan = FontPlan::new(1000);
        plan.create_glyph("a", None).unwrap();
        assert!(matches!(
            plan.create_glyph("a", None),
            Err(FontError::DuplicateGlyph(_))
        ));
    }

    #[test]
    fn test_duplicate_codepoint() {
        let mut plan = FontPlan::new(1000);
        plan.create_glyph("a", Some(0x61)).unwrap();
        let err = plan.create_glyph("a.alt", Some(0x61)).unwrap_err();
        assert!(matches!(err, FontError::DuplicateCodepoint { codepoint: 0x61, .. }));
    }

    #[test]
    fn test_add_reference_and_clear() {
        let mut glyph = Glyph::new("uni1F600", Some(0x1F600));
        assert!(!glyph.is_worth_outputting());

        glyph.add_reference("a", 0);
        glyph.add_reference("b", 600);
        assert_eq!(glyph.components().len(), 2);
        assert_eq!(glyph.components()[1], Component::at("b", 600));
        assert!(glyph.is_worth_outputting());

        glyph.clear();
        assert!(glyph.components().is_empty());
        assert!(!glyph.is_worth_outputting());
    }

    #[test]
    fn test_reference_replaces_source_outline() {
        let mut glyph = Glyph::new("x", None);
        glyph.outline = Outline::Source { glyph_id: 7 };
        glyph.add_reference("a", 0);
        assert_eq!(glyph.components().len(), 1);
    }

    #[test]
    fn test_width_only_glyph_is_worth_outputting() {
        let mut glyph = Glyph::new("space", Some(0x20));
        glyph.advance_width = 500;
        assert!(glyph.is_worth_outputting());
    }

    #[test]
    fn test_add_ligature() {
        let mut plan = FontPlan::new(1000);
        plan.create_glyph("uni1F1E6", Some(0x1F1E6)).unwrap();
        plan.create_glyph("uni1F1F7", Some(0x1F1F7)).unwrap();
        plan.create_glyph("comp_0000", None).unwrap();
        plan.add_lookup(
            "ccmp_lookup",
            LookupKind::GsubLigature,
            "ccmp",
            vec![ScriptLanguages::new("DFLT", &["dflt"])],
            "ccmp_subtable",
        )
        .unwrap();

        plan.add_ligature(
            "ccmp_subtable",
            vec!["uni1F1E6".to_string(), "uni1F1F7".to_string()],
            "comp_0000",
        )
        .unwrap();

        let rules = &plan.lookups()[0].subtables[0].ligatures;
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].ligature, "comp_0000");
    }

    #[test]
    fn test_add_ligature_errors() {
        let mut plan = FontPlan::new(1000);
        plan.create_glyph("a", None).unwrap();
        plan.create_glyph("lig", None).unwrap();

        let err = plan
            .add_ligature("missing", vec!["a".to_string()], "lig")
            .unwrap_err();
        assert!(matches!(err, FontError::UnknownSubtable(_)));

        plan.add_lookup("l", LookupKind::GsubLigature, "ccmp", Vec::new(), "s")
            .unwrap();
        let err = plan
            .add_ligature("s", vec!["a".to_string(), "zzz".to_string()], "lig")
            .unwrap_err();
        assert!(matches!(err, FontError::UnknownGlyph(name) if name == "zzz"));
    }

    #[test]
    fn test_duplicate_lookup() {
        let mut plan = FontPlan::new(1000);
        plan.add_lookup("l", LookupKind::GsubLigature, "ccmp", Vec::new(), "s")
            .unwrap();
        assert!(matches!(
            plan.add_lookup("l", LookupKind::GsubLigature, "ccmp", Vec::new(), "s2"),
            Err(FontError::DuplicateLookup(_))
        ));
    }

    #[test]
    fn test_sfnt_names_replace_same_record() {
        let mut info = FontInfo::default();
        info.append_sfnt_name("English (US)", SfntNameId::License, "A");
        info.append_sfnt_name("English (US)", SfntNameId::License, "B");
        info.append_sfnt_name("English (US)", SfntNameId::VendorUrl, "https://example.com");
        assert_eq!(info.sfnt_names.len(), 2);
        assert_eq!(info.sfnt_name(SfntNameId::License), Some("B"));
    }
}
