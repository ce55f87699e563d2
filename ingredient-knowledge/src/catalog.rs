//! Catalog loading and validation.
//!
//! The curated catalog lives in `data/catalog.json`, grouped into named
//! sections. Sections are flattened in file order, so the JSON layout is also
//! the evaluation order.

use serde::Deserialize;
use std::sync::LazyLock;

use crate::error::KnowledgeError;
use crate::types::{IngredientDefinition, SupplementRule};

// =============================================================================
// Data structures
// =============================================================================

/// Catalog file format.
#[derive(Deserialize)]
struct CatalogFile {
    sections: Vec<CatalogSection>,
    #[serde(default)]
    supplement_rules: Vec<SupplementRule>,
}

/// A named group of ingredient definitions.
#[derive(Deserialize)]
struct CatalogSection {
    name: String,
    ingredients: Vec<IngredientDefinition>,
}

/// Immutable, ordered knowledge base.
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeBase {
    ingredients: Vec<IngredientDefinition>,
    supplement_rules: Vec<SupplementRule>,
    sections: Vec<(String, usize)>,
}

// =============================================================================
// Data loading
// =============================================================================

static CATALOG_JSON: &str = include_str!("data/catalog.json");

static BUILTIN: LazyLock<KnowledgeBase> = LazyLock::new(|| {
    KnowledgeBase::from_json(CATALOG_JSON)
        .unwrap_or_else(|e| panic!("embedded catalog.json is invalid: {e}"))
});

impl KnowledgeBase {
    /// The curated catalog shipped with this crate.
    pub fn builtin() -> &'static KnowledgeBase {
        &BUILTIN
    }

    /// Parse and validate a catalog document.
    pub fn from_json(json: &str) -> Result<Self, KnowledgeError> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let mut ingredients = Vec::new();
        let mut sections = Vec::with_capacity(file.sections.len());
        for section in file.sections {
            sections.push((section.name, section.ingredients.len()));
            ingredients.extend(section.ingredients);
        }

        Self::new(ingredients, file.supplement_rules, sections)
    }

    /// Build a knowledge base from already-ordered tables.
    pub fn from_parts(
        ingredients: Vec<IngredientDefinition>,
        supplement_rules: Vec<SupplementRule>,
    ) -> Result<Self, KnowledgeError> {
        let count = ingredients.len();
        Self::new(ingredients, supplement_rules, vec![("all".to_string(), count)])
    }

    fn new(
        ingredients: Vec<IngredientDefinition>,
        supplement_rules: Vec<SupplementRule>,
        sections: Vec<(String, usize)>,
    ) -> Result<Self, KnowledgeError> {
        for (index, definition) in ingredients.iter().enumerate() {
            if definition.display_name.trim().is_empty() {
                return Err(KnowledgeError::EmptyDisplayName { index });
            }
            if definition.patterns.iter().all(|p| p.trim().is_empty()) {
                return Err(KnowledgeError::NoPatterns(definition.display_name.clone()));
            }
        }

        for (index, rule) in supplement_rules.iter().enumerate() {
            if rule.name.trim().is_empty() {
                return Err(KnowledgeError::EmptyRuleName { index });
            }
            if rule.missing_patterns.iter().all(|p| p.trim().is_empty()) {
                return Err(KnowledgeError::NoMissingPatterns(rule.name.clone()));
            }
        }

        Ok(Self {
            ingredients,
            supplement_rules,
            sections,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Ingredient definitions in evaluation order.
    pub fn ingredients(&self) -> &[IngredientDefinition] {
        &self.ingredients
    }

    /// Supplement rules in catalog order.
    pub fn supplement_rules(&self) -> &[SupplementRule] {
        &self.supplement_rules
    }

    /// Section names paired with the definitions they contain, in order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &[IngredientDefinition])> {
        let mut start = 0;
        self.sections.iter().map(move |(name, len)| {
            let slice = &self.ingredients[start..start + len];
            start += len;
            (name.as_str(), slice)
        })
    }
}
