//! Pattern matching of knowledge-base entries against ingredient fragments.
//!
//! A definition matches when any of its patterns, normalized, is a substring
//! of the normalized haystack. Patterns are tried in listed order and the
//! first hit wins.

use ingredient_knowledge::IngredientDefinition;

use crate::normalize::normalize;

/// Normalized view over one set of fragments.
///
/// The combined haystack is built by joining the fragments with a space and
/// normalizing, so it equals the fragments' normalized forms concatenated.
/// A pattern can therefore span a fragment boundary.
#[derive(Debug, Clone)]
pub struct Haystack<'a> {
    fragments: &'a [String],
    normalized: Vec<String>,
    combined: String,
}

/// A successful match of one definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientMatch<'kb> {
    /// The pattern that hit, as written in the catalog.
    pub pattern: &'kb str,
    /// First fragment containing the pattern, or the pattern itself when the
    /// hit only exists across a fragment boundary.
    pub raw_text: String,
}

impl<'a> Haystack<'a> {
    pub fn new(fragments: &'a [String]) -> Self {
        Self {
            fragments,
            normalized: fragments.iter().map(|f| normalize(f)).collect(),
            combined: normalize(&fragments.join(" ")),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.combined.is_empty()
    }

    /// Whether the normalized pattern occurs anywhere. Patterns that
    /// normalize to nothing never match.
    pub fn contains(&self, pattern: &str) -> bool {
        let pattern = normalize(pattern);
        !pattern.is_empty() && self.combined.contains(&pattern)
    }

    /// Test a definition's patterns in order.
    pub fn find<'kb>(&self, definition: &'kb IngredientDefinition) -> Option<IngredientMatch<'kb>> {
        definition.patterns.iter().find_map(|pattern| {
            let needle = normalize(pattern);
            if needle.is_empty() || !self.combined.contains(&needle) {
                return None;
            }

            let raw_text = self
                .normalized
                .iter()
                .position(|fragment| fragment.contains(&needle))
                .map(|i| self.fragments[i].clone())
                .unwrap_or_else(|| pattern.clone());

            Some(IngredientMatch {
                pattern: pattern.as_str(),
                raw_text,
            })
        })
    }
}

/// Match a single definition against a fragment list.
pub fn match_definition<'kb>(
    definition: &'kb IngredientDefinition,
    fragments: &[String],
) -> Option<IngredientMatch<'kb>> {
    Haystack::new(fragments).find(definition)
}
