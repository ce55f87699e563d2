//! Supplement recommendations.
//!
//! A rule fires when its symptom gate passes, its species guard (if any)
//! allows it, and none of its `missing_patterns` occur anywhere in the
//! combined diet corpus. Presence in any single product is enough to
//! suppress a rule.

use ingredient_knowledge::SupplementRule;

use crate::matcher::Haystack;

/// Why a rule did not fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    NoTriggeringSymptom,
    SpeciesGuard,
    AlreadyPresent,
}

/// Evaluate one rule against the pet and the combined corpus.
pub fn evaluate_rule(
    rule: &SupplementRule,
    corpus: &Haystack<'_>,
    symptoms: &[&str],
    species: &str,
) -> Result<(), Skip> {
    let gated_in = rule.symptom_triggers.is_empty()
        || rule
            .symptom_triggers
            .iter()
            .any(|trigger| symptoms.contains(&trigger.as_str()));
    if !gated_in {
        return Err(Skip::NoTriggeringSymptom);
    }

    if let Some(guard) = &rule.species_guard {
        if !guard.allows(species, symptoms) {
            return Err(Skip::SpeciesGuard);
        }
    }

    if rule.missing_patterns.iter().any(|p| corpus.contains(p)) {
        return Err(Skip::AlreadyPresent);
    }

    Ok(())
}

/// Active recommendations, high priority first. Catalog order is kept within
/// a priority.
pub fn recommend<'kb>(
    rules: &'kb [SupplementRule],
    corpus: &Haystack<'_>,
    symptoms: &[&str],
    species: &str,
) -> Vec<&'kb SupplementRule> {
    let mut active: Vec<&SupplementRule> = rules
        .iter()
        .filter(|rule| match evaluate_rule(rule, corpus, symptoms, species) {
            Ok(()) => true,
            Err(skip) => {
                tracing::trace!(rule = %rule.name, ?skip, "supplement rule skipped");
                false
            }
        })
        .collect();

    // sort_by_key is stable
    active.sort_by_key(|rule| rule.priority);
    active
}
