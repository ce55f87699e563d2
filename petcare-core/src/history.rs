//! Selection of analysis inputs from a pet's logged history.
//!
//! Only recent products and symptoms matter: products the pet used within
//! the product window (most recent first, each once) and symptom types logged
//! within the symptom window, plus the problems declared on the pet profile.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::AnalysisConfig;
use crate::error::HistoryError;
use crate::types::ProductInput;

/// One logged use of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductUsage {
    pub product: ProductInput,
    pub date: DateTime<Utc>,
}

/// One logged symptom observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomEntry {
    pub symptom_type: String,
    #[serde(default)]
    pub severity: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PetHistory {
    #[serde(default)]
    pub species: String,
    /// Problems declared on the pet profile, as symptom tags.
    #[serde(default)]
    pub main_problems: Vec<String>,
    #[serde(default)]
    pub usages: Vec<ProductUsage>,
    #[serde(default)]
    pub symptoms: Vec<SymptomEntry>,
}

/// Everything [`crate::Analyzer::analyze`] needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInputs {
    pub products: Vec<ProductInput>,
    pub symptom_tags: Vec<String>,
    pub species: String,
}

/// Decode a stored JSON array of problem tags. Anything else yields nothing.
pub fn parse_main_problems(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

/// Pick the products, symptom tags and species to analyze as of `now`.
pub fn collect_inputs(
    history: &PetHistory,
    now: DateTime<Utc>,
    config: &AnalysisConfig,
) -> Result<AnalysisInputs, HistoryError> {
    let product_cutoff = cutoff(now, config.product_window_days);
    let mut recent: Vec<&ProductUsage> = history
        .usages
        .iter()
        .filter(|usage| usage.date >= product_cutoff)
        .collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));

    let mut seen = HashSet::new();
    let products: Vec<ProductInput> = recent
        .into_iter()
        .filter(|usage| seen.insert(usage.product.id.as_str()))
        .map(|usage| usage.product.clone())
        .collect();

    if products.is_empty() {
        return Err(HistoryError::NoRecentProducts {
            window_days: config.product_window_days,
        });
    }

    let symptom_cutoff = cutoff(now, config.symptom_window_days);
    let mut symptom_tags: Vec<String> = Vec::new();
    let recent_symptoms = history
        .symptoms
        .iter()
        .filter(|entry| entry.created_at >= symptom_cutoff)
        .map(|entry| &entry.symptom_type);
    for tag in recent_symptoms.chain(&history.main_problems) {
        if !symptom_tags.contains(tag) {
            symptom_tags.push(tag.clone());
        }
    }

    let species = if history.species.trim().is_empty() {
        config.default_species.clone()
    } else {
        history.species.clone()
    };

    tracing::debug!(
        products = products.len(),
        symptoms = symptom_tags.len(),
        %species,
        "collected analysis inputs"
    );

    Ok(AnalysisInputs {
        products,
        symptom_tags,
        species,
    })
}

/// Start of a window of `days` ending at `now`. Windows reaching past the
/// representable range cover all time.
fn cutoff(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    Duration::try_days(days)
        .and_then(|window| now.checked_sub_signed(window))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
