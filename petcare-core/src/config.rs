//! Analysis configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Default product-usage recency window in days.
pub const DEFAULT_PRODUCT_WINDOW_DAYS: i64 = 60;

/// Default symptom recency window in days.
pub const DEFAULT_SYMPTOM_WINDOW_DAYS: i64 = 30;

/// Species assumed when a pet record has none.
pub const DEFAULT_SPECIES: &str = "犬";

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Products used within this many days are analyzed.
    pub product_window_days: i64,
    /// Symptoms logged within this many days gate supplement rules.
    pub symptom_window_days: i64,
    pub default_species: String,
    /// Alternative catalog file; the embedded catalog is used when `None`.
    pub knowledge_path: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            product_window_days: DEFAULT_PRODUCT_WINDOW_DAYS,
            symptom_window_days: DEFAULT_SYMPTOM_WINDOW_DAYS,
            default_species: DEFAULT_SPECIES.to_string(),
            knowledge_path: None,
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `PETCARE_PRODUCT_WINDOW_DAYS`: product window (default: 60)
    /// - `PETCARE_SYMPTOM_WINDOW_DAYS`: symptom window (default: 30)
    /// - `PETCARE_DEFAULT_SPECIES`: fallback species (default: "犬")
    /// - `PETCARE_KNOWLEDGE_PATH`: catalog JSON overriding the embedded one
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let days = |key: &str, default: i64| {
            lookup(key)
                .and_then(|v| v.trim().parse::<i64>().ok())
                .filter(|d| *d >= 0)
                .unwrap_or(default)
        };

        let product_window_days = days("PETCARE_PRODUCT_WINDOW_DAYS", DEFAULT_PRODUCT_WINDOW_DAYS);
        let symptom_window_days = days("PETCARE_SYMPTOM_WINDOW_DAYS", DEFAULT_SYMPTOM_WINDOW_DAYS);

        let default_species = lookup("PETCARE_DEFAULT_SPECIES")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SPECIES.to_string());

        let knowledge_path = lookup("PETCARE_KNOWLEDGE_PATH")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            product_window_days,
            symptom_window_days,
            default_species,
            knowledge_path,
        }
    }
}
