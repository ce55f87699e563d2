use serde::{Deserialize, Serialize};

/// Nutritional role of an ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    Protein,
    Carb,
    Fat,
    Fiber,
    Vitamin,
    Mineral,
    Probiotic,
    Functional,
    Additive,
    Preservative,
    Harmful,
    Other,
}

impl IngredientCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IngredientCategory::Protein => "protein",
            IngredientCategory::Carb => "carb",
            IngredientCategory::Fat => "fat",
            IngredientCategory::Fiber => "fiber",
            IngredientCategory::Vitamin => "vitamin",
            IngredientCategory::Mineral => "mineral",
            IngredientCategory::Probiotic => "probiotic",
            IngredientCategory::Functional => "functional",
            IngredientCategory::Additive => "additive",
            IngredientCategory::Preservative => "preservative",
            IngredientCategory::Harmful => "harmful",
            IngredientCategory::Other => "other",
        }
    }
}

/// Severity tier, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Safe,
    Caution,
    Warning,
    Toxic,
}

impl RiskLevel {
    /// Tiers in report order, most severe first.
    pub const REPORT_ORDER: &'static [RiskLevel] = &[
        RiskLevel::Toxic,
        RiskLevel::Warning,
        RiskLevel::Caution,
        RiskLevel::Safe,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Caution => "caution",
            RiskLevel::Warning => "warning",
            RiskLevel::Toxic => "toxic",
        }
    }
}

/// One knowledge-base entry: an ingredient (or ingredient family) and the
/// aliases it is recognised by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientDefinition {
    pub display_name: String,
    /// Aliases tried in order; the first one found wins.
    pub patterns: Vec<String>,
    pub category: IngredientCategory,
    pub risk_level: RiskLevel,
    pub effect: String,
    /// Symptom tags this ingredient is clinically associated with.
    #[serde(default)]
    pub related_symptoms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

/// Output ordering of supplement recommendations. `High` sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// Extra gate on a supplement rule for a specific species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpeciesGuard {
    /// For `species`, the rule only applies when `symptom` was reported,
    /// regardless of which other trigger tags matched.
    RequireSymptom { species: String, symptom: String },
}

impl SpeciesGuard {
    /// Whether a rule carrying this guard may fire for the given pet.
    pub fn allows(&self, species: &str, symptoms: &[&str]) -> bool {
        match self {
            SpeciesGuard::RequireSymptom {
                species: guarded,
                symptom,
            } => species != guarded || symptoms.contains(&symptom.as_str()),
        }
    }
}

/// A conditional supplement recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplementRule {
    pub name: String,
    /// Empty means the rule is not symptom-gated.
    #[serde(default)]
    pub symptom_triggers: Vec<String>,
    /// Presence of any of these in the diet suppresses the rule.
    pub missing_patterns: Vec<String>,
    pub reason: String,
    pub priority: Priority,
    pub examples: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species_guard: Option<SpeciesGuard>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_joint_guard() -> SpeciesGuard {
        SpeciesGuard::RequireSymptom {
            species: "貓".to_string(),
            symptom: "joint".to_string(),
        }
    }

    #[test]
    fn test_guard_ignores_other_species() {
        let guard = cat_joint_guard();
        assert!(guard.allows("犬", &[]));
        assert!(guard.allows("兔", &["skin"]));
    }

    #[test]
    fn test_guard_requires_symptom_for_species() {
        let guard = cat_joint_guard();
        assert!(!guard.allows("貓", &["skin", "tear"]));
        assert!(guard.allows("貓", &["skin", "joint"]));
    }

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::Toxic > RiskLevel::Warning);
        assert!(RiskLevel::Warning > RiskLevel::Caution);
        assert!(RiskLevel::Caution > RiskLevel::Safe);
    }

    #[test]
    fn test_priority_sorts_high_first() {
        let mut priorities = vec![Priority::Low, Priority::High, Priority::Medium];
        priorities.sort();
        assert_eq!(priorities, vec![Priority::High, Priority::Medium, Priority::Low]);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&RiskLevel::Toxic).unwrap(), "\"toxic\"");
        assert_eq!(serde_json::to_string(&Priority::Medium).unwrap(), "\"medium\"");
        let guard: SpeciesGuard = serde_json::from_str(
            r#"{"kind":"require_symptom","species":"貓","symptom":"joint"}"#,
        )
        .unwrap();
        assert_eq!(guard, cat_joint_guard());
    }
}
