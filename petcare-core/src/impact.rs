//! Reduced projection of an analysis for the product-lookup preview.

use ingredient_knowledge::{IngredientCategory, Priority, RiskLevel};
use serde::{Deserialize, Serialize};

use crate::analyzer::AnalysisResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactIngredient {
    pub display_name: String,
    pub category: IngredientCategory,
    pub risk_level: RiskLevel,
    pub effect: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactSupplement {
    pub name: String,
    pub reason: String,
    pub priority: Priority,
}

/// What a candidate product would contribute, without provenance or
/// ordering guarantees beyond those of [`AnalysisResult::matched`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactSummary {
    pub matched: Vec<ImpactIngredient>,
    pub toxic_count: usize,
    pub warning_count: usize,
    pub caution_count: usize,
    pub safe_count: usize,
    pub supplements: Vec<ImpactSupplement>,
}

impl From<&AnalysisResult<'_>> for ImpactSummary {
    fn from(result: &AnalysisResult<'_>) -> Self {
        Self {
            matched: result
                .matched
                .iter()
                .map(|m| ImpactIngredient {
                    display_name: m.definition.display_name.clone(),
                    category: m.definition.category,
                    risk_level: m.definition.risk_level,
                    effect: m.definition.effect.clone(),
                    tip: m.definition.tip.clone(),
                })
                .collect(),
            toxic_count: result.stats.toxic_count,
            warning_count: result.stats.warning_count,
            caution_count: result.stats.caution_count,
            safe_count: result.stats.safe_count,
            supplements: result
                .supplements
                .iter()
                .map(|rule| ImpactSupplement {
                    name: rule.name.clone(),
                    reason: rule.reason.clone(),
                    priority: rule.priority,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze_ingredients;
    use crate::types::ProductInput;
    use serde_json::json;

    #[test]
    fn test_projects_matches_and_supplements() {
        let product = ProductInput {
            id: "__preview__".to_string(),
            name: "試吃包".to_string(),
            product_type: "snack".to_string(),
            ingredient_json: Some(json!({ "ingredients": ["木糖醇", "雞肉"] }).to_string()),
            ..Default::default()
        };
        let result = analyze_ingredients(&[product], &["tear"], "犬");
        let impact = ImpactSummary::from(&result);

        let names: Vec<&str> = impact.matched.iter().map(|m| m.display_name.as_str()).collect();
        assert_eq!(names, vec!["木糖醇", "雞肉"]);
        assert_eq!(impact.toxic_count, 1);
        assert_eq!(impact.caution_count, 1);
        assert_eq!(impact.matched[0].category, IngredientCategory::Harmful);

        let supplements: Vec<&str> = impact.supplements.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            supplements,
            vec!["Omega-3 魚油", "乳鐵蛋白", "牛磺酸（貓咪必需）"]
        );
    }
}
