//! Guaranteed-analysis values carried in a product's ingredient JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::ProductInput;

/// One labelled nutrient value, e.g. crude protein 32 %.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionalFact {
    pub name: String,
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductNutrition {
    pub product_id: String,
    pub product_name: String,
    pub facts: Vec<NutritionalFact>,
}

/// Collect `nutritional_facts` per product, skipping products without any.
pub fn nutrition_by_product(products: &[ProductInput]) -> Vec<ProductNutrition> {
    products
        .iter()
        .filter_map(|product| {
            let facts = product
                .ingredient_json
                .as_deref()
                .map(parse_facts)
                .unwrap_or_default();
            if facts.is_empty() {
                return None;
            }
            Some(ProductNutrition {
                product_id: product.id.clone(),
                product_name: product.display_name(),
                facts,
            })
        })
        .collect()
}

fn parse_facts(json: &str) -> Vec<NutritionalFact> {
    let Ok(value) = serde_json::from_str::<Value>(json) else {
        return Vec::new();
    };
    let Some(entries) = value.get("nutritional_facts").and_then(Value::as_array) else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| NutritionalFact::deserialize(entry).ok())
        .collect()
}
