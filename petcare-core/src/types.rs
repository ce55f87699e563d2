use serde::{Deserialize, Serialize};

/// A product record handed to the engine for one analysis call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(rename = "type", default)]
    pub product_type: String,
    /// Raw label text, used only when no structured lists are present.
    #[serde(default)]
    pub ingredient_text: Option<String>,
    /// Serialized object with `ingredients`, `protein_sources`, `additives`
    /// and `functional_ingredients` string arrays.
    #[serde(default)]
    pub ingredient_json: Option<String>,
}

impl ProductInput {
    /// "brand name", or just the name when there is no brand.
    pub fn display_name(&self) -> String {
        match self.brand.as_deref() {
            Some(brand) if !brand.is_empty() => format!("{brand} {}", self.name),
            _ => self.name.clone(),
        }
    }
}

/// Per-product line in the analysis report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub brand: Option<String>,
    #[serde(rename = "type")]
    pub product_type: String,
    /// Number of text fragments extracted for matching.
    pub ingredient_count: usize,
}

/// Counts per risk tier.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisStats {
    pub total_ingredients: usize,
    pub toxic_count: usize,
    pub warning_count: usize,
    pub caution_count: usize,
    pub safe_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(brand: Option<&str>) -> ProductInput {
        ProductInput {
            id: "p1".to_string(),
            name: "鮭魚乾糧".to_string(),
            brand: brand.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_display_name_with_brand() {
        assert_eq!(product(Some("Acme")).display_name(), "Acme 鮭魚乾糧");
    }

    #[test]
    fn test_display_name_without_brand() {
        assert_eq!(product(None).display_name(), "鮭魚乾糧");
        assert_eq!(product(Some("")).display_name(), "鮭魚乾糧");
    }

    #[test]
    fn test_deserialize_type_field() {
        let product: ProductInput = serde_json::from_str(
            r#"{"id": "a", "name": "罐頭", "type": "can", "ingredient_json": null}"#,
        )
        .unwrap();
        assert_eq!(product.product_type, "can");
        assert_eq!(product.brand, None);
        assert_eq!(product.ingredient_json, None);
    }
}
