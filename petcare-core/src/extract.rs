//! Ingredient fragment extraction from product records.
//!
//! Structured lists always win over raw label text. Label text often carries
//! negations ("不含玉米", "no corn") that a substring matcher would read as a
//! positive detection, so it is only consulted when a product has no
//! structured data at all.

use serde_json::Value;

use crate::types::ProductInput;

/// Keys of the structured ingredient object, in concatenation order.
pub const STRUCTURED_FIELDS: &[&str] = &[
    "ingredients",
    "protein_sources",
    "additives",
    "functional_ingredients",
];

/// Extract the text fragments the matcher runs against.
pub fn extract_fragments(product: &ProductInput) -> Vec<String> {
    let fragments = product
        .ingredient_json
        .as_deref()
        .map(|json| structured_fragments(&product.id, json))
        .unwrap_or_default();

    if !fragments.is_empty() {
        if product.ingredient_text.is_some() {
            tracing::debug!(
                product_id = %product.id,
                "structured ingredients present, ignoring label text"
            );
        }
        return fragments;
    }

    match product.ingredient_text.as_deref() {
        Some(text) if !text.is_empty() => vec![text.to_string()],
        _ => Vec::new(),
    }
}

/// Concatenate the structured arrays. Malformed JSON, missing keys, and
/// non-array values all contribute nothing.
fn structured_fragments(product_id: &str, json: &str) -> Vec<String> {
    let value: Value = match serde_json::from_str(json) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(product_id, "malformed ingredient JSON: {}", e);
            return Vec::new();
        }
    };

    STRUCTURED_FIELDS
        .iter()
        .filter_map(|field| value.get(field).and_then(Value::as_array))
        .flatten()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}
