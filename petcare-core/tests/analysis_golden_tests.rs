//! Golden file tests for the ingredient analysis engine.
//!
//! Each JSON file in `fixtures/analysis/` describes one analysis call and the
//! report it must produce.
//!
//! Test format:
//! ```json
//! {
//!   "description": "...",
//!   "products": [{ "id": "a", "name": "...", "ingredient_lists": { "ingredients": [...] } }],
//!   "symptom_tags": ["tear"],
//!   "species": "犬",
//!   "expected": { "matched": [...], "stats": {...}, "supplements": [...], "ingredient_counts": [...] }
//! }
//! ```
//!
//! `ingredient_lists` is serialized into the product's `ingredient_json`, the
//! way the persistence layer stores it.

use glob::glob;
use petcare_core::{analyze_ingredients, AnalysisStats, ProductInput, RiskLevel};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// A test case loaded from a JSON fixture file
#[derive(Debug, Deserialize)]
struct TestCase {
    description: String,
    products: Vec<FixtureProduct>,
    symptom_tags: Vec<String>,
    species: String,
    expected: Expected,
}

#[derive(Debug, Deserialize)]
struct FixtureProduct {
    id: String,
    name: String,
    #[serde(default)]
    brand: Option<String>,
    #[serde(rename = "type", default)]
    product_type: String,
    #[serde(default)]
    ingredient_text: Option<String>,
    #[serde(default)]
    ingredient_json: Option<String>,
    #[serde(default)]
    ingredient_lists: Option<serde_json::Value>,
}

impl From<FixtureProduct> for ProductInput {
    fn from(fixture: FixtureProduct) -> Self {
        let ingredient_json = fixture
            .ingredient_lists
            .map(|lists| lists.to_string())
            .or(fixture.ingredient_json);
        Self {
            id: fixture.id,
            name: fixture.name,
            brand: fixture.brand,
            product_type: fixture.product_type,
            ingredient_text: fixture.ingredient_text,
            ingredient_json,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Expected {
    matched: Vec<ExpectedMatch>,
    stats: AnalysisStats,
    supplements: Vec<String>,
    ingredient_counts: Vec<usize>,
}

#[derive(Debug, Deserialize, PartialEq)]
struct ExpectedMatch {
    display_name: String,
    risk_level: RiskLevel,
    found_in: Vec<String>,
    matched_raw_text: String,
}

fn load_test_cases() -> Vec<(String, TestCase)> {
    let pattern = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/analysis/*.json");
    let pattern_str = pattern.to_string_lossy();

    let mut cases = Vec::new();
    for entry in glob(&pattern_str).expect("Failed to read glob pattern") {
        let path = entry.expect("Failed to read directory entry");
        let name = path.file_stem().unwrap().to_string_lossy().into_owned();
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
        let case: TestCase = serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e));
        cases.push((name, case));
    }

    assert!(!cases.is_empty(), "No analysis fixtures found");
    cases
}

#[test]
fn test_analysis_golden_files() {
    for (name, case) in load_test_cases() {
        println!("Testing: {} ({})", name, case.description);

        let products: Vec<ProductInput> = case.products.into_iter().map(Into::into).collect();
        let result = analyze_ingredients(&products, &case.symptom_tags, &case.species);

        let matched: Vec<ExpectedMatch> = result
            .matched
            .iter()
            .map(|m| ExpectedMatch {
                display_name: m.definition.display_name.clone(),
                risk_level: m.definition.risk_level,
                found_in: m.found_in.clone(),
                matched_raw_text: m.matched_raw_text.clone(),
            })
            .collect();
        assert_eq!(matched, case.expected.matched, "Matches mismatch for {}", name);

        assert_eq!(result.stats, case.expected.stats, "Stats mismatch for {}", name);

        let supplements: Vec<&str> = result.supplements.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            supplements, case.expected.supplements,
            "Supplements mismatch for {}",
            name
        );

        let counts: Vec<usize> = result
            .product_summaries
            .iter()
            .map(|s| s.ingredient_count)
            .collect();
        assert_eq!(
            counts, case.expected.ingredient_counts,
            "Ingredient counts mismatch for {}",
            name
        );
    }
}

#[test]
fn test_tiers_are_stable_filters_of_matched() {
    for (name, case) in load_test_cases() {
        let products: Vec<ProductInput> = case.products.into_iter().map(Into::into).collect();
        let result = analyze_ingredients(&products, &case.symptom_tags, &case.species);

        for level in RiskLevel::REPORT_ORDER {
            let expected: Vec<&str> = result
                .matched
                .iter()
                .filter(|m| m.definition.risk_level == *level)
                .map(|m| m.definition.display_name.as_str())
                .collect();
            let tier: Vec<&str> = result
                .tier(*level)
                .map(|m| m.definition.display_name.as_str())
                .collect();
            assert_eq!(tier, expected, "{:?} tier mismatch for {}", level, name);
        }
    }
}

#[test]
fn test_analysis_is_deterministic() {
    for (name, case) in load_test_cases() {
        let products: Vec<ProductInput> = case.products.into_iter().map(Into::into).collect();
        let first = analyze_ingredients(&products, &case.symptom_tags, &case.species);
        let second = analyze_ingredients(&products, &case.symptom_tags, &case.species);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap(),
            "Non-deterministic output for {}",
            name
        );
    }
}
