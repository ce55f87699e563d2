//! Plain-text rendering of an analysis report.

use petcare_core::labels::{product_type_label, symptom_type_label};
use petcare_core::{AnalysisResult, ProductNutrition, RiskLevel};
use std::fmt::Write;

fn tier_heading(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Toxic => "有害成分",
        RiskLevel::Warning => "警示成分",
        RiskLevel::Caution => "需注意成分",
        RiskLevel::Safe => "安全成分",
    }
}

pub fn render(result: &AnalysisResult<'_>, nutrition: &[ProductNutrition]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Products ({}):", result.product_summaries.len());
    for summary in &result.product_summaries {
        let brand = summary.brand.as_deref().unwrap_or("-");
        let _ = writeln!(
            out,
            "  {} / {} [{}] {} fragments",
            brand,
            summary.name,
            product_type_label(&summary.product_type),
            summary.ingredient_count
        );
    }

    let stats = &result.stats;
    let _ = writeln!(
        out,
        "\nMatched {} ingredients: {} toxic, {} warning, {} caution, {} safe",
        stats.total_ingredients,
        stats.toxic_count,
        stats.warning_count,
        stats.caution_count,
        stats.safe_count
    );

    for &level in RiskLevel::REPORT_ORDER {
        let mut items = result.tier(level).peekable();
        if items.peek().is_none() {
            continue;
        }
        let _ = writeln!(out, "\n{}:", tier_heading(level));
        for item in items {
            let definition = item.definition;
            let _ = writeln!(
                out,
                "  - {} (found in: {}; matched \"{}\")",
                definition.display_name,
                item.found_in.join(", "),
                item.matched_raw_text
            );
            let _ = writeln!(out, "    {}", definition.effect);
            if !definition.related_symptoms.is_empty() {
                let labels: Vec<&str> = definition
                    .related_symptoms
                    .iter()
                    .map(|s| symptom_type_label(s))
                    .collect();
                let _ = writeln!(out, "    相關症狀: {}", labels.join("、"));
            }
            if let Some(tip) = &definition.tip {
                let _ = writeln!(out, "    {}", tip);
            }
        }
    }

    if !result.supplements.is_empty() {
        let _ = writeln!(out, "\n補充建議:");
        for rule in &result.supplements {
            let _ = writeln!(out, "  [{}] {}", rule.priority.as_str(), rule.name);
            let _ = writeln!(out, "    {}", rule.reason);
            let _ = writeln!(out, "    e.g. {}", rule.examples);
        }
    }

    if !nutrition.is_empty() {
        let _ = writeln!(out, "\nGuaranteed analysis:");
        for product in nutrition {
            let _ = writeln!(out, "  {}", product.product_name);
            for fact in &product.facts {
                let _ = writeln!(out, "    {}: {}{}", fact.name, fact.value, fact.unit);
            }
        }
    }

    out
}
