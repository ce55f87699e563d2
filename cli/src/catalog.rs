//! Knowledge base listing.

use petcare_core::KnowledgeBase;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Render every entry in evaluation order, grouped by catalog section,
/// followed by the supplement rules and a count per risk level.
pub fn render(knowledge: &KnowledgeBase) -> String {
    let mut out = String::new();
    let mut by_risk: BTreeMap<&str, usize> = BTreeMap::new();

    for (section, definitions) in knowledge.sections() {
        let _ = writeln!(out, "[{}]", section);
        for definition in definitions {
            *by_risk.entry(definition.risk_level.as_str()).or_default() += 1;
            let _ = writeln!(
                out,
                "  {:<8} {:<12} {}  ({})",
                definition.risk_level.as_str(),
                definition.category.as_str(),
                definition.display_name,
                definition.patterns.join(", ")
            );
        }
    }

    let _ = writeln!(out, "\n[supplement rules]");
    for rule in knowledge.supplement_rules() {
        let triggers = if rule.symptom_triggers.is_empty() {
            "always".to_string()
        } else {
            rule.symptom_triggers.join(", ")
        };
        let _ = writeln!(
            out,
            "  {:<6} {}  (triggers: {})",
            rule.priority.as_str(),
            rule.name,
            triggers
        );
    }

    let _ = writeln!(out, "\nRisk levels:");
    for (risk, count) in by_risk {
        let _ = writeln!(out, "  {}: {}", risk, count);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_builtin() {
        let output = render(KnowledgeBase::builtin());
        assert!(output.starts_with("[harmful]\n"));
        assert!(output.contains("toxic    harmful      木糖醇  (木糖醇, xylitol)"));
        assert!(output.contains("high   牛磺酸（貓咪必需）  (triggers: always)"));
        assert!(output.contains("  toxic: 4\n"));
    }
}
