//! The ingredient analysis engine.
//!
//! Runs every knowledge-base entry against every product, groups the hits
//! into risk tiers, and evaluates the supplement rules over the combined
//! diet. The whole pass is a pure function of its inputs.

use ingredient_knowledge::{IngredientDefinition, KnowledgeBase, RiskLevel, SupplementRule};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::extract::extract_fragments;
use crate::matcher::Haystack;
use crate::recommend::recommend;
use crate::types::{AnalysisStats, ProductInput, ProductSummary};

/// A knowledge-base entry found in at least one product.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MatchedIngredient<'kb> {
    #[serde(flatten)]
    pub definition: &'kb IngredientDefinition,
    /// Display names of the products it was found in, in input order.
    pub found_in: Vec<String>,
    /// Fragment that triggered the first match.
    pub matched_raw_text: String,
}

/// Outcome of one analysis call.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult<'kb> {
    /// All matches in knowledge-base order.
    pub matched: Vec<MatchedIngredient<'kb>>,
    /// Active supplement recommendations, high priority first.
    pub supplements: Vec<&'kb SupplementRule>,
    pub product_summaries: Vec<ProductSummary>,
    pub stats: AnalysisStats,
}

impl<'kb> AnalysisResult<'kb> {
    /// Matches with the given risk level, in knowledge-base order.
    pub fn tier(&self, level: RiskLevel) -> impl Iterator<Item = &MatchedIngredient<'kb>> {
        self.matched
            .iter()
            .filter(move |m| m.definition.risk_level == level)
    }

    pub fn toxic_items(&self) -> Vec<&MatchedIngredient<'kb>> {
        self.tier(RiskLevel::Toxic).collect()
    }

    pub fn warning_items(&self) -> Vec<&MatchedIngredient<'kb>> {
        self.tier(RiskLevel::Warning).collect()
    }

    pub fn caution_items(&self) -> Vec<&MatchedIngredient<'kb>> {
        self.tier(RiskLevel::Caution).collect()
    }

    pub fn safe_items(&self) -> Vec<&MatchedIngredient<'kb>> {
        self.tier(RiskLevel::Safe).collect()
    }
}

impl Serialize for AnalysisResult<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AnalysisResult", 8)?;
        state.serialize_field("matched", &self.matched)?;
        state.serialize_field("toxic_items", &self.toxic_items())?;
        state.serialize_field("warning_items", &self.warning_items())?;
        state.serialize_field("caution_items", &self.caution_items())?;
        state.serialize_field("safe_items", &self.safe_items())?;
        state.serialize_field("supplements", &self.supplements)?;
        state.serialize_field("product_summaries", &self.product_summaries)?;
        state.serialize_field("stats", &self.stats)?;
        state.end()
    }
}

/// Engine bound to a knowledge base.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'kb> {
    knowledge: &'kb KnowledgeBase,
}

impl Analyzer<'static> {
    /// Analyzer over the embedded catalog.
    pub fn builtin() -> Self {
        Self::new(KnowledgeBase::builtin())
    }
}

impl<'kb> Analyzer<'kb> {
    pub fn new(knowledge: &'kb KnowledgeBase) -> Self {
        Self { knowledge }
    }

    pub fn knowledge(&self) -> &'kb KnowledgeBase {
        self.knowledge
    }

    /// Analyze a set of products for a pet.
    ///
    /// `symptom_tags` has set semantics; duplicates are ignored. Any species
    /// string is accepted; only species named by a rule's guard behave
    /// differently.
    pub fn analyze<S: AsRef<str>>(
        &self,
        products: &[ProductInput],
        symptom_tags: &[S],
        species: &str,
    ) -> AnalysisResult<'kb> {
        let fragments: Vec<Vec<String>> = products.iter().map(extract_fragments).collect();

        let product_summaries = products
            .iter()
            .zip(&fragments)
            .map(|(product, texts)| ProductSummary {
                id: product.id.clone(),
                name: product.name.clone(),
                brand: product.brand.clone(),
                product_type: product.product_type.clone(),
                ingredient_count: texts.len(),
            })
            .collect();

        let display_names: Vec<String> = products.iter().map(ProductInput::display_name).collect();
        let haystacks: Vec<Haystack<'_>> = fragments.iter().map(|f| Haystack::new(f)).collect();

        let matched: Vec<MatchedIngredient<'kb>> = self
            .knowledge
            .ingredients()
            .iter()
            .filter_map(|definition| {
                self.match_across_products(definition, &haystacks, &display_names)
            })
            .collect();

        let symptoms = dedup_symptoms(symptom_tags);
        let all_fragments: Vec<String> = fragments.concat();
        let corpus = Haystack::new(&all_fragments);
        let supplements = recommend(
            self.knowledge.supplement_rules(),
            &corpus,
            &symptoms,
            species,
        );

        let result = AnalysisResult {
            stats: compute_stats(&matched),
            matched,
            supplements,
            product_summaries,
        };

        tracing::debug!(
            products = products.len(),
            matched = result.stats.total_ingredients,
            toxic = result.stats.toxic_count,
            warning = result.stats.warning_count,
            caution = result.stats.caution_count,
            safe = result.stats.safe_count,
            supplements = result.supplements.len(),
            "ingredient analysis complete"
        );

        result
    }

    fn match_across_products(
        &self,
        definition: &'kb IngredientDefinition,
        haystacks: &[Haystack<'_>],
        display_names: &[String],
    ) -> Option<MatchedIngredient<'kb>> {
        let mut found_in = Vec::new();
        let mut matched_raw_text = None;

        for (haystack, name) in haystacks.iter().zip(display_names) {
            if let Some(hit) = haystack.find(definition) {
                tracing::trace!(
                    ingredient = %definition.display_name,
                    product = %name,
                    pattern = hit.pattern,
                    "ingredient matched"
                );
                found_in.push(name.clone());
                matched_raw_text.get_or_insert(hit.raw_text);
            }
        }

        let matched_raw_text = matched_raw_text?;
        Some(MatchedIngredient {
            definition,
            found_in,
            matched_raw_text,
        })
    }
}

/// Analyze with the embedded catalog.
pub fn analyze_ingredients<S: AsRef<str>>(
    products: &[ProductInput],
    symptom_tags: &[S],
    species: &str,
) -> AnalysisResult<'static> {
    Analyzer::builtin().analyze(products, symptom_tags, species)
}

fn dedup_symptoms<S: AsRef<str>>(tags: &[S]) -> Vec<&str> {
    let mut symptoms: Vec<&str> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.as_ref();
        if !symptoms.contains(&tag) {
            symptoms.push(tag);
        }
    }
    symptoms
}

fn compute_stats(matched: &[MatchedIngredient<'_>]) -> AnalysisStats {
    let mut stats = AnalysisStats {
        total_ingredients: matched.len(),
        ..AnalysisStats::default()
    };
    for m in matched {
        match m.definition.risk_level {
            RiskLevel::Toxic => stats.toxic_count += 1,
            RiskLevel::Warning => stats.warning_count += 1,
            RiskLevel::Caution => stats.caution_count += 1,
            RiskLevel::Safe => stats.safe_count += 1,
        }
    }
    stats
}
