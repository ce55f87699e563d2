pub mod analyzer;
pub mod config;
pub mod error;
pub mod extract;
pub mod history;
pub mod impact;
pub mod labels;
pub mod matcher;
pub mod normalize;
pub mod nutrition;
pub mod recommend;
pub mod types;

pub use analyzer::{analyze_ingredients, AnalysisResult, Analyzer, MatchedIngredient};
pub use config::AnalysisConfig;
pub use error::HistoryError;
pub use extract::extract_fragments;
pub use history::{collect_inputs, AnalysisInputs, PetHistory, ProductUsage, SymptomEntry};
pub use impact::ImpactSummary;
pub use matcher::{match_definition, Haystack, IngredientMatch};
pub use normalize::normalize;
pub use nutrition::{nutrition_by_product, NutritionalFact, ProductNutrition};
pub use types::{AnalysisStats, ProductInput, ProductSummary};

pub use ingredient_knowledge::{
    IngredientCategory, IngredientDefinition, KnowledgeBase, Priority, RiskLevel, SpeciesGuard,
    SupplementRule,
};
