//! Curated knowledge base of pet-food ingredients and supplement rules.
//!
//! This crate is pure data: ingredient definitions (aliases, category, risk
//! tier, effect notes) and the conditional supplement rules evaluated against
//! a pet's diet. The curated catalog is embedded as JSON and parsed once.
//!
//! Catalog order is significant. Harmful entries come first, then additives,
//! functional ingredients, fats, proteins, carbohydrates and finally vitamins
//! and minerals, and consumers evaluate entries in exactly that order.
//!
//! # Example
//!
//! ```
//! use ingredient_knowledge::{KnowledgeBase, RiskLevel};
//!
//! let kb = KnowledgeBase::builtin();
//! let xylitol = kb
//!     .ingredients()
//!     .iter()
//!     .find(|d| d.display_name == "木糖醇")
//!     .unwrap();
//! assert_eq!(xylitol.risk_level, RiskLevel::Toxic);
//! ```

mod catalog;
mod error;
mod types;

pub use catalog::KnowledgeBase;
pub use error::KnowledgeError;
pub use types::{
    IngredientCategory, IngredientDefinition, Priority, RiskLevel, SpeciesGuard, SupplementRule,
};
