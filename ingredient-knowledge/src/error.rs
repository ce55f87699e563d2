use thiserror::Error;

#[derive(Error, Debug)]
pub enum KnowledgeError {
    #[error("Invalid catalog JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Ingredient #{index} has an empty display name")]
    EmptyDisplayName { index: usize },

    #[error("Ingredient '{0}' has no patterns")]
    NoPatterns(String),

    #[error("Supplement rule #{index} has an empty name")]
    EmptyRuleName { index: usize },

    #[error("Supplement rule '{0}' has no missing patterns")]
    NoMissingPatterns(String),
}
