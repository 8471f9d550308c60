//! Error types for the catalog core

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No game with this id exists in the catalog
    #[error("Game not found: {id}")]
    NotFound { id: String },

    /// No review with this id exists for the game
    #[error("Review not found: {id}")]
    ReviewNotFound { id: String },
    
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    
    #[error("Invalid review: {0}")]
    InvalidReview(String),
    
    #[error("Storage error: {0}")]
    Storage(String),
    
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl CatalogError {
    pub fn not_found(id: impl Into<String>) -> Self {
        CatalogError::NotFound { id: id.into() }
    }
    
    /// True for the absent-value outcomes a presentation layer renders as a not-found page
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::NotFound { .. } | CatalogError::ReviewNotFound { .. } | CatalogError::UnknownCategory(_)
        )
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::InvalidData(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
