//! Catalog error types.

use common::ItemId;
use thiserror::Error;

use crate::repository::RepositoryError;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A required field was absent or empty.
    #[error("Required field is missing: {field}")]
    MissingField { field: &'static str },

    /// Price is zero or negative.
    #[error("Invalid price: {price} (must be greater than 0)")]
    InvalidPrice { price: i64 },

    /// Price exceeds the catalog ceiling.
    #[error("Price is too high: {price} (must be at most {max})")]
    PriceTooHigh { price: i64, max: i64 },

    /// No item exists with the given ID.
    #[error("Item not found: {item_id}")]
    NotFound { item_id: ItemId },

    /// The backing store failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl CatalogError {
    /// Stable identifier for the error kind, safe to branch on.
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::MissingField { .. } => "MISSING_FIELD",
            CatalogError::InvalidPrice { .. } => "INVALID_PRICE",
            CatalogError::PriceTooHigh { .. } => "PRICE_TOO_HIGH",
            CatalogError::NotFound { .. } => "NOT_FOUND",
            CatalogError::Repository(_) => "REPOSITORY",
        }
    }

    /// Returns true for caller-correctable request errors.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CatalogError::MissingField { .. }
                | CatalogError::InvalidPrice { .. }
                | CatalogError::PriceTooHigh { .. }
        )
    }
}

/// A category name that matches no menu category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category: {name}")]
pub struct UnknownCategory {
    pub name: String,
}

impl UnknownCategory {
    /// Stable identifier for the error kind.
    pub fn code(&self) -> &'static str {
        "UNKNOWN_CATEGORY"
    }
}

/// Convenience type alias for catalog results.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let errors = [
            CatalogError::MissingField { field: "kor_name" },
            CatalogError::InvalidPrice { price: 0 },
            CatalogError::PriceTooHigh {
                price: 100_001,
                max: 100_000,
            },
            CatalogError::NotFound {
                item_id: ItemId::new(),
            },
            CatalogError::Repository(RepositoryError::Unavailable("down".to_string())),
        ];
        let mut codes: Vec<_> = errors.iter().map(CatalogError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn only_request_errors_are_validation() {
        assert!(CatalogError::InvalidPrice { price: -1 }.is_validation());
        assert!(
            !CatalogError::NotFound {
                item_id: ItemId::new()
            }
            .is_validation()
        );
    }

    #[test]
    fn price_too_high_message_names_the_ceiling() {
        let err = CatalogError::PriceTooHigh {
            price: 150_000,
            max: 100_000,
        };
        assert_eq!(
            err.to_string(),
            "Price is too high: 150000 (must be at most 100000)"
        );
    }
}
