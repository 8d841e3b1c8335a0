use thiserror::Error;

use crate::domain::product::ProductId;

/// Write-boundary rejections for malformed product data.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("product name must not be empty")]
    EmptyName,
    #[error("price `{raw}` is not a numeric monetary value")]
    MalformedPrice { raw: String },
    #[error("price `{value}` must not be negative")]
    NegativePrice { value: String },
}

/// Catalog-level outcomes surfaced to callers of the read and seed paths.
///
/// `NotFound` is an expected, recoverable result and is kept distinct
/// from `Storage`, which reports the backing store being unreachable.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no product with id {id}")]
    NotFound { id: ProductId },
    #[error("storage unavailable: {0}")]
    Storage(String),
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::product::ProductId;
    use crate::errors::{CatalogError, ValidationError};

    #[test]
    fn validation_error_converts_into_catalog_error() {
        let err = CatalogError::from(ValidationError::MalformedPrice { raw: "free".to_string() });
        assert_eq!(
            err,
            CatalogError::Validation(ValidationError::MalformedPrice { raw: "free".to_string() })
        );
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_names_the_missing_id() {
        let err = CatalogError::NotFound { id: ProductId(42) };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "no product with id 42");
    }

    #[test]
    fn storage_error_is_distinct_from_not_found() {
        let err = CatalogError::Storage("connection refused".to_string());
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "storage unavailable: connection refused");
    }
}
