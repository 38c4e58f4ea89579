//! Catalog error model.

use thiserror::Error;

use catalog_core::DomainError;

use crate::product::ProductId;

/// Result type used by product construction and repositories.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Every failure a product or a product repository can report.
///
/// None of these are fatal: a repository stays usable after returning any of
/// them, and its state is exactly what it was before the failed call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    /// A product price was below zero.
    #[error("price cannot be negative: {0}")]
    PriceNegative(f64),

    /// A product price was NaN or infinite.
    #[error("price must be a finite number")]
    PriceNotFinite,

    /// No product is stored under the identifier.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// A product with the same identifier is already stored.
    #[error("product already exists: {0}")]
    ProductAlreadyExists(ProductId),

    /// Cancellation, deadline or identifier failure.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ProductNotFound(_))
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::ProductAlreadyExists(_))
    }
}
