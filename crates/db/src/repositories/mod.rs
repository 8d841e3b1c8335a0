use async_trait::async_trait;
use thiserror::Error;

use shopfront_core::domain::product::{Product, ProductDraft, ProductId};
use shopfront_core::errors::CatalogError;

pub mod memory;
pub mod product;

pub use memory::InMemoryProductStore;
pub use product::SqlProductStore;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("decode error: {0}")]
    Decode(String),
}

impl From<RepositoryError> for CatalogError {
    fn from(err: RepositoryError) -> Self {
        CatalogError::Storage(err.to_string())
    }
}

/// Storage capability handed to the Product Reader and Seed Loader.
///
/// Deliberately narrow: insert, select-all, select-by-id. Callers receive
/// an implementation by injection so tests can substitute the in-memory
/// store for the SQL one.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Insert a validated draft and return the stored row with its
    /// assigned identifier.
    async fn insert(&self, draft: ProductDraft) -> Result<Product, RepositoryError>;

    /// All products, ascending by identifier.
    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError>;

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
}
