use std::sync::Arc;

use shopfront_core::domain::product::{Product, ProductId};
use shopfront_core::errors::CatalogError;

use crate::repositories::ProductStore;

/// Stateless read path over the product catalog.
///
/// Holds only an injected storage capability; every call is a single
/// point read or scan with no caching or retry logic.
#[derive(Clone)]
pub struct ProductReader {
    store: Arc<dyn ProductStore>,
}

impl ProductReader {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// All products, ascending by identifier. Empty storage yields an
    /// empty vector, never an error.
    pub async fn list(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.store.list_all().await?)
    }

    /// The product with the given identifier, or
    /// [`CatalogError::NotFound`] when no record matches.
    pub async fn get(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.store.find_by_id(id).await?.ok_or(CatalogError::NotFound { id })
    }
}
