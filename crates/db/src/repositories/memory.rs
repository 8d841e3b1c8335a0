use std::collections::BTreeMap;

use tokio::sync::RwLock;

use shopfront_core::domain::product::{Product, ProductDraft, ProductId};

use super::{ProductStore, RepositoryError};

/// In-memory substitute for [`SqlProductStore`](super::SqlProductStore),
/// assigning identifiers the same way the SQL store's rowids do.
#[derive(Default)]
pub struct InMemoryProductStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    products: BTreeMap<i64, Product>,
}

#[async_trait::async_trait]
impl ProductStore for InMemoryProductStore {
    async fn insert(&self, draft: ProductDraft) -> Result<Product, RepositoryError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let product = Product::from_draft(ProductId(inner.next_id), draft);
        inner.products.insert(product.id.0, product.clone());
        Ok(product)
    }

    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let inner = self.inner.read().await;
        Ok(inner.products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let inner = self.inner.read().await;
        Ok(inner.products.get(&id.0).cloned())
    }
}

#[cfg(test)]
mod tests {
    use shopfront_core::domain::product::{ProductDraft, ProductId};

    use crate::repositories::{InMemoryProductStore, ProductStore};

    #[tokio::test]
    async fn in_memory_store_round_trip() {
        let store = InMemoryProductStore::default();
        let draft = ProductDraft::new("Headphones", "Over-ear noise-cancelling headphones.", "5000")
            .expect("draft");

        let stored = store.insert(draft).await.expect("insert product");
        let found = store.find_by_id(stored.id).await.expect("find product");

        assert_eq!(found, Some(stored));
    }

    #[tokio::test]
    async fn identifiers_are_assigned_sequentially() {
        let store = InMemoryProductStore::default();

        let first = store
            .insert(ProductDraft::new("Shirt", "", "400").expect("draft"))
            .await
            .expect("insert");
        let second = store
            .insert(ProductDraft::new("Wireless Mouse", "", "550").expect("draft"))
            .await
            .expect("insert");

        assert_eq!(first.id, ProductId(1));
        assert_eq!(second.id, ProductId(2));
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = InMemoryProductStore::default();
        assert!(store.list_all().await.expect("list").is_empty());
        assert_eq!(store.find_by_id(ProductId(1)).await.expect("find"), None);
    }
}
