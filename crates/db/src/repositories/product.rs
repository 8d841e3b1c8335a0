use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use shopfront_core::domain::product::{Price, Product, ProductDraft, ProductId};

use super::{ProductStore, RepositoryError};
use crate::DbPool;

pub struct SqlProductStore {
    pool: DbPool,
}

impl SqlProductStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ProductStore for SqlProductStore {
    async fn insert(&self, draft: ProductDraft) -> Result<Product, RepositoryError> {
        let result = sqlx::query("INSERT INTO product (name, description, price) VALUES (?, ?, ?)")
            .bind(&draft.name)
            .bind(&draft.description)
            .bind(draft.price.to_string())
            .execute(&self.pool)
            .await?;

        Ok(Product::from_draft(ProductId(result.last_insert_rowid()), draft))
    }

    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query("SELECT id, name, description, price FROM product ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(decode_product).collect()
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query("SELECT id, name, description, price FROM product WHERE id = ?")
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(decode_product).transpose()
    }
}

fn decode_product(row: &SqliteRow) -> Result<Product, RepositoryError> {
    let id: i64 = row.try_get("id").map_err(RepositoryError::Database)?;
    let name: String = row.try_get("name").map_err(RepositoryError::Database)?;
    let description: String = row.try_get("description").map_err(RepositoryError::Database)?;
    let raw_price: String = row.try_get("price").map_err(RepositoryError::Database)?;

    // A malformed stored price means something wrote past the validation
    // boundary; report it as a decode fault rather than serving bad data.
    let price = Price::parse(&raw_price).map_err(|err| {
        RepositoryError::Decode(format!("product {id} has a malformed stored price: {err}"))
    })?;

    Ok(Product { id: ProductId(id), name, description, price })
}
