use std::sync::Arc;

use shopfront_core::domain::product::{Product, ProductDraft};
use shopfront_core::errors::CatalogError;

use crate::repositories::ProductStore;

/// One row of a seed dataset, carried as raw text so the price passes
/// through the same validating boundary as any other write.
#[derive(Clone, Copy, Debug)]
pub struct SeedRecord {
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
}

/// Canonical catalog dataset loaded by `shopfront seed`.
pub const CATALOG_SEED: &[SeedRecord] = &[
    SeedRecord { name: "Shirt", description: "A comfortable cotton shirt.", price: "400" },
    SeedRecord {
        name: "Programming Python",
        description: "A book about python programming.",
        price: "120",
    },
    SeedRecord { name: "Mountain Bike", description: "A sturdy mountain bicycle.", price: "3500" },
    SeedRecord { name: "Wireless Mouse", description: "A comfortable wireless mouse.", price: "550" },
    SeedRecord {
        name: "Headphones",
        description: "Over-ear noise-cancelling headphones.",
        price: "5000",
    },
];

/// The defective record shipped with the legacy dataset. Kept only as a
/// fixture proving the write boundary rejects a non-numeric price.
pub const DEFECTIVE_LEGACY_RECORD: SeedRecord =
    SeedRecord { name: "Intern", description: "To learn DevOps", price: "free" };

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedOutcome {
    /// False when the guard found existing products and skipped loading.
    pub applied: bool,
    pub inserted: Vec<Product>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationResult {
    pub all_present: bool,
    pub checks: Vec<(&'static str, bool)>,
}

/// One-shot administrative loader for the product catalog.
///
/// Idempotent by guard rather than by upsert: a store that already holds
/// products is treated as seeded and left untouched.
pub struct SeedLoader {
    store: Arc<dyn ProductStore>,
}

impl SeedLoader {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// Load the canonical catalog dataset.
    pub async fn run(&self) -> Result<SeedOutcome, CatalogError> {
        self.load_records(CATALOG_SEED).await
    }

    /// Load an explicit dataset behind the already-seeded guard.
    ///
    /// Every record is validated before anything is written, so one
    /// malformed price aborts the run without a partial load.
    pub async fn load_records(&self, records: &[SeedRecord]) -> Result<SeedOutcome, CatalogError> {
        let existing = self.store.list_all().await?;
        if !existing.is_empty() {
            return Ok(SeedOutcome { applied: false, inserted: Vec::new() });
        }

        let drafts = records
            .iter()
            .map(|record| ProductDraft::new(record.name, record.description, record.price))
            .collect::<Result<Vec<_>, _>>()?;

        let mut inserted = Vec::with_capacity(drafts.len());
        for draft in drafts {
            inserted.push(self.store.insert(draft).await?);
        }

        Ok(SeedOutcome { applied: true, inserted })
    }

    /// Check the stored catalog against the canonical dataset.
    pub async fn verify(&self) -> Result<VerificationResult, CatalogError> {
        let stored = self.store.list_all().await?;

        let mut checks = Vec::with_capacity(CATALOG_SEED.len() + 1);
        checks.push(("product-count", stored.len() == CATALOG_SEED.len()));
        for record in CATALOG_SEED {
            let present = stored.iter().any(|product| {
                product.name == record.name
                    && product.description == record.description
                    && product.price.to_string() == record.price
            });
            checks.push((record.name, present));
        }

        let all_present = checks.iter().all(|(_, passed)| *passed);
        Ok(VerificationResult { all_present, checks })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use shopfront_core::errors::{CatalogError, ValidationError};

    use crate::repositories::InMemoryProductStore;
    use crate::seed::{SeedLoader, SeedRecord, CATALOG_SEED, DEFECTIVE_LEGACY_RECORD};

    fn loader_with_store() -> (SeedLoader, Arc<InMemoryProductStore>) {
        let store = Arc::new(InMemoryProductStore::default());
        (SeedLoader::new(store.clone()), store)
    }

    #[tokio::test]
    async fn seeding_stores_every_canonical_record() {
        let (loader, _store) = loader_with_store();

        let outcome = loader.run().await.expect("seed run");
        assert!(outcome.applied);
        assert_eq!(outcome.inserted.len(), CATALOG_SEED.len());

        let verification = loader.verify().await.expect("verify");
        assert!(verification.all_present, "failed checks: {:?}", verification.checks);
    }

    #[tokio::test]
    async fn second_run_is_a_guarded_no_op() {
        let (loader, store) = loader_with_store();

        loader.run().await.expect("first run");
        let second = loader.run().await.expect("second run");

        assert!(!second.applied);
        assert!(second.inserted.is_empty());

        use crate::repositories::ProductStore;
        let stored = store.list_all().await.expect("list");
        assert_eq!(stored.len(), CATALOG_SEED.len(), "no duplicated rows");
    }

    #[tokio::test]
    async fn six_well_formed_records_store_exactly_six_products() {
        let (loader, store) = loader_with_store();

        let mut records = CATALOG_SEED.to_vec();
        records.push(SeedRecord {
            name: "Desk Lamp",
            description: "An adjustable LED desk lamp.",
            price: "275",
        });

        let outcome = loader.load_records(&records).await.expect("seed six records");
        assert_eq!(outcome.inserted.len(), 6);

        use crate::repositories::ProductStore;
        assert_eq!(store.list_all().await.expect("list").len(), 6);
    }

    #[tokio::test]
    async fn defective_legacy_record_aborts_the_run_without_storing_anything() {
        let (loader, store) = loader_with_store();

        let mut records = CATALOG_SEED.to_vec();
        records.push(DEFECTIVE_LEGACY_RECORD);

        let err = loader.load_records(&records).await.expect_err("malformed price");
        assert_eq!(
            err,
            CatalogError::Validation(ValidationError::MalformedPrice { raw: "free".to_string() })
        );

        use crate::repositories::ProductStore;
        let stored = store.list_all().await.expect("list");
        assert!(stored.is_empty(), "rejected dataset must not be partially stored");
        assert!(stored.iter().all(|product| product.name != "Intern"));
    }
}
