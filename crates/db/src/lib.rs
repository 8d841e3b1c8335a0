pub mod catalog;
pub mod connection;
pub mod migrations;
pub mod repositories;
pub mod seed;

pub use catalog::ProductReader;
pub use connection::{connect, connect_with_settings, DbPool};
pub use repositories::{InMemoryProductStore, ProductStore, RepositoryError, SqlProductStore};
pub use seed::{SeedLoader, SeedOutcome, SeedRecord, VerificationResult, CATALOG_SEED};
