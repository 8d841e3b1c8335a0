pub mod config;
pub mod domain;
pub mod errors;

pub use domain::product::{Price, Product, ProductDraft, ProductId};
pub use errors::{CatalogError, ValidationError};
