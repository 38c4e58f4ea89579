//! Products domain module.
//!
//! This crate holds the catalog's business rules (the `Product` entity and its
//! invariants) and the storage contract backends implement. No IO lives here.

pub mod error;
pub mod product;
pub mod repository;

pub use error::{CatalogError, CatalogResult};
pub use product::{Product, ProductId};
pub use repository::ProductRepository;
