//! `catalog-core` — building blocks shared by the catalog crates.
//!
//! This crate contains **pure** primitives (no storage, no IO).

pub mod context;
pub mod entity;
pub mod error;
pub mod id;

#[doc(hidden)]
pub use uuid;

pub use context::Context;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
