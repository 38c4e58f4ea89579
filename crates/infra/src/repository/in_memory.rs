use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::instrument;

use catalog_core::Context;
use catalog_products::{CatalogError, CatalogResult, Product, ProductId, ProductRepository};

use crate::config::RepositoryConfig;

/// In-memory product repository.
///
/// A single `RwLock` guards the whole map. Reads (`get_product_by_id`,
/// `get_all_products`) share the lock; `add_product`, `update_product` and
/// `remove_product` take it exclusively. Reads hand out clones, so nothing a
/// caller holds aliases stored state.
///
/// Nothing is persisted: the products go away with the repository.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            products: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    pub fn from_config(config: &RepositoryConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    /// Number of stored products.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while a guard is held can only come from inside a single
    // HashMap call, which never leaves the map half-updated, so a poisoned
    // lock still protects a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<ProductId, Product>> {
        self.products.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<ProductId, Product>> {
        self.products.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ProductRepository for InMemoryProductRepository {
    #[instrument(level = "debug", skip(self, _ctx, product), fields(product_id = %product.id_typed()))]
    fn add_product(&self, _ctx: &Context, product: Product) -> CatalogResult<()> {
        let id = product.id_typed();
        match self.write().entry(id) {
            Entry::Occupied(_) => Err(CatalogError::ProductAlreadyExists(id)),
            Entry::Vacant(slot) => {
                slot.insert(product);
                Ok(())
            }
        }
    }

    #[instrument(level = "debug", skip(self, _ctx), fields(product_id = %id))]
    fn get_product_by_id(&self, _ctx: &Context, id: ProductId) -> CatalogResult<Product> {
        self.read()
            .get(&id)
            .cloned()
            .ok_or(CatalogError::ProductNotFound(id))
    }

    #[instrument(level = "debug", skip(self, _ctx))]
    fn get_all_products(&self, _ctx: &Context) -> CatalogResult<Vec<Product>> {
        Ok(self.read().values().cloned().collect())
    }

    #[instrument(level = "debug", skip(self, _ctx, product), fields(product_id = %product.id_typed()))]
    fn update_product(&self, _ctx: &Context, product: Product) -> CatalogResult<()> {
        let id = product.id_typed();
        match self.write().get_mut(&id) {
            Some(stored) => {
                *stored = product;
                Ok(())
            }
            None => Err(CatalogError::ProductNotFound(id)),
        }
    }

    #[instrument(level = "debug", skip(self, _ctx), fields(product_id = %id))]
    fn remove_product(&self, _ctx: &Context, id: ProductId) -> CatalogResult<()> {
        self.write()
            .remove(&id)
            .map(|_| ())
            .ok_or(CatalogError::ProductNotFound(id))
    }
}
