//! Product storage contract.

use std::sync::Arc;

use catalog_core::Context;

use crate::error::CatalogResult;
use crate::product::{Product, ProductId};

/// Storage backend for products.
///
/// Every operation takes the caller's [`Context`] first. Backends that do IO
/// should honour cancellation and deadlines through [`Context::check`]; purely
/// in-process backends may ignore it.
///
/// ## Implementation requirements
///
/// - `add_product` fails with `ProductAlreadyExists` when the id is taken and
///   leaves the stored entry untouched.
/// - `get_product_by_id`, `update_product` and `remove_product` fail with
///   `ProductNotFound` when the id is absent.
/// - `update_product` replaces the stored product as a whole.
/// - `get_all_products` returns every stored product in unspecified order, or
///   an empty vector.
/// - A failed call leaves the stored state exactly as it was.
pub trait ProductRepository: Send + Sync {
    fn add_product(&self, ctx: &Context, product: Product) -> CatalogResult<()>;

    fn get_product_by_id(&self, ctx: &Context, id: ProductId) -> CatalogResult<Product>;

    fn get_all_products(&self, ctx: &Context) -> CatalogResult<Vec<Product>>;

    fn update_product(&self, ctx: &Context, product: Product) -> CatalogResult<()>;

    fn remove_product(&self, ctx: &Context, id: ProductId) -> CatalogResult<()>;
}

impl<S> ProductRepository for Arc<S>
where
    S: ProductRepository + ?Sized,
{
    fn add_product(&self, ctx: &Context, product: Product) -> CatalogResult<()> {
        (**self).add_product(ctx, product)
    }

    fn get_product_by_id(&self, ctx: &Context, id: ProductId) -> CatalogResult<Product> {
        (**self).get_product_by_id(ctx, id)
    }

    fn get_all_products(&self, ctx: &Context) -> CatalogResult<Vec<Product>> {
        (**self).get_all_products(ctx)
    }

    fn update_product(&self, ctx: &Context, product: Product) -> CatalogResult<()> {
        (**self).update_product(ctx, product)
    }

    fn remove_product(&self, ctx: &Context, id: ProductId) -> CatalogResult<()> {
        (**self).remove_product(ctx, id)
    }
}

impl<S> ProductRepository for Box<S>
where
    S: ProductRepository + ?Sized,
{
    fn add_product(&self, ctx: &Context, product: Product) -> CatalogResult<()> {
        (**self).add_product(ctx, product)
    }

    fn get_product_by_id(&self, ctx: &Context, id: ProductId) -> CatalogResult<Product> {
        (**self).get_product_by_id(ctx, id)
    }

    fn get_all_products(&self, ctx: &Context) -> CatalogResult<Vec<Product>> {
        (**self).get_all_products(ctx)
    }

    fn update_product(&self, ctx: &Context, product: Product) -> CatalogResult<()> {
        (**self).update_product(ctx, product)
    }

    fn remove_product(&self, ctx: &Context, id: ProductId) -> CatalogResult<()> {
        (**self).remove_product(ctx, id)
    }
}
