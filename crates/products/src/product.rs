use serde::{Deserialize, Serialize};

use catalog_core::Entity;
use catalog_core::uuid::Uuid;

use crate::error::{CatalogError, CatalogResult};

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

catalog_core::impl_uuid_newtype!(ProductId, "ProductId");

/// Entity: Product.
///
/// The identifier is assigned at construction and never changes. The price is
/// checked on construction and on every `set_price`, so `price >= 0` holds for
/// the whole lifetime of the value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
}

impl Product {
    /// Build a product with a freshly generated identifier.
    pub fn new(name: impl Into<String>, price: f64) -> CatalogResult<Self> {
        validate_price(price)?;

        Ok(Self {
            id: ProductId::new(),
            name: name.into(),
            price,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Change the price, keeping the current one if `price` is invalid.
    pub fn set_price(&mut self, price: f64) -> CatalogResult<()> {
        validate_price(price)?;
        self.price = price;
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn validate_price(price: f64) -> CatalogResult<()> {
    if !price.is_finite() {
        return Err(CatalogError::PriceNotFinite);
    }
    if price < 0.0 {
        return Err(CatalogError::PriceNegative(price));
    }
    Ok(())
}
