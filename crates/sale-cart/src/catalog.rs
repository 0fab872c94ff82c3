//! Products offered on the sale page.

use crate::error::CartError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product description, as supplied to `CartEngine::add_item`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Price of a single unit.
    pub unit_price: Money,
    /// Image reference for the cart row.
    pub image_ref: Option<String>,
}

impl Product {
    /// Create a new product without an image.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, unit_price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            image_ref: None,
        }
    }

    /// Create a product whose id is derived from its name.
    pub fn named(name: impl Into<String>, unit_price: Money) -> Self {
        let name = name.into();
        Self::new(ProductId::from_name(&name), name, unit_price)
    }

    /// Set the image reference.
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }
}

/// The ordered set of products on the page.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and negative prices.
    pub fn new(products: Vec<Product>) -> Result<Self, CartError> {
        for (i, product) in products.iter().enumerate() {
            if product.unit_price.is_negative() {
                return Err(CartError::NegativeAmount {
                    id: product.id.to_string(),
                    amount_cents: product.unit_price.amount_cents,
                });
            }
            if products[..i].iter().any(|p| p.id == product.id) {
                return Err(CartError::DuplicateProduct(product.id.to_string()));
            }
        }
        Ok(Self { products })
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by id, failing if it is not listed.
    pub fn require(&self, id: &ProductId) -> Result<&Product, CartError> {
        self.get(id)
            .ok_or_else(|| CartError::UnknownProduct(id.to_string()))
    }

    /// All products, in listing order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
