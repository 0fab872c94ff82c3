//! Line item type.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One product entry in the cart with its quantity.
///
/// `quantity` is always at least 1; the engine clamps every update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product identifier, unique within a cart.
    pub id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// Image reference.
    pub image_ref: Option<String>,
}

impl LineItem {
    /// Create a line item for one unit of a product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.unit_price,
            quantity: 1,
            image_ref: product.image_ref.clone(),
        }
    }

    /// Total price (unit_price * quantity).
    pub fn total(&self) -> Money {
        self.unit_price * self.quantity
    }

    /// Set the quantity, clamping anything below 1 to 1.
    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_from_product() {
        let product = Product::new("towel", "Beach Towel", Money::new(2499)).with_image("t.png");
        let item = LineItem::from_product(&product);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.image_ref.as_deref(), Some("t.png"));
        assert_eq!(item.total(), Money::new(2499));
    }

    #[test]
    fn test_set_quantity_clamps() {
        let mut item = LineItem::from_product(&Product::new("a", "A", Money::dollars(3)));
        item.set_quantity(4);
        assert_eq!(item.total(), Money::dollars(12));
        item.set_quantity(0);
        assert_eq!(item.quantity, 1);
        item.set_quantity(-5);
        assert_eq!(item.quantity, 1);
    }
}
