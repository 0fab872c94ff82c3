//! Cart state.

use crate::cart::LineItem;
use crate::ids::ProductId;
use crate::money::Money;
use crate::shipping::ShippingOption;
use serde::{Deserialize, Serialize};

/// Everything the cart holds for one session.
///
/// `discount` is derived from the last successfully applied coupon and the
/// subtotal at the time it was applied. It is not recomputed when items
/// change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartState {
    /// Items in insertion order, at most one per product id.
    pub items: Vec<LineItem>,
    /// Selected shipping option.
    pub shipping_method: ShippingOption,
    /// Applied coupon code.
    pub coupon_code: Option<String>,
    /// Discount granted by the applied coupon.
    pub discount: Money,
}

impl CartState {
    /// Create an empty cart with the given shipping option.
    pub fn new(shipping_method: ShippingOption) -> Self {
        Self {
            items: Vec::new(),
            shipping_method,
            coupon_code: None,
            discount: Money::zero(),
        }
    }

    /// Get an item by product id.
    pub fn item(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    pub(crate) fn item_mut(&mut self, id: &ProductId) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|i| &i.id == id)
    }

    /// Sum of unit price times quantity over all items.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::total).sum()
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn clear_coupon(&mut self) {
        self.coupon_code = None;
        self.discount = Money::zero();
    }
}
