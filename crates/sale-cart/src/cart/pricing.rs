//! Cart pricing calculations.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Pricing breakdown for a cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CartTotals {
    /// Subtotal before shipping and discounts.
    pub subtotal: Money,
    /// Shipping cost.
    pub shipping: Money,
    /// Coupon discount.
    pub discount: Money,
    /// Final total (subtotal + shipping - discount), never negative.
    pub total: Money,
}

impl CartTotals {
    /// Compute totals from their parts.
    pub fn compute(subtotal: Money, shipping: Money, discount: Money) -> Self {
        Self {
            subtotal,
            shipping,
            discount,
            total: (subtotal + shipping - discount).non_negative(),
        }
    }
}
