//! Cart error types.
//!
//! Cart operations themselves never fail; these errors come from building
//! catalogs, shipping tables and coupon tables out of configuration, and
//! from looking up products that are not on the page.

use thiserror::Error;

/// Errors raised at the edges of the cart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    UnknownProduct(String),

    /// The same product id appears twice in a catalog.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// The same shipping option id appears twice.
    #[error("Duplicate shipping option: {0}")]
    DuplicateShippingOption(String),

    /// A shipping table must offer at least one option.
    #[error("Shipping table has no options")]
    EmptyShippingTable,

    /// The same coupon code appears twice.
    #[error("Duplicate coupon code: {0}")]
    DuplicateCoupon(String),

    /// Prices and thresholds must be non-negative.
    #[error("Negative amount for {id}: {amount_cents} cents")]
    NegativeAmount { id: String, amount_cents: i64 },

    /// Coupon percentage outside 1..=100.
    #[error("Invalid coupon percentage for {code}: {percent}")]
    InvalidPercentage { code: String, percent: u32 },

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}
