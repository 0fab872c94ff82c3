//! Shopping cart module.
//!
//! Contains the cart engine, line items, pricing, and coupon rules.

mod coupon;
mod engine;
mod line_item;
mod pricing;
mod state;

pub use coupon::{
    normalize_code, CouponBook, CouponOutcome, CouponRule, INVALID_CODE_MESSAGE,
    SPEND_MORE_MESSAGE,
};
pub use engine::CartEngine;
pub use line_item::LineItem;
pub use pricing::CartTotals;
pub use state::CartState;
