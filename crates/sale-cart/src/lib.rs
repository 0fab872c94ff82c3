//! Cart engine for the SummerSale storefront.
//!
//! This crate holds the in-memory side of the sale page:
//!
//! - **Cart**: line items, shipping selection, coupon rules, totals
//! - **Observer**: the hook a view implements to follow cart changes
//! - **Notices**: transient messages with auto-dismiss timing
//! - **Storefront**: a ready-made observer and the page session
//!
//! # Example
//!
//! ```rust
//! use sale_cart::prelude::*;
//!
//! let towel = Product::new("towel", "Beach Towel", Money::dollars(125));
//!
//! let mut cart = CartEngine::new();
//! cart.add_item(&towel);
//! cart.add_item(&towel);
//! cart.set_shipping_method("standard");
//!
//! let outcome = cart.apply_coupon("sell200");
//! assert!(outcome.applied);
//! assert_eq!(cart.update_total(), Money::dollars(205));
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;
pub mod notice;
pub mod observer;
pub mod shipping;
pub mod storefront;

pub use error::CartError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CartError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    pub use crate::cart::{
        CartEngine, CartState, CartTotals, CouponBook, CouponOutcome, CouponRule, LineItem,
    };
    pub use crate::catalog::{Catalog, Product};
    pub use crate::notice::{Notice, NoticeBoard, NoticeKind, NoticeSettings};
    pub use crate::observer::{CartObserver, NoopObserver};
    pub use crate::shipping::{ShippingOption, ShippingOptions};
    pub use crate::storefront::{CartRow, CartView, Session, StorefrontView};
}
