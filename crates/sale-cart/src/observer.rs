//! Observer interface between the cart engine and whatever renders it.
//!
//! The engine never touches presentation directly. After each mutation it
//! calls the hooks below, in this order:
//!
//! - item mutations: `items_changed`, then `totals_changed`
//! - shipping change: `shipping_changed`, then `totals_changed`
//! - coupon attempt: `coupon_result`, then `totals_changed`
//! - `update_total`: `totals_changed`

use crate::cart::{CartTotals, CouponOutcome, LineItem};
use crate::shipping::ShippingOption;

/// Receives cart change notifications. All hooks default to no-ops.
pub trait CartObserver {
    /// The item list changed; `items` is the full list in cart order.
    fn items_changed(&mut self, _items: &[LineItem]) {}

    /// A new shipping option was selected.
    fn shipping_changed(&mut self, _option: &ShippingOption) {}

    /// A coupon attempt finished.
    fn coupon_result(&mut self, _outcome: &CouponOutcome) {}

    /// Totals were recomputed.
    fn totals_changed(&mut self, _totals: &CartTotals) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CartObserver for NoopObserver {}

impl<O: CartObserver + ?Sized> CartObserver for &mut O {
    fn items_changed(&mut self, items: &[LineItem]) {
        (**self).items_changed(items);
    }

    fn shipping_changed(&mut self, option: &ShippingOption) {
        (**self).shipping_changed(option);
    }

    fn coupon_result(&mut self, outcome: &CouponOutcome) {
        (**self).coupon_result(outcome);
    }

    fn totals_changed(&mut self, totals: &CartTotals) {
        (**self).totals_changed(totals);
    }
}

impl<O: CartObserver + ?Sized> CartObserver for Box<O> {
    fn items_changed(&mut self, items: &[LineItem]) {
        (**self).items_changed(items);
    }

    fn shipping_changed(&mut self, option: &ShippingOption) {
        (**self).shipping_changed(option);
    }

    fn coupon_result(&mut self, outcome: &CouponOutcome) {
        (**self).coupon_result(outcome);
    }

    fn totals_changed(&mut self, totals: &CartTotals) {
        (**self).totals_changed(totals);
    }
}
