//! The cart engine.

use crate::cart::{CartState, CartTotals, CouponBook, CouponOutcome, LineItem};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use crate::observer::{CartObserver, NoopObserver};
use crate::shipping::{ShippingOption, ShippingOptions};
use tracing::{debug, info};

/// Owns one session's cart and the tables it prices against.
///
/// Every mutation goes through `&mut self` and notifies the observer
/// synchronously before returning. Lookups by id that miss are no-ops.
#[derive(Debug)]
pub struct CartEngine<O = NoopObserver> {
    state: CartState,
    shipping: ShippingOptions,
    coupons: CouponBook,
    observer: O,
}

impl CartEngine<NoopObserver> {
    /// Create an engine with the standard tables and no observer.
    pub fn new() -> Self {
        Self::with_observer(NoopObserver)
    }
}

impl Default for CartEngine<NoopObserver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: CartObserver> CartEngine<O> {
    /// Create an engine with the standard tables.
    pub fn with_observer(observer: O) -> Self {
        Self::with_tables(ShippingOptions::standard(), CouponBook::standard(), observer)
    }

    /// Create an engine with caller-supplied tables.
    pub fn with_tables(shipping: ShippingOptions, coupons: CouponBook, observer: O) -> Self {
        let state = CartState::new(shipping.default_option().clone());
        Self {
            state,
            shipping,
            coupons,
            observer,
        }
    }

    /// Add one unit of a product.
    ///
    /// Merges into the existing line for the same id, otherwise appends
    /// a new line with quantity 1.
    pub fn add_item(&mut self, product: &Product) -> &[LineItem] {
        match self.state.item_mut(&product.id) {
            Some(existing) => {
                existing.set_quantity(existing.quantity.saturating_add(1));
                debug!(product_id = %product.id, quantity = existing.quantity, "increased line quantity");
            }
            None => {
                self.state.items.push(LineItem::from_product(product));
                debug!(product_id = %product.id, "added line item");
            }
        }
        self.items_mutated()
    }

    /// Remove the line for a product, if present.
    pub fn remove_item(&mut self, id: &ProductId) -> &[LineItem] {
        let len_before = self.state.items.len();
        self.state.items.retain(|i| &i.id != id);
        if self.state.items.len() < len_before {
            debug!(product_id = %id, "removed line item");
        }
        self.items_mutated()
    }

    /// Set a line's quantity. Values below 1 clamp to 1.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> &[LineItem] {
        if let Some(item) = self.state.item_mut(id) {
            item.set_quantity(quantity);
            debug!(product_id = %id, requested = quantity, quantity = item.quantity, "updated line quantity");
        }
        self.items_mutated()
    }

    /// Change a line's quantity by `delta`, as the "+" and "-" controls do.
    pub fn adjust_quantity(&mut self, id: &ProductId, delta: i64) -> &[LineItem] {
        let current = self.state.item(id).map(|i| i.quantity);
        match current {
            Some(quantity) => self.update_quantity(id, quantity.saturating_add(delta)),
            None => self.items_mutated(),
        }
    }

    /// Select a shipping option by id. Unknown ids leave the cart unchanged.
    pub fn set_shipping_method(&mut self, shipping_id: &str) -> &ShippingOption {
        if let Some(option) = self.shipping.find(shipping_id) {
            self.state.shipping_method = option.clone();
            debug!(shipping_id, price = %option.price, "selected shipping option");
            self.observer.shipping_changed(&self.state.shipping_method);
            self.update_total();
        } else {
            debug!(shipping_id, "ignored unknown shipping option");
        }
        &self.state.shipping_method
    }

    /// Sum of unit price times quantity over all items.
    pub fn calculate_subtotal(&self) -> Money {
        self.state.subtotal()
    }

    /// Try a coupon code.
    ///
    /// Any previously applied coupon is cleared first, so a failed attempt
    /// leaves the cart without a discount.
    pub fn apply_coupon(&mut self, code: &str) -> CouponOutcome {
        self.state.clear_coupon();

        let subtotal = self.calculate_subtotal();
        let outcome = self.coupons.evaluate(code, subtotal);
        if outcome.applied {
            self.state.coupon_code = outcome.code.clone();
            self.state.discount = outcome.discount;
        }
        info!(
            code = %code.trim(),
            applied = outcome.applied,
            discount = %outcome.discount,
            "coupon attempt"
        );

        self.observer.coupon_result(&outcome);
        self.update_total();
        outcome
    }

    /// Recompute the total and report it to the observer.
    pub fn update_total(&mut self) -> Money {
        let totals = self.totals();
        self.observer.totals_changed(&totals);
        totals.total
    }

    /// Re-send the full item list and totals, e.g. for the first render.
    pub fn refresh(&mut self) {
        self.items_mutated();
    }

    /// Current pricing breakdown.
    pub fn totals(&self) -> CartTotals {
        CartTotals::compute(
            self.calculate_subtotal(),
            self.state.shipping_method.price,
            self.state.discount,
        )
    }

    /// Items in cart order.
    pub fn items(&self) -> &[LineItem] {
        &self.state.items
    }

    /// Get an item by product id.
    pub fn item(&self, id: &ProductId) -> Option<&LineItem> {
        self.state.item(id)
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.state.item_count()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Currently selected shipping option.
    pub fn shipping_method(&self) -> &ShippingOption {
        &self.state.shipping_method
    }

    /// The shipping table.
    pub fn shipping_options(&self) -> &ShippingOptions {
        &self.shipping
    }

    /// The coupon table.
    pub fn coupons(&self) -> &CouponBook {
        &self.coupons
    }

    /// Full cart state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// The observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutable access to the observer.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consume the engine, returning its state and observer.
    pub fn into_parts(self) -> (CartState, O) {
        (self.state, self.observer)
    }

    fn items_mutated(&mut self) -> &[LineItem] {
        self.observer.items_changed(&self.state.items);
        self.update_total();
        &self.state.items
    }
}
