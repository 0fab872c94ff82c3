//! Storefront adapter: the page-facing side of the cart.
//!
//! `StorefrontView` is a [`CartObserver`] that keeps a render-ready
//! [`CartView`] and the page's [`NoticeBoard`] up to date. `Session` ties
//! it to a catalog and an engine and exposes the operations the page's
//! buttons trigger.

use crate::cart::{CartEngine, CartTotals, CouponBook, CouponOutcome, LineItem};
use crate::catalog::Catalog;
use crate::error::CartError;
use crate::ids::ProductId;
use crate::notice::{Notice, NoticeBoard, NoticeKind, NoticeSettings};
use crate::observer::CartObserver;
use crate::shipping::{ShippingOption, ShippingOptions};
use serde::Serialize;
use tracing::debug;

/// Placeholder shown instead of rows when the cart is empty.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty";

/// Notice posted when the coupon field is submitted blank.
pub const BLANK_COUPON_MESSAGE: &str = "Please enter a coupon code";

/// One rendered cart row. Amounts are formatted without a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartRow {
    pub id: ProductId,
    pub name: String,
    pub image_ref: Option<String>,
    pub unit_price: String,
    pub quantity: i64,
    pub line_total: String,
}

impl CartRow {
    fn from_item(item: &LineItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            image_ref: item.image_ref.clone(),
            unit_price: item.unit_price.display_amount(),
            quantity: item.quantity,
            line_total: item.total().display_amount(),
        }
    }
}

/// What the cart panel shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub rows: Vec<CartRow>,
    /// Set when there are no rows.
    pub placeholder: Option<String>,
    pub shipping_name: String,
    pub subtotal: String,
    pub shipping: String,
    pub discount: String,
    pub total: String,
}

impl CartView {
    fn new(shipping: &ShippingOption) -> Self {
        let zero = CartTotals::default();
        Self {
            rows: Vec::new(),
            placeholder: Some(EMPTY_CART_MESSAGE.to_string()),
            shipping_name: shipping.name.clone(),
            subtotal: zero.subtotal.display_amount(),
            shipping: shipping.price.display_amount(),
            discount: zero.discount.display_amount(),
            total: zero.total.display_amount(),
        }
    }
}

/// Observer that maintains the cart panel and notices.
#[derive(Debug, Clone)]
pub struct StorefrontView {
    view: CartView,
    notices: NoticeBoard,
    settings: NoticeSettings,
    now_ms: u64,
    /// The coupon field's message slot holds one notice at a time.
    coupon_notice: Option<u64>,
}

impl StorefrontView {
    /// Create a view for a cart starting on `shipping`.
    pub fn new(shipping: &ShippingOption, settings: NoticeSettings) -> Self {
        Self {
            view: CartView::new(shipping),
            notices: NoticeBoard::new(),
            settings,
            now_ms: 0,
            coupon_notice: None,
        }
    }

    /// Move the clock forward and drop expired notices.
    ///
    /// The clock never runs backwards; an earlier `now_ms` is ignored.
    pub fn advance(&mut self, now_ms: u64) -> Vec<Notice> {
        self.now_ms = self.now_ms.max(now_ms);
        self.notices.expire(self.now_ms)
    }

    /// Post a notice at the current clock.
    pub fn post(&mut self, kind: NoticeKind, text: impl Into<String>, ttl_ms: u64) -> u64 {
        self.notices.post(kind, text, self.now_ms, ttl_ms)
    }

    /// Post a coupon-field message, replacing the previous one.
    pub fn post_coupon_notice(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        if let Some(previous) = self.coupon_notice.take() {
            self.notices.dismiss(previous);
        }
        let ttl = self.settings.coupon_ttl_ms;
        let id = self.post(kind, text, ttl);
        self.coupon_notice = Some(id);
        id
    }

    /// The cart panel.
    pub fn view(&self) -> &CartView {
        &self.view
    }

    /// Notices on screen.
    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    /// Mutable access to the notices.
    pub fn notices_mut(&mut self) -> &mut NoticeBoard {
        &mut self.notices
    }

    /// Notice lifetimes.
    pub fn settings(&self) -> &NoticeSettings {
        &self.settings
    }

    /// Current clock.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }
}

impl CartObserver for StorefrontView {
    fn items_changed(&mut self, items: &[LineItem]) {
        self.view.rows = items.iter().map(CartRow::from_item).collect();
        self.view.placeholder = items
            .is_empty()
            .then(|| EMPTY_CART_MESSAGE.to_string());
    }

    fn shipping_changed(&mut self, option: &ShippingOption) {
        self.view.shipping_name = option.name.clone();
        self.view.shipping = option.price.display_amount();
    }

    fn coupon_result(&mut self, outcome: &CouponOutcome) {
        let kind = if outcome.applied {
            NoticeKind::Success
        } else {
            NoticeKind::Failure
        };
        self.post_coupon_notice(kind, outcome.message.clone());
        self.view.discount = outcome.discount.display_amount();
    }

    fn totals_changed(&mut self, totals: &CartTotals) {
        self.view.subtotal = totals.subtotal.display_amount();
        self.view.shipping = totals.shipping.display_amount();
        self.view.discount = totals.discount.display_amount();
        self.view.total = totals.total.display_amount();
    }
}

/// A shopper's visit: the page catalog plus its cart.
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    engine: CartEngine<StorefrontView>,
}

impl Session {
    /// Start a session with configured tables.
    pub fn new(
        catalog: Catalog,
        shipping: ShippingOptions,
        coupons: CouponBook,
        settings: NoticeSettings,
    ) -> Self {
        let view = StorefrontView::new(shipping.default_option(), settings);
        let mut engine = CartEngine::with_tables(shipping, coupons, view);
        engine.refresh();
        Self { catalog, engine }
    }

    /// Start a session with the standard shipping and coupon tables.
    pub fn standard(catalog: Catalog) -> Self {
        Self::new(
            catalog,
            ShippingOptions::standard(),
            CouponBook::standard(),
            NoticeSettings::default(),
        )
    }

    /// Add one unit of a catalog product and announce it.
    pub fn add_to_cart(&mut self, id: &ProductId, now_ms: u64) -> Result<&[LineItem], CartError> {
        self.tick(now_ms);
        let product = self.catalog.require(id)?;
        self.engine.add_item(product);

        let text = format!(
            "Added to cart: {} - {}",
            product.name,
            product.unit_price.display()
        );
        let view = self.engine.observer_mut();
        let ttl = view.settings().cart_ttl_ms;
        view.post(NoticeKind::Info, text, ttl);

        Ok(self.engine.items())
    }

    /// Remove a product's line.
    pub fn remove(&mut self, id: &ProductId, now_ms: u64) -> &[LineItem] {
        self.tick(now_ms);
        self.engine.remove_item(id)
    }

    /// Set a line's quantity (clamped to at least 1).
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64, now_ms: u64) -> &[LineItem] {
        self.tick(now_ms);
        self.engine.update_quantity(id, quantity)
    }

    /// The "+" control.
    pub fn increment(&mut self, id: &ProductId, now_ms: u64) -> &[LineItem] {
        self.tick(now_ms);
        self.engine.adjust_quantity(id, 1)
    }

    /// The "-" control. Stops at 1.
    pub fn decrement(&mut self, id: &ProductId, now_ms: u64) -> &[LineItem] {
        self.tick(now_ms);
        self.engine.adjust_quantity(id, -1)
    }

    /// Pick a shipping option.
    pub fn choose_shipping(&mut self, shipping_id: &str, now_ms: u64) -> &ShippingOption {
        self.tick(now_ms);
        self.engine.set_shipping_method(shipping_id)
    }

    /// Submit the coupon field.
    ///
    /// Blank input only posts a reminder and leaves any applied coupon in
    /// place; returns `None` in that case.
    pub fn submit_coupon(&mut self, raw: &str, now_ms: u64) -> Option<CouponOutcome> {
        self.tick(now_ms);
        if raw.trim().is_empty() {
            self.engine
                .observer_mut()
                .post_coupon_notice(NoticeKind::Failure, BLANK_COUPON_MESSAGE);
            return None;
        }
        Some(self.engine.apply_coupon(raw))
    }

    /// Dismiss a notice by id.
    pub fn dismiss_notice(&mut self, id: u64, now_ms: u64) -> bool {
        self.tick(now_ms);
        self.engine.observer_mut().notices_mut().dismiss(id)
    }

    /// Advance the clock, returning notices that timed out.
    pub fn tick(&mut self, now_ms: u64) -> Vec<Notice> {
        let expired = self.engine.observer_mut().advance(now_ms);
        if !expired.is_empty() {
            debug!(count = expired.len(), now_ms, "notices expired");
        }
        expired
    }

    /// The cart panel.
    pub fn view(&self) -> &CartView {
        self.engine.observer().view()
    }

    /// Notices on screen.
    pub fn notices(&self) -> &[Notice] {
        self.engine.observer().notices().active()
    }

    /// Current pricing breakdown.
    pub fn totals(&self) -> CartTotals {
        self.engine.totals()
    }

    /// The page catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The underlying engine.
    pub fn engine(&self) -> &CartEngine<StorefrontView> {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::Money;

    fn session() -> Session {
        let catalog = Catalog::new(vec![
            Product::new("towel", "Beach Towel", Money::from_decimal(24.99)).with_image("towel.png"),
            Product::new("cooler", "Cooler Box", Money::dollars(120)),
        ])
        .unwrap();
        Session::standard(catalog)
    }

    #[test]
    fn test_initial_view_is_empty() {
        let s = session();
        let view = s.view();
        assert!(view.rows.is_empty());
        assert_eq!(view.placeholder.as_deref(), Some(EMPTY_CART_MESSAGE));
        assert_eq!(view.shipping_name, "Free Shipping");
        assert_eq!(view.total, "0.00");
    }

    #[test]
    fn test_add_to_cart_renders_and_announces() {
        let mut s = session();
        s.add_to_cart(&"towel".into(), 0).unwrap();
        s.add_to_cart(&"towel".into(), 10).unwrap();

        let view = s.view();
        assert_eq!(view.placeholder, None);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].quantity, 2);
        assert_eq!(view.rows[0].unit_price, "24.99");
        assert_eq!(view.rows[0].line_total, "49.98");
        assert_eq!(view.subtotal, "49.98");

        let notices = s.notices();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].text, "Added to cart: Beach Towel - $24.99");
        assert_eq!(notices[0].kind, NoticeKind::Info);
    }

    #[test]
    fn test_add_unknown_product() {
        let mut s = session();
        let err = s.add_to_cart(&"parasol".into(), 0).unwrap_err();
        assert_eq!(err, CartError::UnknownProduct("parasol".to_string()));
        assert!(s.notices().is_empty());
    }

    #[test]
    fn test_coupon_notices_and_expiry() {
        let mut s = session();
        s.add_to_cart(&"cooler".into(), 0).unwrap();
        let outcome = s.submit_coupon("summer50", 100).unwrap();
        assert!(outcome.applied);
        assert_eq!(s.view().discount, "12.00");
        assert_eq!(s.view().total, "108.00");

        let latest = s.engine().observer().notices().latest().unwrap();
        assert_eq!(latest.kind, NoticeKind::Success);
        assert_eq!(latest.text, "10% discount applied!");

        // coupon notice (3s) goes first, cart notice (8s) later
        let expired = s.tick(3_100);
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].text, "10% discount applied!");
        assert_eq!(s.tick(8_000).len(), 1);
        assert!(s.notices().is_empty());
    }

    #[test]
    fn test_blank_coupon_keeps_discount() {
        let mut s = session();
        s.add_to_cart(&"cooler".into(), 0).unwrap();
        s.submit_coupon("SUMMER50", 0);
        assert_eq!(s.submit_coupon("   ", 0), None);
        assert_eq!(s.totals().discount, Money::dollars(12));
        let latest = s.engine().observer().notices().latest().unwrap();
        assert_eq!(latest.text, BLANK_COUPON_MESSAGE);
        assert_eq!(latest.kind, NoticeKind::Failure);
    }

    #[test]
    fn test_coupon_message_replaces_previous() {
        let mut s = session();
        s.add_to_cart(&"cooler".into(), 0).unwrap();
        s.submit_coupon("NOPE", 100);
        s.submit_coupon("SUMMER50", 200);

        let coupon_texts: Vec<&str> = s
            .notices()
            .iter()
            .filter(|n| n.kind != NoticeKind::Info)
            .map(|n| n.text.as_str())
            .collect();
        assert_eq!(coupon_texts, ["10% discount applied!"]);

        s.submit_coupon("", 300);
        let latest = s.engine().observer().notices().latest().unwrap();
        assert_eq!(latest.text, BLANK_COUPON_MESSAGE);
        assert_eq!(s.notices().len(), 2);
    }

    #[test]
    fn test_quantity_controls_and_removal() {
        let mut s = session();
        let towel: ProductId = "towel".into();
        s.add_to_cart(&towel, 0).unwrap();
        s.increment(&towel, 0);
        s.increment(&towel, 0);
        assert_eq!(s.view().rows[0].quantity, 3);
        s.decrement(&towel, 0);
        s.set_quantity(&towel, 0, 0);
        assert_eq!(s.view().rows[0].quantity, 1);

        s.remove(&towel, 0);
        assert_eq!(s.view().placeholder.as_deref(), Some(EMPTY_CART_MESSAGE));
        assert_eq!(s.view().subtotal, "0.00");
    }

    #[test]
    fn test_choose_shipping_updates_view() {
        let mut s = session();
        s.add_to_cart(&"cooler".into(), 0).unwrap();
        assert_eq!(s.choose_shipping("express", 0).name, "Express Shipping");
        assert_eq!(s.view().shipping_name, "Express Shipping");
        assert_eq!(s.view().shipping, "15.00");
        assert_eq!(s.view().total, "135.00");

        s.choose_shipping("nope", 0);
        assert_eq!(s.view().shipping_name, "Express Shipping");
    }

    #[test]
    fn test_dismiss_notice() {
        let mut s = session();
        s.add_to_cart(&"towel".into(), 0).unwrap();
        let id = s.notices()[0].id;
        assert!(s.dismiss_notice(id, 500));
        assert!(!s.dismiss_notice(id, 9_000));
    }

    #[test]
    fn test_clock_does_not_run_backwards() {
        let mut s = session();
        s.tick(5_000);
        s.add_to_cart(&"towel".into(), 1_000).unwrap();
        assert_eq!(s.notices()[0].posted_at_ms, 5_000);
    }
}
