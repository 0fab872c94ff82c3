//! Coupon rules and evaluation.

use crate::error::CartError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Message for a known code whose minimum spend is not met.
pub const SPEND_MORE_MESSAGE: &str = "You need to spend more to use this coupon.";

/// Message for a code that matches no rule.
pub const INVALID_CODE_MESSAGE: &str = "Invalid coupon code";

/// A percentage-off coupon gated on a minimum subtotal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CouponRule {
    /// Normalized code (e.g., "SELL200").
    pub code: String,
    /// Subtotal required to use the coupon (inclusive).
    pub minimum_subtotal: Money,
    /// Percentage off the subtotal (1 - 100).
    pub percent_off: u32,
    /// Message shown when the coupon is applied.
    pub message: String,
}

impl CouponRule {
    /// Create a new rule. The code is normalized.
    pub fn new(
        code: &str,
        minimum_subtotal: Money,
        percent_off: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: normalize_code(code),
            minimum_subtotal,
            percent_off,
            message: message.into(),
        }
    }

    /// Discount this rule grants on a subtotal.
    pub fn discount_for(&self, subtotal: Money) -> Money {
        subtotal.percentage(self.percent_off)
    }
}

/// Result of a coupon attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CouponOutcome {
    /// Whether a discount is now in effect.
    pub applied: bool,
    /// Message for the shopper.
    pub message: String,
    /// The applied code, if any.
    pub code: Option<String>,
    /// Discount granted (zero on failure).
    pub discount: Money,
}

impl CouponOutcome {
    fn rejected(message: &str) -> Self {
        Self {
            applied: false,
            message: message.to_string(),
            code: None,
            discount: Money::zero(),
        }
    }
}

/// The ordered coupon rule table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CouponBook {
    rules: Vec<CouponRule>,
}

impl CouponBook {
    /// Build a rule table.
    ///
    /// Codes must be non-blank and unique after normalization,
    /// minimums non-negative, and percentages within 1..=100.
    pub fn new(rules: Vec<CouponRule>) -> Result<Self, CartError> {
        for (i, rule) in rules.iter().enumerate() {
            if rule.code.is_empty() {
                return Err(CartError::ValidationError(
                    "coupon code must not be blank".to_string(),
                ));
            }
            if rule.minimum_subtotal.is_negative() {
                return Err(CartError::NegativeAmount {
                    id: rule.code.clone(),
                    amount_cents: rule.minimum_subtotal.amount_cents,
                });
            }
            if !(1..=100).contains(&rule.percent_off) {
                return Err(CartError::InvalidPercentage {
                    code: rule.code.clone(),
                    percent: rule.percent_off,
                });
            }
            if rules[..i].iter().any(|r| r.code == rule.code) {
                return Err(CartError::DuplicateCoupon(rule.code.clone()));
            }
        }
        Ok(Self { rules })
    }

    /// The storefront's promotion: SELL200 and SUMMER50.
    pub fn standard() -> Self {
        Self {
            rules: vec![
                CouponRule::new("SELL200", Money::dollars(200), 20, "20% discount applied!"),
                CouponRule::new("SUMMER50", Money::dollars(100), 10, "10% discount applied!"),
            ],
        }
    }

    /// Evaluate a raw code against a subtotal.
    ///
    /// The first rule whose code matches and whose minimum is met wins.
    /// A matching code below its minimum asks the shopper to spend more;
    /// anything else is invalid.
    pub fn evaluate(&self, raw_code: &str, subtotal: Money) -> CouponOutcome {
        let code = normalize_code(raw_code);

        if let Some(rule) = self
            .rules
            .iter()
            .find(|r| r.code == code && subtotal >= r.minimum_subtotal)
        {
            return CouponOutcome {
                applied: true,
                message: rule.message.clone(),
                code: Some(rule.code.clone()),
                discount: rule.discount_for(subtotal),
            };
        }

        if self.rules.iter().any(|r| r.code == code) {
            CouponOutcome::rejected(SPEND_MORE_MESSAGE)
        } else {
            CouponOutcome::rejected(INVALID_CODE_MESSAGE)
        }
    }

    /// All rules, in evaluation order.
    pub fn rules(&self) -> &[CouponRule] {
        &self.rules
    }
}

impl Default for CouponBook {
    fn default() -> Self {
        Self::standard()
    }
}

/// Normalize a coupon code: trim and uppercase.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sell200_applies_at_threshold() {
        let book = CouponBook::standard();
        let outcome = book.evaluate("SELL200", Money::dollars(200));
        assert!(outcome.applied);
        assert_eq!(outcome.discount, Money::dollars(40));
        assert_eq!(outcome.message, "20% discount applied!");
        assert_eq!(outcome.code.as_deref(), Some("SELL200"));
    }

    #[test]
    fn test_summer50_normalized() {
        let book = CouponBook::standard();
        let outcome = book.evaluate("  summer50 ", Money::dollars(120));
        assert!(outcome.applied);
        assert_eq!(outcome.discount, Money::dollars(12));
        assert_eq!(outcome.message, "10% discount applied!");
    }

    #[test]
    fn test_known_code_below_minimum() {
        let book = CouponBook::standard();
        let outcome = book.evaluate("SUMMER50", Money::new(9999));
        assert!(!outcome.applied);
        assert_eq!(outcome.discount, Money::zero());
        assert_eq!(outcome.message, SPEND_MORE_MESSAGE);
        assert_eq!(outcome.code, None);
    }

    #[test]
    fn test_unknown_code() {
        let book = CouponBook::standard();
        let outcome = book.evaluate("FREESTUFF", Money::dollars(1000));
        assert!(!outcome.applied);
        assert_eq!(outcome.message, INVALID_CODE_MESSAGE);

        let outcome = book.evaluate("", Money::dollars(1000));
        assert_eq!(outcome.message, INVALID_CODE_MESSAGE);
    }

    #[test]
    fn test_book_validation() {
        assert!(matches!(
            CouponBook::new(vec![CouponRule::new("X", Money::zero(), 0, "none")]),
            Err(CartError::InvalidPercentage { percent: 0, .. })
        ));
        assert!(matches!(
            CouponBook::new(vec![CouponRule::new("X", Money::zero(), 101, "too much")]),
            Err(CartError::InvalidPercentage { percent: 101, .. })
        ));
        assert_eq!(
            CouponBook::new(vec![
                CouponRule::new("deal", Money::zero(), 5, "a"),
                CouponRule::new("DEAL ", Money::zero(), 10, "b"),
            ]),
            Err(CartError::DuplicateCoupon("DEAL".to_string()))
        );
        assert!(matches!(
            CouponBook::new(vec![CouponRule::new("   ", Money::zero(), 5, "blank")]),
            Err(CartError::ValidationError(_))
        ));
    }
}
