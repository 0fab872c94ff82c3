//! Shipping option types.

use crate::error::CartError;
use crate::ids::ShippingOptionId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A shipping method option.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingOption {
    /// Unique identifier.
    pub id: ShippingOptionId,
    /// Display name.
    pub name: String,
    /// Shipping price.
    pub price: Money,
}

impl ShippingOption {
    /// Create a new shipping option.
    pub fn new(id: impl Into<ShippingOptionId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }

    /// Check if this is free shipping.
    pub fn is_free(&self) -> bool {
        self.price.is_zero()
    }
}

/// The fixed set of shipping options offered at checkout.
///
/// Immutable once built. The default option is the first free one, or
/// the first option when nothing is free.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ShippingOptions {
    options: Vec<ShippingOption>,
    default_index: usize,
}

impl ShippingOptions {
    /// Build a shipping table.
    pub fn new(options: Vec<ShippingOption>) -> Result<Self, CartError> {
        if options.is_empty() {
            return Err(CartError::EmptyShippingTable);
        }
        for (i, option) in options.iter().enumerate() {
            if option.price.is_negative() {
                return Err(CartError::NegativeAmount {
                    id: option.id.to_string(),
                    amount_cents: option.price.amount_cents,
                });
            }
            if options[..i].iter().any(|o| o.id == option.id) {
                return Err(CartError::DuplicateShippingOption(option.id.to_string()));
            }
        }
        let default_index = options.iter().position(ShippingOption::is_free).unwrap_or(0);
        Ok(Self {
            options,
            default_index,
        })
    }

    /// The storefront's standard table: free, standard ($5), express ($15).
    pub fn standard() -> Self {
        Self {
            options: vec![
                ShippingOption::new("free", "Free Shipping", Money::zero()),
                ShippingOption::new("standard", "Standard Shipping", Money::dollars(5)),
                ShippingOption::new("express", "Express Shipping", Money::dollars(15)),
            ],
            default_index: 0,
        }
    }

    /// Find an option by id.
    pub fn find(&self, id: &str) -> Option<&ShippingOption> {
        self.options.iter().find(|o| o.id.as_str() == id)
    }

    /// The option a new cart starts with.
    pub fn default_option(&self) -> &ShippingOption {
        &self.options[self.default_index]
    }

    /// All options, in display order.
    pub fn options(&self) -> &[ShippingOption] {
        &self.options
    }
}

impl Default for ShippingOptions {
    fn default() -> Self {
        Self::standard()
    }
}
