//! Storefront configuration.

use anyhow::{bail, Context, Result};
use sale_cart::cart::{CouponBook, CouponRule};
use sale_cart::catalog::{Catalog, Product};
use sale_cart::notice::NoticeSettings;
use sale_cart::shipping::{ShippingOption, ShippingOptions};
use sale_cart::storefront::Session;
use sale_cart::{Money, ProductId};
use serde::{Deserialize, Serialize};

/// Storefront configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Page metadata.
    #[serde(default)]
    pub store: StoreInfo,

    /// Products on the page.
    #[serde(default)]
    pub products: Vec<ProductConfig>,

    /// Shipping options (defaults to free / standard / express).
    #[serde(default = "default_shipping")]
    pub shipping: Vec<ShippingConfig>,

    /// Coupon rules, in evaluation order (defaults to SELL200 / SUMMER50).
    #[serde(default = "default_coupons")]
    pub coupons: Vec<CouponConfig>,

    /// Notice lifetimes.
    #[serde(default)]
    pub notices: NoticeSettings,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store: StoreInfo::default(),
            products: Vec::new(),
            shipping: default_shipping(),
            coupons: default_coupons(),
            notices: NoticeSettings::default(),
        }
    }
}

impl StoreConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            Self::from_toml(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Parse a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Build the product catalog.
    pub fn catalog(&self) -> Result<Catalog> {
        let products = self
            .products
            .iter()
            .map(ProductConfig::to_product)
            .collect::<Result<Vec<_>>>()?;
        Ok(Catalog::new(products)?)
    }

    /// Build the shipping table.
    pub fn shipping_options(&self) -> Result<ShippingOptions> {
        let options = self
            .shipping
            .iter()
            .map(|s| -> Result<ShippingOption> {
                Ok(ShippingOption::new(s.id.as_str(), s.name.as_str(), money(&s.id, s.price)?))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(ShippingOptions::new(options)?)
    }

    /// Build the coupon table.
    pub fn coupon_book(&self) -> Result<CouponBook> {
        let rules = self
            .coupons
            .iter()
            .map(|c| -> Result<CouponRule> {
                Ok(CouponRule::new(
                    &c.code,
                    money(&c.code, c.minimum)?,
                    c.percent_off,
                    c.message.as_str(),
                ))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(CouponBook::new(rules)?)
    }

    /// Start a cart session from this configuration.
    pub fn session(&self) -> Result<Session> {
        Ok(Session::new(
            self.catalog()?,
            self.shipping_options()?,
            self.coupon_book()?,
            self.notices,
        ))
    }
}

/// Page metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreInfo {
    /// Store name shown in headers.
    #[serde(default = "default_store_name")]
    pub name: String,
}

impl Default for StoreInfo {
    fn default() -> Self {
        Self {
            name: default_store_name(),
        }
    }
}

fn default_store_name() -> String {
    "Summer Sale".to_string()
}

/// A product entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductConfig {
    /// Product id (derived from the name when omitted).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name.
    pub name: String,

    /// Unit price in dollars.
    pub price: f64,

    /// Image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ProductConfig {
    fn to_product(&self) -> Result<Product> {
        let id = match &self.id {
            Some(id) => ProductId::new(id.as_str()),
            None => ProductId::from_name(&self.name),
        };
        let price = money(id.as_str(), self.price)?;
        let product = Product::new(id, self.name.as_str(), price);
        Ok(match &self.image {
            Some(image) => product.with_image(image.as_str()),
            None => product,
        })
    }
}

/// A shipping option entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingConfig {
    pub id: String,
    pub name: String,
    /// Price in dollars.
    pub price: f64,
}

fn default_shipping() -> Vec<ShippingConfig> {
    ShippingOptions::standard()
        .options()
        .iter()
        .map(|o| ShippingConfig {
            id: o.id.to_string(),
            name: o.name.clone(),
            price: o.price.to_decimal(),
        })
        .collect()
}

/// A coupon rule entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponConfig {
    pub code: String,
    /// Minimum subtotal in dollars.
    #[serde(default)]
    pub minimum: f64,
    pub percent_off: u32,
    pub message: String,
}

fn default_coupons() -> Vec<CouponConfig> {
    CouponBook::standard()
        .rules()
        .iter()
        .map(|r| CouponConfig {
            code: r.code.clone(),
            minimum: r.minimum_subtotal.to_decimal(),
            percent_off: r.percent_off,
            message: r.message.clone(),
        })
        .collect()
}

fn money(id: &str, dollars: f64) -> Result<Money> {
    match Money::checked_from_decimal(dollars) {
        Some(amount) => Ok(amount),
        None => bail!("Amount for '{}' is out of range: {}", id, dollars),
    }
}

/// Generate a default storefront.toml.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# Storefront configuration

[store]
name = "{name}"

[[products]]
name = "Beach Towel"
price = 24.99
image = "images/towel.png"

[[products]]
name = "Sun Hat"
price = 18.00
image = "images/hat.png"

[[products]]
id = "kayak"
name = "Inflatable Kayak"
price = 189.50
image = "images/kayak.png"

[[shipping]]
id = "free"
name = "Free Shipping"
price = 0.0

[[shipping]]
id = "standard"
name = "Standard Shipping"
price = 5.0

[[shipping]]
id = "express"
name = "Express Shipping"
price = 15.0

[[coupons]]
code = "SELL200"
minimum = 200.0
percent_off = 20
message = "20% discount applied!"

[[coupons]]
code = "SUMMER50"
minimum = 100.0
percent_off = 10
message = "10% discount applied!"

[notices]
coupon_ttl_ms = 3000
cart_ttl_ms = 8000
"#,
        name = name
    )
}
