//! List what the storefront offers.

use anyhow::Result;
use serde::Serialize;

use super::CatalogArgs;
use crate::context::Context;
use sale_cart::cart::CouponRule;
use sale_cart::catalog::Product;
use sale_cart::shipping::ShippingOption;

#[derive(Serialize)]
struct CatalogReport<'a> {
    store: &'a str,
    products: &'a [Product],
    #[serde(skip_serializing_if = "Option::is_none")]
    shipping: Option<&'a [ShippingOption]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    coupons: Option<&'a [CouponRule]>,
}

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.config.catalog()?;
    let shipping = ctx.config.shipping_options()?;
    let coupons = ctx.config.coupon_book()?;

    if ctx.output.is_json() {
        let report = CatalogReport {
            store: &ctx.config.store.name,
            products: catalog.products(),
            shipping: (!args.products_only).then(|| shipping.options()),
            coupons: (!args.products_only).then(|| coupons.rules()),
        };
        ctx.output.json(&report);
        return Ok(());
    }

    ctx.output.header(&ctx.config.store.name);
    if catalog.is_empty() {
        ctx.output.warn("No products configured");
    } else {
        let widths = [20, 24, 10];
        ctx.output.table_row(&["ID", "Name", "Price"], &widths);
        for product in catalog.products() {
            let price = product.unit_price.display();
            ctx.output.table_row(
                &[product.id.as_str(), product.name.as_str(), price.as_str()],
                &widths,
            );
        }
    }

    if args.products_only {
        return Ok(());
    }

    ctx.output.header("Shipping");
    for option in shipping.options() {
        let marker = if option.id == shipping.default_option().id {
            " (default)"
        } else {
            ""
        };
        ctx.output.kv(
            option.id.as_str(),
            &format!("{} {}{}", option.name, option.price.display(), marker),
        );
    }

    ctx.output.header("Coupons");
    for rule in coupons.rules() {
        ctx.output.list_item(&format!(
            "{}: {}% off orders of {} or more",
            rule.code,
            rule.percent_off,
            rule.minimum_subtotal.display()
        ));
    }

    Ok(())
}
