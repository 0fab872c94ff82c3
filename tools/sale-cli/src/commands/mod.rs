//! CLI command implementations.

pub mod catalog;
pub mod init;
pub mod quote;
pub mod run;

use std::path::PathBuf;

use clap::Args;
use sale_cart::cart::CartTotals;
use sale_cart::notice::Notice;
use sale_cart::storefront::{CartView, Session};
use serde::Serialize;

use crate::context::Context;

/// Arguments for the init command.
#[derive(Args)]
pub struct InitArgs {
    /// Where to write the config file.
    #[arg(short, long, default_value = "storefront.toml")]
    pub path: PathBuf,

    /// Store name.
    #[arg(short, long, default_value = "Summer Sale")]
    pub name: String,

    /// Overwrite an existing file.
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only list products.
    #[arg(long)]
    pub products_only: bool,
}

/// Arguments for the quote command.
#[derive(Args)]
pub struct QuoteArgs {
    /// Product id to add (repeat to add more units or products).
    #[arg(short, long = "add", value_name = "PRODUCT")]
    pub add: Vec<String>,

    /// Shipping option id.
    #[arg(short, long)]
    pub shipping: Option<String>,

    /// Coupon code to apply.
    #[arg(short = 'k', long)]
    pub coupon: Option<String>,
}

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Session script (TOML or JSON).
    pub script: PathBuf,

    /// Print the cart after every step.
    #[arg(long)]
    pub trace_steps: bool,
}

/// Machine-readable cart snapshot for `--json`.
#[derive(Serialize)]
pub struct CartReport<'a> {
    pub cart: &'a CartView,
    pub totals: CartTotals,
    pub notices: &'a [Notice],
}

impl<'a> CartReport<'a> {
    pub fn from_session(session: &'a Session) -> Self {
        Self {
            cart: session.view(),
            totals: session.totals(),
            notices: session.notices(),
        }
    }
}

/// Print the session's cart, as a table or JSON.
pub fn print_cart(session: &Session, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&CartReport::from_session(session));
    } else {
        ctx.output.cart(session.view());
    }
}
