//! One-shot cart quote.

use anyhow::Result;
use sale_cart::ProductId;

use super::{print_cart, QuoteArgs};
use crate::context::Context;

/// Run the quote command.
pub fn run(args: QuoteArgs, ctx: &Context) -> Result<()> {
    let mut session = ctx.config.session()?;

    for id in &args.add {
        session.add_to_cart(&ProductId::new(id.as_str()), 0)?;
    }

    if let Some(shipping) = &args.shipping {
        let selected = session.choose_shipping(shipping, 0);
        if selected.id.as_str() != shipping.as_str() {
            ctx.output
                .warn(&format!("Unknown shipping option '{}', keeping {}", shipping, selected.name));
        }
    }

    if let Some(code) = &args.coupon {
        if let Some(outcome) = session.submit_coupon(code, 0) {
            if outcome.applied {
                ctx.output.success(&outcome.message);
            } else {
                ctx.output.warn(&outcome.message);
            }
        }
    }

    ctx.output.header(&ctx.config.store.name);
    print_cart(&session, ctx);
    Ok(())
}
