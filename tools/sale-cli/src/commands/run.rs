//! Replay a scripted shopping session.
//!
//! A script is a list of steps, each one a button the shopper pressed.
//! The session clock starts at 0 and only moves on `wait` steps, so
//! notice expiry is reproducible.
//!
//! ```toml
//! [[steps]]
//! action = "add"
//! product = "beach-towel"
//!
//! [[steps]]
//! action = "wait"
//! ms = 3500
//!
//! [[steps]]
//! action = "coupon"
//! code = "summer50"
//! ```

use std::path::Path;

use anyhow::{Context as _, Result};
use sale_cart::storefront::Session;
use sale_cart::ProductId;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{print_cart, RunArgs};
use crate::context::Context;

/// A session script.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    /// Load a script from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON script: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML script: {}", path.display()))
        }
    }
}

/// One shopper action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Click "add to cart".
    Add { product: String },
    /// Click the remove button on a row.
    Remove { product: String },
    /// Type a quantity.
    Quantity { product: String, quantity: i64 },
    /// Click "+".
    Increment { product: String },
    /// Click "-".
    Decrement { product: String },
    /// Pick a shipping option.
    Shipping { option: String },
    /// Submit the coupon field.
    Coupon { code: String },
    /// Click OK on a notice; the newest one when no id is given.
    Dismiss {
        #[serde(default)]
        notice: Option<u64>,
    },
    /// Let time pass.
    Wait { ms: u64 },
}

/// Run the run command.
pub fn run(args: RunArgs, ctx: &Context) -> Result<()> {
    let script = Script::load(&args.script)?;
    let mut session = ctx.config.session()?;

    info!(steps = script.steps.len(), script = %args.script.display(), "replaying session");
    let mut clock = 0;
    for (index, step) in script.steps.iter().enumerate() {
        debug!(index, ?step, clock, "step");
        clock = apply_step(&mut session, step, clock, ctx)?;
        if args.trace_steps && !ctx.output.is_json() {
            ctx.output.header(&format!("After step {}", index + 1));
            ctx.output.cart(session.view());
        }
    }

    ctx.output.header(&ctx.config.store.name);
    if !ctx.output.is_json() {
        for notice in session.notices() {
            ctx.output.notice(notice);
        }
    }
    print_cart(&session, ctx);
    Ok(())
}

/// Apply one step at `clock`, returning the clock afterwards.
fn apply_step(session: &mut Session, step: &Step, clock: u64, ctx: &Context) -> Result<u64> {
    let posted_before = session.notices().last().map(|n| n.id);

    match step {
        Step::Add { product } => {
            session.add_to_cart(&ProductId::new(product.as_str()), clock)?;
        }
        Step::Remove { product } => {
            session.remove(&ProductId::new(product.as_str()), clock);
        }
        Step::Quantity { product, quantity } => {
            session.set_quantity(&ProductId::new(product.as_str()), *quantity, clock);
        }
        Step::Increment { product } => {
            session.increment(&ProductId::new(product.as_str()), clock);
        }
        Step::Decrement { product } => {
            session.decrement(&ProductId::new(product.as_str()), clock);
        }
        Step::Shipping { option } => {
            let selected = session.choose_shipping(option, clock);
            if selected.id.as_str() != option.as_str() {
                ctx.output
                    .warn(&format!("Unknown shipping option '{}'", option));
            }
        }
        Step::Coupon { code } => {
            session.submit_coupon(code, clock);
        }
        Step::Dismiss { notice } => {
            let target = notice.or_else(|| session.notices().last().map(|n| n.id));
            let dismissed = target.is_some_and(|id| session.dismiss_notice(id, clock));
            if !dismissed {
                ctx.output.warn("Nothing to dismiss");
            }
        }
        Step::Wait { ms } => {
            let now = clock.saturating_add(*ms);
            for expired in session.tick(now) {
                debug!(id = expired.id, text = %expired.text, "notice timed out");
            }
            return Ok(now);
        }
    }

    // Flash anything this step posted.
    if let Some(latest) = session.notices().last() {
        if Some(latest.id) != posted_before {
            ctx.output.notice(latest);
        }
    }

    Ok(clock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{generate_default_config, StoreConfig};
    use crate::output::Output;

    fn context() -> Context {
        Context {
            config: StoreConfig::from_toml(&generate_default_config("Test")).unwrap(),
            output: Output::new(true),
            cwd: std::env::temp_dir(),
        }
    }

    #[test]
    fn test_script_parses() {
        let script: Script = toml::from_str(
            r#"
[[steps]]
action = "add"
product = "kayak"

[[steps]]
action = "quantity"
product = "kayak"
quantity = 3

[[steps]]
action = "dismiss"

[[steps]]
action = "wait"
ms = 500
"#,
        )
        .unwrap();

        assert_eq!(
            script.steps,
            vec![
                Step::Add { product: "kayak".to_string() },
                Step::Quantity { product: "kayak".to_string(), quantity: 3 },
                Step::Dismiss { notice: None },
                Step::Wait { ms: 500 },
            ]
        );
    }

    #[test]
    fn test_replay_steps() {
        let ctx = context();
        let mut session = ctx.config.session().unwrap();
        let steps = [
            Step::Add { product: "kayak".to_string() },
            Step::Add { product: "sun-hat".to_string() },
            Step::Increment { product: "sun-hat".to_string() },
            Step::Shipping { option: "express".to_string() },
            Step::Coupon { code: "sell200".to_string() },
            Step::Wait { ms: 3_000 },
        ];

        let mut clock = 0;
        for step in &steps {
            clock = apply_step(&mut session, step, clock, &ctx).unwrap();
        }

        assert_eq!(clock, 3_000);
        // 189.50 + 2 * 18.00 = 225.50, 20% off = 45.10, + 15.00 shipping
        assert_eq!(session.view().subtotal, "225.50");
        assert_eq!(session.view().discount, "45.10");
        assert_eq!(session.view().total, "195.40");
        // coupon notice timed out, both cart notices remain
        assert_eq!(session.notices().len(), 2);
    }

    #[test]
    fn test_dismiss_latest() {
        let ctx = context();
        let mut session = ctx.config.session().unwrap();
        apply_step(&mut session, &Step::Add { product: "kayak".to_string() }, 0, &ctx).unwrap();
        apply_step(&mut session, &Step::Dismiss { notice: None }, 0, &ctx).unwrap();
        assert!(session.notices().is_empty());
    }

    #[test]
    fn test_unknown_product_fails() {
        let ctx = context();
        let mut session = ctx.config.session().unwrap();
        let result = apply_step(&mut session, &Step::Add { product: "parasol".to_string() }, 0, &ctx);
        assert!(result.is_err());
    }
}
