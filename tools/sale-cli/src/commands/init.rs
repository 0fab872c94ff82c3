//! Scaffold a storefront config.

use anyhow::{bail, Context as _, Result};

use super::InitArgs;
use crate::config::{generate_default_config, StoreConfig};
use crate::context::Context;

/// Run the init command.
pub fn run(args: InitArgs, ctx: &Context) -> Result<()> {
    let path = if args.path.is_absolute() {
        args.path.clone()
    } else {
        ctx.cwd.join(&args.path)
    };

    if path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    ctx.output
        .header(&format!("Initializing storefront: {}", args.name));

    let content = generate_default_config(&args.name);
    // The template must round-trip through the parser.
    StoreConfig::from_toml(&content)?;

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    ctx.output
        .success(&format!("Wrote {}", path.display()));
    ctx.output.info("Next steps:");
    ctx.output.list_item("sale catalog");
    ctx.output.list_item("sale quote --add beach-towel --coupon SUMMER50");

    Ok(())
}
