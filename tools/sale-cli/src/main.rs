//! Sale CLI - drive the SummerSale cart from the terminal.
//!
//! Commands:
//! - `sale init` - Write a default storefront.toml
//! - `sale catalog` - List products, shipping options and coupons
//! - `sale quote` - Build a cart and print its totals
//! - `sale run` - Replay a scripted shopping session

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CatalogArgs, InitArgs, QuoteArgs, RunArgs};

/// Sale CLI - Quote and replay SummerSale carts
#[derive(Parser)]
#[command(name = "sale")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default storefront config
    Init(InitArgs),

    /// List what the storefront offers
    Catalog(CatalogArgs),

    /// Build a cart and print its totals
    Quote(QuoteArgs),

    /// Replay a scripted shopping session
    Run(RunArgs),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Init(args) => commands::init::run(args, &ctx),
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Quote(args) => commands::quote::run(args, &ctx),
        Commands::Run(args) => commands::run::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_quote() {
        let cli = Cli::try_parse_from([
            "sale", "-c", "shop.toml", "quote", "-a", "kayak", "-a", "sun-hat", "--coupon", "SELL200",
        ])
        .unwrap();
        assert_eq!(cli.config.as_deref(), Some("shop.toml"));
        let Commands::Quote(args) = cli.command else {
            panic!("expected quote");
        };
        assert_eq!(args.add, ["kayak", "sun-hat"]);
        assert_eq!(args.coupon.as_deref(), Some("SELL200"));
        assert_eq!(args.shipping, None);

        let cli = Cli::try_parse_from(["sale", "quote", "-k", "summer50", "-s", "express"]).unwrap();
        let Commands::Quote(args) = cli.command else {
            panic!("expected quote");
        };
        assert_eq!(args.coupon.as_deref(), Some("summer50"));
        assert_eq!(args.shipping.as_deref(), Some("express"));
    }
}
