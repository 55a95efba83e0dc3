//! Masseria CLI - drive the restaurant cart from the terminal.
//!
//! Commands:
//! - `masseria show` - Render the cart
//! - `masseria add` / `inc` / `dec` / `remove` / `clear` - Edit the cart
//! - `masseria checkout` - Confirm step
//! - `masseria payment-fields` - Inputs for a payment method
//! - `masseria submit` - Place the order
//! - `masseria reserve` - Pick a table for a reservation
//! - `masseria config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use commands::{AddArgs, ConfigArgs, IndexArgs, PaymentFieldsArgs, ReserveArgs, SubmitArgs};

/// Masseria CLI - Manage the cart and place orders
#[derive(Parser)]
#[command(name = "masseria")]
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

    /// Apply the overrides of this environment
    #[arg(short, long, global = true)]
    env: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the cart
    Show,

    /// Flip the cart panel open
    Toggle,

    /// Add a product
    Add(AddArgs),

    /// Raise the quantity of a row
    Inc(IndexArgs),

    /// Lower the quantity of a row, removing it at zero
    Dec(IndexArgs),

    /// Remove a row
    Remove(IndexArgs),

    /// List the extra inputs of a payment method
    PaymentFields(PaymentFieldsArgs),

    /// Confirm the cart before filling the order form
    Checkout,

    /// Place the order
    Submit(SubmitArgs),

    /// Empty the cart
    Clear,

    /// Pick a table and continue to the reservation form
    Reserve(ReserveArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool, json: bool) {
    let default = if verbose { "masseria=debug" } else { "masseria=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.json);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = match context::Context::load(cli.config.as_deref(), cli.env.as_deref(), output.clone())
    {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Show => commands::cart::show(&ctx).await,
        Commands::Toggle => commands::cart::toggle(&ctx).await,
        Commands::Add(args) => commands::cart::add(args, &ctx).await,
        Commands::Inc(args) => commands::cart::increment(args, &ctx).await,
        Commands::Dec(args) => commands::cart::decrement(args, &ctx).await,
        Commands::Remove(args) => commands::cart::remove(args, &ctx).await,
        Commands::PaymentFields(args) => commands::cart::payment_fields(args, &ctx).await,
        Commands::Checkout => commands::cart::checkout(&ctx).await,
        Commands::Submit(args) => commands::submit::run(args, &ctx).await,
        Commands::Clear => commands::cart::clear(&ctx).await,
        Commands::Reserve(args) => commands::reserve::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
