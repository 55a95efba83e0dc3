//! CLI command implementations.

pub mod cart;
pub mod config;
pub mod reserve;
pub mod submit;

use clap::{Args, Subcommand};

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Product name. Adding an existing name raises its quantity.
    pub name: String,

    /// Unit price, e.g. 25.50.
    #[arg(short, long)]
    pub price: f64,

    /// Product image URL.
    #[arg(short, long, default_value = "")]
    pub image: String,

    /// Quantity to add.
    #[arg(short, long, default_value = "1")]
    pub quantity: i64,
}

/// A row index as shown by `masseria show`.
#[derive(Args)]
pub struct IndexArgs {
    /// 0-based row index.
    pub index: usize,
}

/// Arguments for the payment-fields command.
#[derive(Args)]
pub struct PaymentFieldsArgs {
    /// Payment method value (efectivo, yape, tarjeta, ...).
    pub method: String,
}

/// Arguments for the reserve command.
#[derive(Args)]
pub struct ReserveArgs {
    /// Table id as printed on the table plan. Omit to see the guard alert.
    pub table: Option<String>,
}

/// Arguments for the submit command.
#[derive(Args)]
pub struct SubmitArgs {
    /// Customer name.
    #[arg(long)]
    pub name: String,

    /// Contact phone.
    #[arg(long)]
    pub phone: String,

    /// Delivery method: recoger or enviar.
    #[arg(long)]
    pub delivery: String,

    /// Delivery address (required with enviar).
    #[arg(long)]
    pub address: Option<String>,

    /// Payment method: efectivo, yape, tarjeta, or any other value.
    #[arg(long)]
    pub payment: String,

    /// Cash amount the customer pays with.
    #[arg(long)]
    pub tendered: Option<String>,

    /// Mobile wallet operation reference.
    #[arg(long)]
    pub wallet_ref: Option<String>,

    /// Name on the card.
    #[arg(long)]
    pub card_name: Option<String>,

    /// Card number.
    #[arg(long)]
    pub card_number: Option<String>,

    /// Card expiry, YYYY-MM.
    #[arg(long)]
    pub card_expiry: Option<String>,

    /// Contact email.
    #[arg(long)]
    pub email: Option<String>,

    /// Notes for the kitchen.
    #[arg(long)]
    pub notes: Option<String>,

    /// Do not wait before reporting the redirect.
    #[arg(long)]
    pub no_wait: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Write a default masseria.toml in the working directory.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
