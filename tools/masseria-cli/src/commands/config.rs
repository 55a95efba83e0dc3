//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let cart = &ctx.config.cart;
    ctx.output.info("[cart]");
    ctx.output.kv("storage_key", &cart.storage_key);
    ctx.output.kv("currency", cart.currency.code());
    ctx.output.kv("endpoint", &cart.endpoint);
    ctx.output.kv("default_redirect", &cart.default_redirect);
    ctx.output
        .kv("redirect_delay_ms", &cart.redirect_delay_ms.to_string());

    ctx.output.info("[http]");
    ctx.output.kv("base_url", &ctx.config.http.base_url);
    ctx.output
        .kv("timeout_secs", &ctx.config.http.timeout_secs.to_string());

    ctx.output.info("[storage]");
    ctx.output
        .kv("dir", &ctx.storage_dir().display().to_string());

    if !ctx.config.environments.is_empty() {
        let mut names: Vec<&String> = ctx.config.environments.keys().collect();
        names.sort();
        ctx.output.info("[environments]");
        for name in names {
            ctx.output.list_item(name);
        }
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.cwd.join(CONFIG_NAMES[0]);
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    fs::write(&path, generate_default_config())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    ctx.output
        .success(&format!("Created {}", path.display()));
    Ok(())
}
