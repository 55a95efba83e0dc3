//! Reservation table command.

use anyhow::{bail, Result};
use masseria_cart::{PageEffect, TablePicker};

use super::ReserveArgs;
use crate::context::Context;

/// Click the given table, then "continue".
pub async fn run(args: ReserveArgs, ctx: &Context) -> Result<()> {
    let effects = pick(&args, ctx);
    for effect in &effects {
        ctx.output.effect(effect);
    }
    if let Some(PageEffect::Alert(msg)) = effects.last() {
        bail!("{}", msg);
    }
    Ok(())
}

fn pick(args: &ReserveArgs, ctx: &Context) -> Vec<PageEffect> {
    let mut picker = TablePicker::new(ctx.config.cart.no_table_message.clone());
    let mut effects = match args.table {
        Some(ref table) => picker.select(table),
        None => Vec::new(),
    };
    ctx.output.debug(&format!("selected table: {:?}", picker.selected()));
    effects.extend(picker.proceed());
    effects
}
