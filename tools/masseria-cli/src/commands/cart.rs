//! Cart panel commands.

use anyhow::{anyhow, Context as _, Result};
use masseria_cart::cart::CartAction;
use masseria_cart::checkout::{PaymentMethod, PaymentPanel};
use masseria_cart::{Money, PageEffect};

use super::{AddArgs, IndexArgs, PaymentFieldsArgs};
use crate::context::Context;

pub async fn show(ctx: &Context) -> Result<()> {
    let manager = ctx.manager()?;
    ctx.output.cart(&manager.render()?);
    Ok(())
}

/// Visibility is not persisted, so this always shows the panel opened from
/// its initial hidden state.
pub async fn toggle(ctx: &Context) -> Result<()> {
    let mut manager = ctx.manager()?;
    let view = manager.dispatch(CartAction::Toggle)?;
    ctx.output.cart(&view);
    Ok(())
}

pub async fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    let currency = ctx.config.cart.currency;
    let price = Money::from_decimal(args.price, currency)
        .ok_or_else(|| anyhow!("Invalid price: {}", args.price))?;

    let mut manager = ctx.manager()?;
    let view = manager
        .add_item(&args.name, price, &args.image, args.quantity)
        .with_context(|| format!("Failed to add {}", args.name))?;

    ctx.output.success(&format!("{} × {} añadido", args.quantity, args.name));
    ctx.output.cart(&view);
    Ok(())
}

pub async fn increment(args: IndexArgs, ctx: &Context) -> Result<()> {
    apply(CartAction::Increment(args.index), ctx).await
}

pub async fn decrement(args: IndexArgs, ctx: &Context) -> Result<()> {
    apply(CartAction::Decrement(args.index), ctx).await
}

pub async fn remove(args: IndexArgs, ctx: &Context) -> Result<()> {
    apply(CartAction::Remove(args.index), ctx).await
}

async fn apply(action: CartAction, ctx: &Context) -> Result<()> {
    let mut manager = ctx.manager()?;
    ctx.output.debug(&format!("{:?}", action));
    let view = manager.dispatch(action)?;
    ctx.output.cart(&view);
    Ok(())
}

pub async fn clear(ctx: &Context) -> Result<()> {
    let mut manager = ctx.manager()?;
    let view = manager.clear()?;
    ctx.output.success("Carrito vaciado");
    ctx.output.cart(&view);
    Ok(())
}

pub async fn payment_fields(args: PaymentFieldsArgs, ctx: &Context) -> Result<()> {
    let method = PaymentMethod::from_value(&args.method);
    let mut panel = PaymentPanel::new();
    let fields = panel.select(method.clone());

    if ctx.output.is_json() {
        ctx.output.json(&fields);
        return Ok(());
    }

    ctx.output.header(&format!("Pago: {}", method.as_str()));
    if fields.is_empty() {
        ctx.output.info("Sin campos adicionales.");
    }
    for field in fields {
        let placeholder = field.placeholder.unwrap_or("");
        ctx.output
            .list_item(&format!("{} ({:?}) {} {}", field.label, field.kind, field.id, placeholder));
    }
    Ok(())
}

/// The confirm step: refuse an empty cart.
pub async fn checkout(ctx: &Context) -> Result<()> {
    let manager = ctx.manager()?;
    let effect = manager.begin_checkout();
    ctx.output.effect(&effect);
    if let PageEffect::Alert(_) = effect {
        return Err(anyhow!("Cart is empty"));
    }
    Ok(())
}
