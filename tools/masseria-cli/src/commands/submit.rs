//! Order submission.

use anyhow::{bail, Context as _, Result};
use masseria_cart::checkout::OrderForm;
use masseria_cart::dom::{self, FormValues};
use masseria_cart::{FailureReason, PageEffect, SubmitOutcome};

use super::SubmitArgs;
use crate::context::Context;

/// Run the submit command.
pub async fn run(args: SubmitArgs, ctx: &Context) -> Result<()> {
    let no_wait = args.no_wait;
    let form = OrderForm::gather(&form_values(args)).context("Invalid order form")?;

    let mut manager = ctx.manager()?;
    ctx.output.debug(&format!(
        "POST {} ({} items)",
        ctx.config.cart.endpoint,
        manager.cart().item_count()
    ));

    let outcome = manager.submit(&form).await?;
    for effect in outcome.effects() {
        ctx.output.effect(&effect);
        if let PageEffect::Navigate { after, .. } = effect {
            if !no_wait {
                tokio::time::sleep(after).await;
            }
        }
    }

    match outcome {
        SubmitOutcome::Placed { .. } => Ok(()),
        SubmitOutcome::Blocked { .. } => bail!("Order not sent: cart is empty"),
        SubmitOutcome::Failed { reason, .. } => bail!("Order not placed: {}", describe(&reason)),
    }
}

/// Map command line flags onto the page's form inputs.
fn form_values(args: SubmitArgs) -> FormValues {
    let mut values = FormValues::new()
        .with(dom::CUSTOMER_NAME, args.name)
        .with(dom::PHONE, args.phone)
        .with(dom::DELIVERY_METHOD, args.delivery)
        .with(dom::PAYMENT_METHOD, args.payment);

    let optional = [
        (dom::ADDRESS, args.address),
        (dom::CASH_TENDERED, args.tendered),
        (dom::WALLET_REFERENCE, args.wallet_ref),
        (dom::CARD_NAME, args.card_name),
        (dom::CARD_NUMBER, args.card_number),
        (dom::CARD_EXPIRY, args.card_expiry),
        (dom::EMAIL, args.email),
        (dom::NOTES, args.notes),
    ];
    for (id, value) in optional {
        if let Some(value) = value {
            values.set(id, value);
        }
    }
    values
}

fn describe(reason: &FailureReason) -> String {
    match reason {
        FailureReason::Rejected { status, message } => match message {
            Some(message) => format!("server replied {} ({})", status, message),
            None => format!("server replied {}", status),
        },
        FailureReason::Http(status) => format!("HTTP {}", status),
        FailureReason::Transport(error) => error.clone(),
    }
}
