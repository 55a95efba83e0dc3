//! The cart controller.
//!
//! [`CartManager`] owns the cart, the panel flag, the store and the HTTP
//! client. Every mutation persists the full list and returns a fresh
//! [`CartView`]; page side effects are returned as [`PageEffect`] values for
//! the host to perform.

use std::time::Duration;

use masseria_fetch::{FetchClient, Transport};
use masseria_store::{Backend, Store, StoreError};
use tracing::{debug, info, warn};

use crate::cart::{Cart, CartAction, CartView, StoredItem};
use crate::checkout::{
    DeliveryMethod, FormField, OrderForm, OrderReply, OrderSubmission, PaymentMethod, PaymentPanel,
};
use crate::config::CartConfig;
use crate::error::CartError;
use crate::money::Money;

/// A side effect on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEffect {
    /// Blocking alert dialog.
    Alert(String),
    /// Reveal the payment form.
    ShowPaymentForm,
    /// Replace the whole page with a message.
    ReplaceBody(String),
    /// Navigate once `after` has elapsed.
    Navigate { url: String, after: Duration },
    /// Set the value of the input with this id.
    SetValue { id: &'static str, value: String },
    /// Highlight one table button and clear the others.
    MarkTable(String),
    /// Bring the reservation form into view.
    ScrollToForm,
}

/// Why a submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The server answered with a non-success status.
    Rejected {
        status: String,
        message: Option<String>,
    },
    /// Non-2xx HTTP reply.
    Http(u16),
    /// The request never got an answer, or the answer could not be parsed.
    Transport(String),
}

/// Result of [`CartManager::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty cart; nothing was sent.
    Blocked { alert: String },
    /// Order accepted and cart cleared.
    Placed {
        message: String,
        redirect: String,
        delay: Duration,
    },
    /// Order not placed; the cart is untouched so the customer can retry.
    Failed { alert: String, reason: FailureReason },
}

impl SubmitOutcome {
    /// Effects the host performs, in order.
    pub fn effects(&self) -> Vec<PageEffect> {
        match self {
            SubmitOutcome::Blocked { alert } | SubmitOutcome::Failed { alert, .. } => {
                vec![PageEffect::Alert(alert.clone())]
            }
            SubmitOutcome::Placed {
                message,
                redirect,
                delay,
            } => vec![
                PageEffect::ReplaceBody(message.clone()),
                PageEffect::Navigate {
                    url: redirect.clone(),
                    after: *delay,
                },
            ],
        }
    }

    pub fn is_placed(&self) -> bool {
        matches!(self, SubmitOutcome::Placed { .. })
    }
}

/// Cart controller bound to a store backend and an HTTP transport.
pub struct CartManager<B, T> {
    cart: Cart,
    visible: bool,
    delivery: Option<DeliveryMethod>,
    payment_panel: PaymentPanel,
    store: Store<B>,
    client: FetchClient<T>,
    config: CartConfig,
}

impl<B: Backend, T: Transport> CartManager<B, T> {
    /// Rehydrate the cart from the store.
    ///
    /// A missing key yields an empty cart. Unreadable or invalid stored text
    /// is logged and replaced by an empty cart; it is overwritten on the next
    /// mutation.
    pub fn load(store: Store<B>, client: FetchClient<T>, config: CartConfig) -> Result<Self, CartError> {
        let key = config.storage_key.as_str();
        let cart = match store.get::<Vec<StoredItem>>(key) {
            Ok(Some(stored)) => Cart::from_stored(stored, config.currency).unwrap_or_else(|e| {
                warn!(key, error = %e, "discarding invalid stored cart");
                Cart::new(config.currency)
            }),
            Ok(None) => Cart::new(config.currency),
            Err(StoreError::SerializeError(e)) => {
                warn!(key, error = %e, "discarding unreadable stored cart");
                Cart::new(config.currency)
            }
            Err(e) => return Err(e.into()),
        };
        debug!(key, items = cart.len(), "cart loaded");

        Ok(Self {
            cart,
            visible: false,
            delivery: None,
            payment_panel: PaymentPanel::new(),
            store,
            client,
            config,
        })
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    pub fn store(&self) -> &Store<B> {
        &self.store
    }

    pub fn client(&self) -> &FetchClient<T> {
        &self.client
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Derive the panel from current state.
    pub fn render(&self) -> Result<CartView, CartError> {
        CartView::render(&self.cart, self.visible)
    }

    /// Show or hide the cart panel.
    pub fn toggle_visibility(&mut self) -> Result<CartView, CartError> {
        self.visible = !self.visible;
        debug!(visible = self.visible, "cart panel toggled");
        self.render()
    }

    /// Add a product, merging with an existing row of the same name.
    pub fn add_item(
        &mut self,
        name: &str,
        unit_price: Money,
        image_url: &str,
        quantity: i64,
    ) -> Result<CartView, CartError> {
        let index = self.cart.add_item(name, unit_price, image_url, quantity)?;
        debug!(index, name, quantity, "item added");
        self.commit()
    }

    pub fn increment(&mut self, index: usize) -> Result<CartView, CartError> {
        let quantity = self.cart.increment(index)?.quantity;
        debug!(index, quantity, "item incremented");
        self.commit()
    }

    /// Lower the quantity at `index`; the row disappears at zero.
    pub fn decrement(&mut self, index: usize) -> Result<CartView, CartError> {
        if let Some(removed) = self.cart.decrement(index)? {
            debug!(index, name = %removed.name, "item removed at zero quantity");
        } else {
            debug!(index, "item decremented");
        }
        self.commit()
    }

    pub fn remove(&mut self, index: usize) -> Result<CartView, CartError> {
        let removed = self.cart.remove(index)?;
        debug!(index, name = %removed.name, "item removed");
        self.commit()
    }

    pub fn clear(&mut self) -> Result<CartView, CartError> {
        self.cart.clear();
        self.commit()
    }

    /// Single entry point for panel events.
    pub fn dispatch(&mut self, action: CartAction) -> Result<CartView, CartError> {
        match action {
            CartAction::Toggle => self.toggle_visibility(),
            CartAction::Increment(index) => self.increment(index),
            CartAction::Decrement(index) => self.decrement(index),
            CartAction::Remove(index) => self.remove(index),
        }
    }

    /// The confirm button: refuse an empty cart, otherwise reveal the form.
    pub fn begin_checkout(&self) -> PageEffect {
        if self.cart.is_empty() {
            return PageEffect::Alert(self.config.empty_cart_message.clone());
        }
        PageEffect::ShowPaymentForm
    }

    /// Delivery radio change. Returns whether the address inputs are shown.
    pub fn select_delivery(&mut self, value: &str) -> Result<bool, CartError> {
        let method = DeliveryMethod::from_value(value).ok_or_else(|| CartError::InvalidField {
            field: crate::dom::DELIVERY_METHOD,
            value: value.to_string(),
        })?;
        self.delivery = Some(method);
        Ok(method.shows_address())
    }

    pub fn address_visible(&self) -> bool {
        self.delivery.is_some_and(|m| m.shows_address())
    }

    /// Payment selector change. Returns the inputs now shown.
    pub fn select_payment(&mut self, value: &str) -> &[FormField] {
        self.payment_panel.select(PaymentMethod::from_value(value))
    }

    pub fn payment_fields(&self) -> &[FormField] {
        self.payment_panel.fields()
    }

    /// Place the order.
    ///
    /// Sends exactly one request when the cart is non-empty and none
    /// otherwise. The cart is cleared and persisted only on success; once the
    /// server has accepted, a failed write is logged and the outcome is still
    /// [`SubmitOutcome::Placed`].
    pub async fn submit(&mut self, form: &OrderForm) -> Result<SubmitOutcome, CartError> {
        if self.cart.is_empty() {
            warn!("order submission blocked: cart is empty");
            return Ok(SubmitOutcome::Blocked {
                alert: self.config.empty_cart_message.clone(),
            });
        }

        let order = OrderSubmission::build(&self.cart, form)?;
        info!(
            items = order.lines.len(),
            total = order.total,
            delivery = %order.delivery_method,
            payment = %order.payment_method,
            "submitting order"
        );

        let request = self
            .client
            .post(self.config.endpoint.as_str())
            .accept("application/json")
            .json(&order)?;

        let reply = match request.send().await {
            Ok(response) if !response.is_success() => Err(FailureReason::Http(response.status)),
            Ok(response) => response
                .json::<OrderReply>()
                .map_err(|e| FailureReason::Transport(e.to_string())),
            Err(e) => Err(FailureReason::Transport(e.to_string())),
        };

        let accepted = match reply.map(OrderReply::into_result) {
            Ok(Ok(accepted)) => accepted,
            Ok(Err(rejected)) => {
                return Ok(self.failed(FailureReason::Rejected {
                    status: rejected.status,
                    message: rejected.message,
                }))
            }
            Err(reason) => return Ok(self.failed(reason)),
        };

        // Placed from here on; a failed write is only logged.
        self.cart.clear();
        if let Err(e) = self.persist() {
            warn!(error = %e, "failed to persist cleared cart");
        }

        let outcome = SubmitOutcome::Placed {
            message: accepted
                .message
                .unwrap_or_else(|| self.config.success_message.clone()),
            redirect: accepted
                .redirect
                .unwrap_or_else(|| self.config.default_redirect.clone()),
            delay: self.config.redirect_delay(),
        };
        info!("order placed");
        Ok(outcome)
    }

    fn failed(&self, reason: FailureReason) -> SubmitOutcome {
        match &reason {
            FailureReason::Rejected { status, message } => {
                warn!(%status, message = message.as_deref().unwrap_or(""), "order rejected by server")
            }
            FailureReason::Http(status) => warn!(status, "order endpoint returned an HTTP error"),
            FailureReason::Transport(error) => warn!(%error, "order request failed"),
        }
        SubmitOutcome::Failed {
            alert: self.config.failure_message.clone(),
            reason,
        }
    }

    fn persist(&self) -> Result<(), CartError> {
        self.store
            .set(&self.config.storage_key, &self.cart.to_stored())?;
        Ok(())
    }

    fn commit(&self) -> Result<CartView, CartError> {
        self.persist()?;
        self.render()
    }
}
