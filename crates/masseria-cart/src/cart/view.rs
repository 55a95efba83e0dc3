//! Render output: a description of the cart panel derived from state.
//!
//! Nothing here holds handlers. Each row lists the [`CartAction`]s its
//! controls trigger and the host forwards them to
//! [`CartManager::dispatch`](crate::CartManager::dispatch).

use crate::cart::Cart;
use crate::error::CartError;
use serde::Serialize;

/// A user action on the cart panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "index", rename_all = "snake_case")]
pub enum CartAction {
    /// The "view cart" button.
    Toggle,
    Decrement(usize),
    Increment(usize),
    Remove(usize),
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartRow {
    pub index: usize,
    pub name: String,
    pub image_url: String,
    pub unit_price: String,
    pub quantity: i64,
    pub subtotal: String,
    pub actions: [CartAction; 3],
}

/// The whole cart panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartView {
    pub visible: bool,
    pub rows: Vec<CartRow>,
    /// Total text, e.g. "S/ 25.00".
    pub total: String,
    /// Sum of quantities, shown on the cart badge.
    pub counter: i64,
}

impl CartView {
    /// Derive the panel from `cart`. Totals are recomputed every time.
    pub fn render(cart: &Cart, visible: bool) -> Result<Self, CartError> {
        let rows = cart
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                Ok(CartRow {
                    index,
                    name: item.name.clone(),
                    image_url: item.image_url.clone(),
                    unit_price: item.unit_price.display(),
                    quantity: item.quantity,
                    subtotal: item.subtotal()?.display(),
                    actions: [
                        CartAction::Decrement(index),
                        CartAction::Increment(index),
                        CartAction::Remove(index),
                    ],
                })
            })
            .collect::<Result<Vec<_>, CartError>>()?;

        Ok(Self {
            visible,
            rows,
            total: cart.total()?.display(),
            counter: cart.item_count(),
        })
    }
}
