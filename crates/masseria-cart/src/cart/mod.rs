//! Shopping cart module.
//!
//! Contains the cart state, its persisted form and its rendered view.

mod cart;
mod stored;
mod view;

pub use cart::{Cart, LineItem, MAX_QUANTITY_PER_ITEM};
pub use stored::StoredItem;
pub use view::{CartAction, CartRow, CartView};
