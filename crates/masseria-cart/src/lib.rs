//! Shopping cart for the Masseria restaurant site.
//!
//! - **Cart**: ordered line items, their persisted form and rendered view
//! - **Checkout**: delivery and payment choices, the order form, the order
//!   document posted to the server and its reply
//! - **Manager**: [`CartManager`] ties the cart to a store and an HTTP client
//! - **Reservation**: [`TablePicker`] for the table plan of the reservation page
//!
//! # Example
//!
//! ```rust,ignore
//! use masseria_cart::prelude::*;
//!
//! let mut manager = CartManager::load(store, client, CartConfig::default())?;
//! manager.add_item("Pizza", Money::new(2500, Currency::PEN), "img/pizza.jpg", 2)?;
//! let view = manager.decrement(0)?;
//! assert_eq!(view.total, "S/ 25.00");
//!
//! let form = OrderForm::gather(&values)?;
//! for effect in manager.submit(&form).await?.effects() {
//!     // alert, replace the page, navigate...
//! }
//! ```

pub mod cart;
pub mod checkout;
pub mod config;
pub mod dom;
pub mod error;
pub mod manager;
pub mod money;
pub mod reservation;

pub use config::CartConfig;
pub use error::CartError;
pub use manager::{CartManager, FailureReason, PageEffect, SubmitOutcome};
pub use money::{Currency, Money};
pub use reservation::TablePicker;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::CartConfig;
    pub use crate::dom::FormValues;
    pub use crate::error::CartError;
    pub use crate::manager::{CartManager, FailureReason, PageEffect, SubmitOutcome};
    pub use crate::money::{Currency, Money};
    pub use crate::reservation::TablePicker;

    // Cart
    pub use crate::cart::{
        Cart, CartAction, CartRow, CartView, LineItem, StoredItem, MAX_QUANTITY_PER_ITEM,
    };

    // Checkout
    pub use crate::checkout::{
        CardDetails, Delivery, DeliveryMethod, FieldKind, FormField, OrderAccepted, OrderForm,
        OrderLine, OrderRejected, OrderReply, OrderSubmission, Payment, PaymentDetails,
        PaymentMethod, PaymentPanel,
    };
}
