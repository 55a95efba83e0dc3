//! Checkout module.
//!
//! Delivery and payment choices, the order form, the order document and the
//! server reply.

mod delivery;
mod form;
mod order;
mod payment;
mod reply;

pub use delivery::{Delivery, DeliveryMethod};
pub use form::OrderForm;
pub use order::{OrderLine, OrderSubmission, PaymentDetails};
pub use payment::{CardDetails, FieldKind, FormField, Payment, PaymentMethod, PaymentPanel};
pub use reply::{OrderAccepted, OrderRejected, OrderReply, STATUS_SUCCESS};
