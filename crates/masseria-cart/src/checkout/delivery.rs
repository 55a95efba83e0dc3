//! Delivery method selection.

use serde::{Deserialize, Serialize};

/// How the order reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryMethod {
    /// Customer picks up at the restaurant.
    Pickup,
    /// Delivered to an address.
    Ship,
}

impl DeliveryMethod {
    /// Radio button value.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMethod::Pickup => "recoger",
            DeliveryMethod::Ship => "enviar",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "recoger" => Some(DeliveryMethod::Pickup),
            "enviar" => Some(DeliveryMethod::Ship),
            _ => None,
        }
    }

    /// Whether the address inputs are displayed.
    pub fn shows_address(&self) -> bool {
        matches!(self, DeliveryMethod::Ship)
    }
}

/// Delivery choice together with its address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Delivery {
    Pickup,
    Ship { address: String },
}

impl Delivery {
    pub fn method(&self) -> DeliveryMethod {
        match self {
            Delivery::Pickup => DeliveryMethod::Pickup,
            Delivery::Ship { .. } => DeliveryMethod::Ship,
        }
    }

    /// Address sent with the order; empty for pickup.
    pub fn address(&self) -> &str {
        match self {
            Delivery::Pickup => "",
            Delivery::Ship { address } => address,
        }
    }
}
