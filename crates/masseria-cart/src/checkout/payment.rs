//! Payment methods and their method-specific inputs.

use crate::dom;
use serde::{Deserialize, Serialize};

/// Value of the payment selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    /// Yape transfer, identified by its operation number.
    MobileWallet,
    Card,
    /// Any other selector value; carries no extra inputs.
    Other(String),
}

impl PaymentMethod {
    pub fn from_value(value: &str) -> Self {
        match value.trim() {
            "efectivo" => PaymentMethod::Cash,
            "yape" => PaymentMethod::MobileWallet,
            "tarjeta" => PaymentMethod::Card,
            other => PaymentMethod::Other(other.to_string()),
        }
    }

    /// Selector value sent as `metodoPago`.
    pub fn as_str(&self) -> &str {
        match self {
            PaymentMethod::Cash => "efectivo",
            PaymentMethod::MobileWallet => "yape",
            PaymentMethod::Card => "tarjeta",
            PaymentMethod::Other(value) => value,
        }
    }

    /// Inputs shown in the extra-payment panel for this method.
    pub fn extra_fields(&self) -> Vec<FormField> {
        match self {
            PaymentMethod::Cash => vec![FormField {
                id: dom::CASH_TENDERED,
                label: "¿Con cuánto pagarás?",
                kind: FieldKind::Number,
                placeholder: Some("Ej. 100.00"),
            }],
            PaymentMethod::MobileWallet => vec![FormField {
                id: dom::WALLET_REFERENCE,
                label: "Número de operación / Yape",
                kind: FieldKind::Text,
                placeholder: Some("Ej. 12345678"),
            }],
            PaymentMethod::Card => vec![
                FormField {
                    id: dom::CARD_NAME,
                    label: "Nombre en la tarjeta",
                    kind: FieldKind::Text,
                    placeholder: None,
                },
                FormField {
                    id: dom::CARD_NUMBER,
                    label: "Número de tarjeta",
                    kind: FieldKind::Text,
                    placeholder: None,
                },
                FormField {
                    id: dom::CARD_EXPIRY,
                    label: "Vencimiento",
                    kind: FieldKind::Month,
                    placeholder: None,
                },
            ],
            PaymentMethod::Other(_) => Vec::new(),
        }
    }
}

/// Input type of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Number,
    Text,
    /// `YYYY-MM`.
    Month,
}

/// Description of one input to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

/// The extra-payment panel. Selecting a method replaces the whole field set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentPanel {
    method: Option<PaymentMethod>,
    fields: Vec<FormField>,
}

impl PaymentPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a selector change.
    pub fn select(&mut self, method: PaymentMethod) -> &[FormField] {
        self.fields = method.extra_fields();
        self.method = Some(method);
        &self.fields
    }

    pub fn method(&self) -> Option<&PaymentMethod> {
        self.method.as_ref()
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }
}

/// Card inputs. Values are passed through as typed by the customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetails {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "numero")]
    pub number: Option<String>,
    #[serde(rename = "vencimiento")]
    pub expiry: Option<String>,
}

/// A payment method together with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payment {
    Cash { tendered: Option<String> },
    MobileWallet { reference: Option<String> },
    Card(CardDetails),
    Other(String),
}

impl Payment {
    pub fn method(&self) -> PaymentMethod {
        match self {
            Payment::Cash { .. } => PaymentMethod::Cash,
            Payment::MobileWallet { .. } => PaymentMethod::MobileWallet,
            Payment::Card(_) => PaymentMethod::Card,
            Payment::Other(value) => PaymentMethod::Other(value.clone()),
        }
    }
}
