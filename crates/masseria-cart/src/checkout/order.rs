//! The order document posted to the server.

use crate::cart::Cart;
use crate::checkout::{CardDetails, OrderForm, Payment};
use crate::error::CartError;
use serde::Serialize;

/// One product line of an order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub unit_price: f64,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
    /// Line total with two decimals, e.g. "50.00".
    pub total: String,
}

/// Payment-specific part of an order. Flattened into the document, so each
/// variant contributes its own top-level key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PaymentDetails {
    Cash {
        #[serde(rename = "conCuanto")]
        tendered: Option<String>,
    },
    MobileWallet {
        #[serde(rename = "yapeRef")]
        reference: Option<String>,
    },
    Card {
        #[serde(rename = "tarjeta")]
        card: CardDetails,
    },
}

impl PaymentDetails {
    fn from_payment(payment: &Payment) -> Option<Self> {
        match payment {
            Payment::Cash { tendered } => Some(PaymentDetails::Cash {
                tendered: tendered.clone(),
            }),
            Payment::MobileWallet { reference } => Some(PaymentDetails::MobileWallet {
                reference: reference.clone(),
            }),
            Payment::Card(card) => Some(PaymentDetails::Card { card: card.clone() }),
            Payment::Other(_) => None,
        }
    }
}

/// One-shot order document built at submit time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSubmission {
    #[serde(rename = "nombre")]
    pub customer_name: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "metodoEntrega")]
    pub delivery_method: String,
    #[serde(rename = "metodoPago")]
    pub payment_method: String,
    pub total: f64,
    #[serde(rename = "productos")]
    pub lines: Vec<OrderLine>,
    #[serde(flatten)]
    pub payment_details: Option<PaymentDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "notas", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl OrderSubmission {
    /// Build the document from the current cart and the submitted form.
    pub fn build(cart: &Cart, form: &OrderForm) -> Result<Self, CartError> {
        let lines = cart
            .items()
            .iter()
            .map(|item| {
                Ok(OrderLine {
                    name: item.name.clone(),
                    unit_price: item.unit_price.to_decimal(),
                    quantity: item.quantity,
                    total: item.subtotal()?.display_amount(),
                })
            })
            .collect::<Result<Vec<_>, CartError>>()?;

        Ok(Self {
            customer_name: form.customer_name.clone(),
            phone: form.phone.clone(),
            address: form.delivery.address().to_string(),
            delivery_method: form.delivery.method().as_str().to_string(),
            payment_method: form.payment.method().as_str().to_string(),
            total: cart.total()?.to_decimal(),
            lines,
            payment_details: PaymentDetails::from_payment(&form.payment),
            email: form.email.clone(),
            notes: form.notes.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::Delivery;
    use crate::money::{Currency, Money};
    use serde_json::json;

    fn cart() -> Cart {
        let mut cart = Cart::new(Currency::PEN);
        cart.add_item("Pizza", Money::new(2500, Currency::PEN), "p.jpg", 2)
            .unwrap();
        cart
    }

    fn form(payment: Payment) -> OrderForm {
        OrderForm {
            customer_name: "Ana".to_string(),
            phone: "999".to_string(),
            email: None,
            notes: None,
            delivery: Delivery::Pickup,
            payment,
        }
    }

    #[test]
    fn test_cash_document() {
        let order = OrderSubmission::build(
            &cart(),
            &form(Payment::Cash {
                tendered: Some("100".to_string()),
            }),
        )
        .unwrap();

        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            json!({
                "nombre": "Ana",
                "telefono": "999",
                "direccion": "",
                "metodoEntrega": "recoger",
                "metodoPago": "efectivo",
                "total": 50.0,
                "productos": [
                    {"nombre": "Pizza", "precio": 25.0, "cantidad": 2, "total": "50.00"}
                ],
                "conCuanto": "100"
            })
        );
    }

    #[test]
    fn test_empty_wallet_reference_is_null() {
        let order =
            OrderSubmission::build(&cart(), &form(Payment::MobileWallet { reference: None }))
                .unwrap();
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["metodoPago"], "yape");
        assert!(value["yapeRef"].is_null());
        assert!(value.as_object().unwrap().contains_key("yapeRef"));
        assert!(!value.as_object().unwrap().contains_key("conCuanto"));
    }

    #[test]
    fn test_card_document() {
        let card = CardDetails {
            name: Some("ANA".to_string()),
            number: Some("4111".to_string()),
            expiry: Some("2027-05".to_string()),
        };
        let mut f = form(Payment::Card(card));
        f.delivery = Delivery::Ship {
            address: "Av. Pardo 450".to_string(),
        };
        f.notes = Some("Tocar timbre".to_string());

        let value = serde_json::to_value(OrderSubmission::build(&cart(), &f).unwrap()).unwrap();
        assert_eq!(value["direccion"], "Av. Pardo 450");
        assert_eq!(value["metodoEntrega"], "enviar");
        assert_eq!(
            value["tarjeta"],
            json!({"nombre": "ANA", "numero": "4111", "vencimiento": "2027-05"})
        );
        assert_eq!(value["notas"], "Tocar timbre");
    }

    #[test]
    fn test_unknown_method_adds_no_payment_keys() {
        let value = serde_json::to_value(
            OrderSubmission::build(&cart(), &form(Payment::Other("plin".to_string()))).unwrap(),
        )
        .unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(value["metodoPago"], "plin");
        for key in ["conCuanto", "yapeRef", "tarjeta", "email", "notas"] {
            assert!(!keys.iter().any(|k| k.as_str() == key), "unexpected key {}", key);
        }
    }
}
