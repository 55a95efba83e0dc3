//! Order form: the values gathered when the customer submits.

use crate::checkout::{CardDetails, Delivery, DeliveryMethod, Payment, PaymentMethod};
use crate::dom::{self, FormValues};
use crate::error::CartError;

/// Contact, delivery and payment details for one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderForm {
    pub customer_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub notes: Option<String>,
    pub delivery: Delivery,
    pub payment: Payment,
}

impl OrderForm {
    /// Read the form from element values.
    ///
    /// Name, phone, delivery method and payment method are required; the
    /// address is required only when shipping. Payment inputs are read only
    /// for the selected method, so stale values from a previously selected
    /// method are ignored.
    pub fn gather(values: &FormValues) -> Result<Self, CartError> {
        let customer_name = required(values, dom::CUSTOMER_NAME)?;
        let phone = required(values, dom::PHONE)?;

        let delivery_value = required(values, dom::DELIVERY_METHOD)?;
        let delivery = match DeliveryMethod::from_value(&delivery_value) {
            Some(DeliveryMethod::Pickup) => Delivery::Pickup,
            Some(DeliveryMethod::Ship) => Delivery::Ship {
                address: required(values, dom::ADDRESS)?,
            },
            None => {
                return Err(CartError::InvalidField {
                    field: dom::DELIVERY_METHOD,
                    value: delivery_value,
                })
            }
        };

        let payment = match PaymentMethod::from_value(&required(values, dom::PAYMENT_METHOD)?) {
            PaymentMethod::Cash => Payment::Cash {
                tendered: values.non_empty(dom::CASH_TENDERED),
            },
            PaymentMethod::MobileWallet => Payment::MobileWallet {
                reference: values.non_empty(dom::WALLET_REFERENCE),
            },
            PaymentMethod::Card => Payment::Card(CardDetails {
                name: values.non_empty(dom::CARD_NAME),
                number: values.non_empty(dom::CARD_NUMBER),
                expiry: values.non_empty(dom::CARD_EXPIRY),
            }),
            PaymentMethod::Other(value) => Payment::Other(value),
        };

        Ok(Self {
            customer_name,
            phone,
            email: values.non_empty(dom::EMAIL),
            notes: values.non_empty(dom::NOTES),
            delivery,
            payment,
        })
    }
}

fn required(values: &FormValues, id: &'static str) -> Result<String, CartError> {
    values.non_empty(id).ok_or(CartError::MissingField(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> FormValues {
        FormValues::new()
            .with(dom::CUSTOMER_NAME, "Ana Torres")
            .with(dom::PHONE, "987654321")
            .with(dom::DELIVERY_METHOD, "recoger")
            .with(dom::PAYMENT_METHOD, "efectivo")
    }

    #[test]
    fn test_gather_pickup_cash() {
        let form = OrderForm::gather(&base().with(dom::CASH_TENDERED, "100")).unwrap();
        assert_eq!(form.customer_name, "Ana Torres");
        assert_eq!(form.delivery, Delivery::Pickup);
        assert_eq!(
            form.payment,
            Payment::Cash {
                tendered: Some("100".to_string())
            }
        );
        assert!(form.email.is_none());
    }

    #[test]
    fn test_gather_ignores_address_for_pickup() {
        let form = OrderForm::gather(&base().with(dom::ADDRESS, "Calle 1")).unwrap();
        assert_eq!(form.delivery.address(), "");
    }

    #[test]
    fn test_gather_ship_requires_address() {
        let values = base().with(dom::DELIVERY_METHOD, "enviar");
        assert!(matches!(
            OrderForm::gather(&values),
            Err(CartError::MissingField(dom::ADDRESS))
        ));

        let form = OrderForm::gather(&values.with(dom::ADDRESS, "Av. Pardo 450")).unwrap();
        assert_eq!(
            form.delivery,
            Delivery::Ship {
                address: "Av. Pardo 450".to_string()
            }
        );
    }

    #[test]
    fn test_gather_reads_only_selected_payment_fields() {
        let values = base()
            .with(dom::PAYMENT_METHOD, "tarjeta")
            .with(dom::CASH_TENDERED, "50")
            .with(dom::CARD_NAME, "ANA TORRES")
            .with(dom::CARD_NUMBER, "4111111111111111")
            .with(dom::CARD_EXPIRY, "");

        let form = OrderForm::gather(&values).unwrap();
        assert_eq!(
            form.payment,
            Payment::Card(CardDetails {
                name: Some("ANA TORRES".to_string()),
                number: Some("4111111111111111".to_string()),
                expiry: None,
            })
        );
    }

    #[test]
    fn test_gather_missing_required() {
        let values = FormValues::new().with(dom::CUSTOMER_NAME, "Ana");
        assert!(matches!(
            OrderForm::gather(&values),
            Err(CartError::MissingField(dom::PHONE))
        ));
    }

    #[test]
    fn test_gather_unknown_delivery() {
        let values = base().with(dom::DELIVERY_METHOD, "dron");
        assert!(matches!(
            OrderForm::gather(&values),
            Err(CartError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_gather_optional_contact_fields() {
        let values = base()
            .with(dom::EMAIL, "ana@example.com")
            .with(dom::NOTES, "Sin cebolla")
            .with(dom::PAYMENT_METHOD, "plin");
        let form = OrderForm::gather(&values).unwrap();
        assert_eq!(form.email.as_deref(), Some("ana@example.com"));
        assert_eq!(form.notes.as_deref(), Some("Sin cebolla"));
        assert_eq!(form.payment, Payment::Other("plin".to_string()));
    }
}
