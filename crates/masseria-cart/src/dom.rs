//! Element identifiers of the surrounding page and the form values read
//! from it.

use std::collections::HashMap;

pub const CART_TOGGLE_BUTTON: &str = "btn-ver-carrito";
pub const CART_PANEL: &str = "carrito";
pub const CART_ITEMS_BODY: &str = "items-carrito";
pub const CART_TOTAL: &str = "total-carrito";
pub const CART_COUNTER: &str = "contador-carrito";
pub const PAYMENT_FORM_PANEL: &str = "formulario-pago";
pub const ORDER_FORM: &str = "form-pedido";
pub const ADDRESS_PANEL: &str = "campo-direccion";
pub const ADDRESS_FORM_PANEL: &str = "campo-direccion-form";
pub const PAYMENT_EXTRA_PANEL: &str = "extra-pago";

// Reservation page.
/// Class of the table buttons; each carries its table in `data-id`.
pub const TABLE_BUTTON_CLASS: &str = "custom-table";
pub const CONTINUE_BUTTON: &str = "btnContinuar";
/// Hidden input submitted with the reservation.
pub const SELECTED_TABLE: &str = "mesaSeleccionada";
/// Read-only input showing the chosen table.
pub const TABLE_NUMBER: &str = "campoNumeroMesa";

// Form inputs.
pub const CUSTOMER_NAME: &str = "nombre";
pub const PHONE: &str = "telefono";
pub const EMAIL: &str = "email";
pub const NOTES: &str = "notas";
/// Radio group name.
pub const DELIVERY_METHOD: &str = "metodoEntrega";
pub const ADDRESS: &str = "direccion";
pub const PAYMENT_METHOD: &str = "metodo-pago";
pub const CASH_TENDERED: &str = "con-cuanto";
pub const WALLET_REFERENCE: &str = "yape-ref";
pub const CARD_NAME: &str = "tarjeta-nombre";
pub const CARD_NUMBER: &str = "tarjeta-numero";
pub const CARD_EXPIRY: &str = "tarjeta-vencimiento";

/// Current values of the form inputs, keyed by element id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: HashMap<String, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, id: &str, value: impl Into<String>) -> Self {
        self.set(id, value);
        self
    }

    pub fn set(&mut self, id: &str, value: impl Into<String>) {
        self.values.insert(id.to_string(), value.into());
    }

    /// Raw value, if the input exists.
    pub fn raw(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// Trimmed value, `None` when absent or blank.
    pub fn non_empty(&self, id: &str) -> Option<String> {
        self.raw(id)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
