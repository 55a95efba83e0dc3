//! Cart configuration.

use crate::money::Currency;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for a [`CartManager`](crate::CartManager).
///
/// Every field has a default matching the live site, so an empty `[cart]`
/// table is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    /// Storage key of the persisted line items.
    pub storage_key: String,
    pub currency: Currency,
    /// Order endpoint, resolved against the HTTP base URL.
    pub endpoint: String,
    /// Where to go after a successful order when the server names no target.
    pub default_redirect: String,
    /// Pause between the success message and navigation.
    pub redirect_delay_ms: u64,
    pub success_message: String,
    pub failure_message: String,
    pub empty_cart_message: String,
    /// Alert for "continue" on the reservation page with no table picked.
    pub no_table_message: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: "carrito".to_string(),
            currency: Currency::PEN,
            endpoint: "insertar_pedido.php".to_string(),
            default_redirect: "index.html".to_string(),
            redirect_delay_ms: 3000,
            success_message:
                "✅ Tu pedido ha sido registrado. En 3 segundos volverás a la página principal..."
                    .to_string(),
            failure_message: "❌ Error al procesar el pedido.".to_string(),
            empty_cart_message: "⚠️ El carrito está vacío.".to_string(),
            no_table_message: "Por favor, selecciona una mesa.".to_string(),
        }
    }
}

impl CartConfig {
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CartConfig::default();
        assert_eq!(config.storage_key, "carrito");
        assert_eq!(config.redirect_delay(), Duration::from_millis(3000));
        assert_eq!(config.currency, Currency::PEN);
    }

    #[test]
    fn test_partial_override() {
        let config: CartConfig =
            serde_json::from_str(r#"{"endpoint":"api/pedidos","redirect_delay_ms":500}"#).unwrap();
        assert_eq!(config.endpoint, "api/pedidos");
        assert_eq!(config.redirect_delay_ms, 500);
        assert_eq!(config.default_redirect, "index.html");
    }
}
