//! Persisted form of the cart.
//!
//! The text under the storage key is a JSON array of
//! `{"nombre", "precio", "cantidad", "imagen"}` objects, which is the layout
//! the site's pages already read and write.

use crate::cart::{Cart, LineItem};
use crate::error::CartError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// One persisted line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredItem {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
    #[serde(rename = "imagen", default)]
    pub image_url: String,
}

impl From<&LineItem> for StoredItem {
    fn from(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            price: item.unit_price.to_decimal(),
            quantity: item.quantity,
            image_url: item.image_url.clone(),
        }
    }
}

impl StoredItem {
    pub fn into_line_item(self, currency: Currency) -> Result<LineItem, CartError> {
        let unit_price = Money::from_decimal(self.price, currency)
            .ok_or_else(|| CartError::InvalidPrice(self.price.to_string()))?;
        LineItem::new(self.name, unit_price, self.image_url, self.quantity)
    }
}

impl Cart {
    /// Snapshot for persistence.
    pub fn to_stored(&self) -> Vec<StoredItem> {
        self.items().iter().map(StoredItem::from).collect()
    }

    /// Rebuild a cart from its persisted form. Any invalid element rejects
    /// the whole list.
    pub fn from_stored(stored: Vec<StoredItem>, currency: Currency) -> Result<Self, CartError> {
        let items = stored
            .into_iter()
            .map(|s| s.into_line_item(currency))
            .collect::<Result<Vec<_>, _>>()?;
        Cart::from_items(items, currency)
    }
}
