//! Cart and line item types.

use crate::error::CartError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 99;

/// An ordered list of line items.
///
/// Positions are stable between mutations, so the index a row was rendered
/// with addresses the same item until the next change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    items: Vec<LineItem>,
    currency: Currency,
}

impl Cart {
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Build a cart from already validated items.
    pub fn from_items(items: Vec<LineItem>, currency: Currency) -> Result<Self, CartError> {
        for item in &items {
            item.validate(currency)?;
        }
        Ok(Self { items, currency })
    }

    /// Add a product.
    ///
    /// An item with the same name has its quantity raised instead of a second
    /// row being appended. Returns the index of the affected row.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        unit_price: Money,
        image_url: impl Into<String>,
        quantity: i64,
    ) -> Result<usize, CartError> {
        let name = name.into();
        if quantity <= 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }

        if let Some(index) = self.items.iter().position(|i| i.name == name) {
            let item = &mut self.items[index];
            let new_quantity = item
                .quantity
                .checked_add(quantity)
                .ok_or(CartError::Overflow)?;
            check_limit(new_quantity)?;
            item.quantity = new_quantity;
            return Ok(index);
        }

        let item = LineItem::new(name, unit_price, image_url, quantity)?;
        item.validate(self.currency)?;
        self.items.push(item);
        Ok(self.items.len() - 1)
    }

    /// Raise the quantity at `index` by one.
    pub fn increment(&mut self, index: usize) -> Result<&LineItem, CartError> {
        let item = self.item_mut(index)?;
        let new_quantity = item.quantity + 1;
        check_limit(new_quantity)?;
        item.quantity = new_quantity;
        Ok(item)
    }

    /// Lower the quantity at `index` by one, removing the item when it
    /// reaches zero. Returns the removed item, if any.
    pub fn decrement(&mut self, index: usize) -> Result<Option<LineItem>, CartError> {
        let item = self.item_mut(index)?;
        item.quantity -= 1;
        if item.quantity <= 0 {
            return Ok(Some(self.items.remove(index)));
        }
        Ok(None)
    }

    /// Remove the item at `index`.
    pub fn remove(&mut self, index: usize) -> Result<LineItem, CartError> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&LineItem> {
        self.items.get(index)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Σ unit price × quantity, recomputed on every call.
    pub fn total(&self) -> Result<Money, CartError> {
        self.items.iter().try_fold(Money::zero(self.currency), |acc, item| {
            acc.try_add(&item.subtotal()?).ok_or(CartError::Overflow)
        })
    }

    fn check_index(&self, index: usize) -> Result<(), CartError> {
        if index >= self.items.len() {
            return Err(CartError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(())
    }

    fn item_mut(&mut self, index: usize) -> Result<&mut LineItem, CartError> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(CartError::IndexOutOfRange { index, len })
    }
}

fn check_limit(quantity: i64) -> Result<(), CartError> {
    if quantity > MAX_QUANTITY_PER_ITEM {
        return Err(CartError::QuantityExceedsLimit(
            quantity,
            MAX_QUANTITY_PER_ITEM,
        ));
    }
    Ok(())
}

/// One product entry in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub name: String,
    pub unit_price: Money,
    /// Always at least one while the item is in a cart.
    pub quantity: i64,
    pub image_url: String,
}

impl LineItem {
    pub fn new(
        name: impl Into<String>,
        unit_price: Money,
        image_url: impl Into<String>,
        quantity: i64,
    ) -> Result<Self, CartError> {
        let item = Self {
            name: name.into(),
            unit_price,
            quantity,
            image_url: image_url.into(),
        };
        item.validate(unit_price.currency)?;
        Ok(item)
    }

    /// unit price × quantity.
    pub fn subtotal(&self) -> Result<Money, CartError> {
        self.unit_price
            .try_multiply(self.quantity)
            .ok_or(CartError::Overflow)
    }

    fn validate(&self, currency: Currency) -> Result<(), CartError> {
        if self.quantity <= 0 {
            return Err(CartError::InvalidQuantity(self.quantity));
        }
        check_limit(self.quantity)?;
        if self.unit_price.is_negative() {
            return Err(CartError::InvalidPrice(self.unit_price.display_amount()));
        }
        if self.unit_price.currency != currency {
            return Err(CartError::InvalidPrice(format!(
                "{} price in a {} cart",
                self.unit_price.currency, currency
            )));
        }
        Ok(())
    }
}
