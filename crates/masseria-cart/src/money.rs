//! Money type for representing monetary values.
//!
//! Uses integer minor units to avoid floating-point precision issues.
//! Floats only appear at the JSON boundary, where the existing site stores
//! and posts prices as plain numbers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Peruvian sol.
    #[default]
    PEN,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "PEN").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::PEN => "PEN",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Text placed before the amount (e.g., "S/ " for "S/ 25.00").
    pub fn prefix(&self) -> &'static str {
        match self {
            Currency::PEN => "S/ ",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (céntimos for PEN).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_cents: i64,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount, rounding to the nearest
    /// minor unit. Returns `None` for NaN, infinities and out-of-range values.
    ///
    /// ```
    /// use masseria_cart::money::{Currency, Money};
    /// let price = Money::from_decimal(25.5, Currency::PEN).unwrap();
    /// assert_eq!(price.amount_cents, 2550);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Option<Self> {
        let scaled = (amount * currency.minor_per_major() as f64).round();
        if !scaled.is_finite() || scaled.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Self::new(scaled as i64, currency))
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value (JSON boundary only).
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / self.currency.minor_per_major() as f64
    }

    /// Format with the currency prefix (e.g., "S/ 25.00").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.prefix(), self.display_amount())
    }

    /// Format without prefix (e.g., "25.00").
    pub fn display_amount(&self) -> String {
        let per = self.currency.minor_per_major().unsigned_abs();
        let abs = self.amount_cents.unsigned_abs();
        let sign = if self.is_negative() { "-" } else { "" };
        let places = self.currency.decimal_places() as usize;
        format!("{}{}.{:0places$}", sign, abs / per, abs % per)
    }

    /// Try to add another Money value, returning None on currency mismatch
    /// or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount_cents.checked_add(other.amount_cents)?;
        Some(Money::new(amount, self.currency))
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        let amount = self.amount_cents.checked_mul(factor)?;
        Some(Money::new(amount, self.currency))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
