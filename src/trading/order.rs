//! Order types and validation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Order side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(ascii_case_insensitive)]
pub enum Side {
    /// Buy order.
    #[strum(to_string = "BUY")]
    Buy,
    /// Sell order.
    #[strum(to_string = "SELL")]
    Sell,
}

/// Parameters for a limit order, validated before any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderTicket {
    /// Order side (buy/sell).
    pub side: Side,
    /// Limit price.
    pub price: Decimal,
    /// Order size.
    pub size: Decimal,
    /// Optional expiration timestamp.
    pub expiration: Option<i64>,
}

impl OrderTicket {
    /// Create a new buy ticket.
    pub fn buy(price: Decimal, size: Decimal) -> Self {
        Self {
            side: Side::Buy,
            price,
            size,
            expiration: None,
        }
    }

    /// Create a new sell ticket.
    pub fn sell(price: Decimal, size: Decimal) -> Self {
        Self {
            side: Side::Sell,
            price,
            size,
            expiration: None,
        }
    }

    /// Set an expiration timestamp.
    pub fn with_expiration(mut self, expiration: i64) -> Self {
        self.expiration = Some(expiration);
        self
    }

    /// Validate order parameters.
    ///
    /// Prediction-market prices are probabilities, so the price must sit in
    /// (0, 1].
    pub fn validate(&self) -> Result<(), String> {
        if self.price <= Decimal::ZERO {
            return Err("price must be positive".to_string());
        }
        if self.price > Decimal::ONE {
            return Err("price must not exceed 1".to_string());
        }
        if self.size <= Decimal::ZERO {
            return Err("size must be positive".to_string());
        }
        Ok(())
    }
}
