//! Wire types exchanged with the CLOB API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Order book response from the API.
///
/// Prices and sizes stay in their string wire form here; callers parse them
/// into `Decimal` where arithmetic is needed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderBookSnapshot {
    /// Bid levels, best first.
    pub bids: Option<Vec<PriceLevel>>,
    /// Ask levels, best first.
    pub asks: Option<Vec<PriceLevel>>,
    /// Market ID.
    pub market: Option<String>,
    /// Asset ID.
    pub asset_id: Option<String>,
}

/// Single price level in an order book.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PriceLevel {
    /// Price at this level.
    pub price: String,
    /// Size available at this level.
    pub size: String,
}

/// Market metadata record from the API.
///
/// Only the fields the CLI projects are named; anything loosely typed
/// upstream passes through as raw JSON.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketRecord {
    /// Market question text.
    pub question: Option<String>,
    /// Longer market description.
    pub description: Option<String>,
    /// Resolution timestamp (ISO format).
    pub end_date: Option<String>,
    /// Outcome tokens.
    pub outcomes: Option<Value>,
    /// Traded volume.
    pub volume: Option<Value>,
    /// Market status.
    pub status: Option<String>,
    /// Extra venue-specific info.
    pub extra_info: Option<Value>,
}

/// Order submission request body.
///
/// Price and size are sent as strings to avoid floating-point serialization
/// ambiguity on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    /// Market the order targets.
    pub market_id: String,
    /// Order side (BUY/SELL).
    pub side: String,
    /// Limit price, decimal string.
    pub price: String,
    /// Order size, decimal string.
    pub size: String,
    /// Optional expiration timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<i64>,
}

/// Query parameters for listing orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderQuery {
    /// Market to filter on.
    pub market: String,
    /// Order status to filter on (e.g. "OPEN").
    pub status: String,
}
