//! Trading-client seam for the Polymarket CLOB.
//!
//! The rest of the crate consumes the exchange exclusively through
//! [`ClobApi`]; the wrapper never reimplements exchange semantics. The
//! production implementation is [`client::ClobClient`]; tests inject
//! [`mock::MockClobClient`].

pub mod client;
pub mod mock;
pub mod types;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use self::types::{MarketRecord, NewOrder, OrderBookSnapshot, OrderQuery};

pub use self::client::ClobClient;
pub use self::mock::MockClobClient;

/// The five exchange operations this tool consumes.
#[async_trait]
pub trait ClobApi: Send + Sync {
    /// Fetch the order book for a market.
    async fn get_order_book(&self, market_id: &str) -> Result<OrderBookSnapshot>;

    /// Fetch the metadata record for a market.
    async fn get_market(&self, market_id: &str) -> Result<MarketRecord>;

    /// Submit a new order. The exchange response is returned unmodified.
    async fn create_order(&self, order: NewOrder) -> Result<Value>;

    /// Cancel an order by id. The exchange response is returned unmodified.
    async fn cancel_order(&self, order_id: &str) -> Result<Value>;

    /// List orders matching the query. The list is returned unmodified.
    async fn get_orders(&self, query: OrderQuery) -> Result<Vec<Value>>;
}
