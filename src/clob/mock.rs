//! Mock trading client for unit testing.
//!
//! Serves canned responses and records every call so tests can assert both
//! what was forwarded to the exchange and that no call happened at all.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::{Error, Result};

use super::types::{MarketRecord, NewOrder, OrderBookSnapshot, OrderQuery, PriceLevel};
use super::ClobApi;

/// Mock implementation of [`ClobApi`].
#[derive(Debug, Default)]
pub struct MockClobClient {
    book: Mutex<OrderBookSnapshot>,
    market: Mutex<MarketRecord>,
    open_orders: Mutex<Vec<Value>>,
    create_response: Mutex<Option<Value>>,
    created: Mutex<Vec<NewOrder>>,
    cancelled: Mutex<Vec<String>>,
    queries: Mutex<Vec<OrderQuery>>,
    calls: AtomicUsize,
    failure: Mutex<Option<String>>,
}

impl MockClobClient {
    /// Create a mock with empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the order book served by `get_order_book`, levels as (price, size).
    pub fn set_book(&self, bids: &[(&str, &str)], asks: &[(&str, &str)]) {
        let to_levels = |levels: &[(&str, &str)]| -> Vec<PriceLevel> {
            levels
                .iter()
                .map(|(price, size)| PriceLevel {
                    price: price.to_string(),
                    size: size.to_string(),
                })
                .collect()
        };

        *self.book.lock().unwrap() = OrderBookSnapshot {
            bids: Some(to_levels(bids)),
            asks: Some(to_levels(asks)),
            market: None,
            asset_id: None,
        };
    }

    /// Set the order book with one side missing entirely.
    pub fn set_one_sided_book(&self, bids: &[(&str, &str)]) {
        let levels = bids
            .iter()
            .map(|(price, size)| PriceLevel {
                price: price.to_string(),
                size: size.to_string(),
            })
            .collect();

        *self.book.lock().unwrap() = OrderBookSnapshot {
            bids: Some(levels),
            asks: None,
            market: None,
            asset_id: None,
        };
    }

    /// Set the market record served by `get_market`.
    pub fn set_market(&self, record: MarketRecord) {
        *self.market.lock().unwrap() = record;
    }

    /// Set the list served by `get_orders`.
    pub fn set_open_orders(&self, orders: Vec<Value>) {
        *self.open_orders.lock().unwrap() = orders;
    }

    /// Set the response returned by `create_order`.
    pub fn set_create_response(&self, response: Value) {
        *self.create_response.lock().unwrap() = Some(response);
    }

    /// Make every subsequent call fail with the given message.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(message.into());
    }

    /// Total number of calls made against the mock.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Orders forwarded to `create_order`.
    pub fn created(&self) -> Vec<NewOrder> {
        self.created.lock().unwrap().clone()
    }

    /// Order ids forwarded to `cancel_order`.
    pub fn cancelled(&self) -> Vec<String> {
        self.cancelled.lock().unwrap().clone()
    }

    /// Queries forwarded to `get_orders`.
    pub fn queries(&self) -> Vec<OrderQuery> {
        self.queries.lock().unwrap().clone()
    }

    fn record_call(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(Error::Api {
                endpoint: "mock".to_string(),
                status: 500,
                body: message,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ClobApi for MockClobClient {
    async fn get_order_book(&self, _market_id: &str) -> Result<OrderBookSnapshot> {
        self.record_call()?;
        Ok(self.book.lock().unwrap().clone())
    }

    async fn get_market(&self, _market_id: &str) -> Result<MarketRecord> {
        self.record_call()?;
        Ok(self.market.lock().unwrap().clone())
    }

    async fn create_order(&self, order: NewOrder) -> Result<Value> {
        self.record_call()?;
        self.created.lock().unwrap().push(order);
        Ok(self
            .create_response
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| json!({ "orderId": "mock-order-1", "status": "live" })))
    }

    async fn cancel_order(&self, order_id: &str) -> Result<Value> {
        self.record_call()?;
        self.cancelled.lock().unwrap().push(order_id.to_string());
        Ok(json!({ "canceled": [order_id] }))
    }

    async fn get_orders(&self, query: OrderQuery) -> Result<Vec<Value>> {
        self.record_call()?;
        self.queries.lock().unwrap().push(query);
        Ok(self.open_orders.lock().unwrap().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_serves_configured_book() {
        let mock = MockClobClient::new();
        mock.set_book(&[("0.48", "100")], &[("0.52", "100")]);

        let book = mock.get_order_book("m-1").await.unwrap();
        assert_eq!(book.bids.unwrap()[0].price, "0.48");
        assert_eq!(book.asks.unwrap()[0].price, "0.52");
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn mock_records_cancellations() {
        let mock = MockClobClient::new();
        let result = mock.cancel_order("abc-123").await.unwrap();

        assert_eq!(result, json!({ "canceled": ["abc-123"] }));
        assert_eq!(mock.cancelled(), vec!["abc-123".to_string()]);
    }

    #[tokio::test]
    async fn mock_failure_mode_hits_every_call() {
        let mock = MockClobClient::new();
        mock.fail_with("exchange unavailable");

        assert!(mock.get_order_book("m-1").await.is_err());
        assert!(mock.get_market("m-1").await.is_err());
        assert_eq!(mock.calls(), 2);
    }
}
