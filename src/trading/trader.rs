//! Thin per-market wrapper over the trading client.
//!
//! [`MarketTrader`] holds the injected [`ClobApi`] instance plus the
//! configured market id, and reshapes exchange responses into the records the
//! CLI prints. Each operation is a single round-trip; failures propagate
//! as-is.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::clob::types::{NewOrder, OrderQuery, PriceLevel};
use crate::clob::ClobApi;
use crate::error::{Error, Result};

use super::order::OrderTicket;

/// Status filter used when listing this market's orders.
const OPEN_STATUS: &str = "OPEN";

/// Best bid/ask and mid price for a market.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    /// Best bid price, if any bids exist.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub best_bid: Option<Decimal>,
    /// Best ask price, if any asks exist.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub best_ask: Option<Decimal>,
    /// Arithmetic mean of best bid and ask; present only when both are.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub mid: Option<Decimal>,
}

/// Projection of the market metadata record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketDetails {
    /// Market question text.
    pub question: Option<String>,
    /// Longer market description.
    pub description: Option<String>,
    /// Resolution timestamp.
    pub resolution_time: Option<String>,
    /// Outcome tokens.
    pub outcome_tokens: Option<Value>,
    /// Traded volume.
    pub volume: Option<Value>,
    /// Market status.
    pub market_status: Option<String>,
    /// Extra venue-specific info.
    pub extra_info: Option<Value>,
}

/// Per-market trader: the five operations the CLI dispatches to.
pub struct MarketTrader {
    clob: Arc<dyn ClobApi>,
    market_id: String,
}

impl MarketTrader {
    /// Create a trader for one market.
    ///
    /// Fails with an invalid-argument error if the market id is empty.
    pub fn new(clob: Arc<dyn ClobApi>, market_id: impl Into<String>) -> Result<Self> {
        let market_id = market_id.into();
        if market_id.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "a market id is required to initialize the trader".to_string(),
            ));
        }
        Ok(Self { clob, market_id })
    }

    /// The configured market id.
    pub fn market_id(&self) -> &str {
        &self.market_id
    }

    /// Get current best bid/ask and mid price for the configured market.
    ///
    /// A quoted price of zero is a real price and is preserved; only a
    /// missing side yields `None`.
    pub async fn current_price(&self) -> Result<PriceQuote> {
        let book = self.clob.get_order_book(&self.market_id).await?;

        let best_bid = first_price(book.bids.as_deref())?;
        let best_ask = first_price(book.asks.as_deref())?;

        let mid = match (best_bid, best_ask) {
            (Some(bid), Some(ask)) => Some((bid + ask) / Decimal::TWO),
            _ => None,
        };

        Ok(PriceQuote {
            best_bid,
            best_ask,
            mid,
        })
    }

    /// Get market metadata for the configured market.
    pub async fn market_details(&self) -> Result<MarketDetails> {
        let market = self.clob.get_market(&self.market_id).await?;

        Ok(MarketDetails {
            question: market.question,
            description: market.description,
            resolution_time: market.end_date,
            outcome_tokens: market.outcomes,
            volume: market.volume,
            market_status: market.status,
            extra_info: market.extra_info,
        })
    }

    /// Place a limit order.
    ///
    /// Price and size are forwarded as decimal strings; the exchange response
    /// is returned unmodified.
    pub async fn place_order(&self, ticket: OrderTicket) -> Result<Value> {
        ticket.validate().map_err(Error::InvalidArgument)?;

        let order = NewOrder {
            market_id: self.market_id.clone(),
            side: ticket.side.to_string(),
            price: ticket.price.to_string(),
            size: ticket.size.to_string(),
            expiration: ticket.expiration,
        };

        self.clob.create_order(order).await
    }

    /// Cancel an order by its id.
    ///
    /// An empty id fails before any network call.
    pub async fn cancel_order(&self, order_id: &str) -> Result<Value> {
        if order_id.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "an order id is required to cancel an order".to_string(),
            ));
        }

        self.clob.cancel_order(order_id).await
    }

    /// List open orders for the configured market, unmodified.
    pub async fn open_orders(&self) -> Result<Vec<Value>> {
        self.clob
            .get_orders(OrderQuery {
                market: self.market_id.clone(),
                status: OPEN_STATUS.to_string(),
            })
            .await
    }
}

/// Parse the price of the first level, if the side has any.
fn first_price(levels: Option<&[PriceLevel]>) -> Result<Option<Decimal>> {
    match levels.and_then(|levels| levels.first()) {
        Some(level) => level
            .price
            .parse::<Decimal>()
            .map(Some)
            .map_err(|e| Error::Decode(format!("price level {:?}: {}", level.price, e))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clob::types::MarketRecord;
    use crate::clob::MockClobClient;
    use crate::trading::order::Side;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use serde_json::json;

    const MARKET_ID: &str = "market-1";

    fn trader_with_mock() -> (Arc<MockClobClient>, MarketTrader) {
        let mock = Arc::new(MockClobClient::new());
        let trader = MarketTrader::new(mock.clone(), MARKET_ID).unwrap();
        (mock, trader)
    }

    #[test]
    fn construction_requires_market_id() {
        let mock = Arc::new(MockClobClient::new());
        let result = MarketTrader::new(mock, "");
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn current_price_computes_mid() {
        let (mock, trader) = trader_with_mock();
        mock.set_book(&[("0.40", "100")], &[("0.60", "50")]);

        let quote = trader.current_price().await.unwrap();
        assert_eq!(quote.best_bid, Some(dec!(0.40)));
        assert_eq!(quote.best_ask, Some(dec!(0.60)));
        assert_eq!(quote.mid, Some(dec!(0.50)));
    }

    #[tokio::test]
    async fn current_price_serializes_numeric_fields() {
        let (mock, trader) = trader_with_mock();
        mock.set_book(&[("0.40", "100")], &[("0.60", "50")]);

        let quote = trader.current_price().await.unwrap();
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(
            json,
            json!({ "bestBid": 0.4, "bestAsk": 0.6, "mid": 0.5 })
        );
    }

    #[tokio::test]
    async fn current_price_without_asks_has_no_mid() {
        let (mock, trader) = trader_with_mock();
        mock.set_one_sided_book(&[("0.40", "100")]);

        let quote = trader.current_price().await.unwrap();
        assert_eq!(quote.best_bid, Some(dec!(0.40)));
        assert_eq!(quote.best_ask, None);
        assert_eq!(quote.mid, None);
    }

    #[tokio::test]
    async fn current_price_of_empty_book_is_all_none() {
        let (mock, trader) = trader_with_mock();
        mock.set_book(&[], &[]);

        let quote = trader.current_price().await.unwrap();
        assert_eq!(
            quote,
            PriceQuote {
                best_bid: None,
                best_ask: None,
                mid: None
            }
        );
    }

    #[tokio::test]
    async fn zero_is_a_valid_price() {
        let (mock, trader) = trader_with_mock();
        mock.set_book(&[("0", "10")], &[("0.10", "10")]);

        let quote = trader.current_price().await.unwrap();
        assert_eq!(quote.best_bid, Some(dec!(0)));
        assert_eq!(quote.mid, Some(dec!(0.05)));
    }

    #[tokio::test]
    async fn unparseable_price_is_a_decode_error() {
        let (mock, trader) = trader_with_mock();
        mock.set_book(&[("not-a-price", "10")], &[("0.60", "10")]);

        let result = trader.current_price().await;
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[tokio::test]
    async fn market_details_projects_record_fields() {
        let (mock, trader) = trader_with_mock();
        mock.set_market(MarketRecord {
            question: Some("Will ETH close up today?".to_string()),
            description: Some("Daily ETH up-or-down market".to_string()),
            end_date: Some("2026-09-01T00:00:00Z".to_string()),
            outcomes: Some(json!(["Yes", "No"])),
            volume: Some(json!("12345.67")),
            status: Some("active".to_string()),
            extra_info: None,
        });

        let details = trader.market_details().await.unwrap();
        assert_eq!(details.question.as_deref(), Some("Will ETH close up today?"));
        assert_eq!(
            details.resolution_time.as_deref(),
            Some("2026-09-01T00:00:00Z")
        );
        assert_eq!(details.outcome_tokens, Some(json!(["Yes", "No"])));
        assert_eq!(details.market_status.as_deref(), Some("active"));

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["resolutionTime"], json!("2026-09-01T00:00:00Z"));
        assert_eq!(json["marketStatus"], json!("active"));
    }

    #[tokio::test]
    async fn place_order_forwards_price_and_size_as_strings() {
        let (mock, trader) = trader_with_mock();

        trader
            .place_order(OrderTicket::buy(dec!(0.5), dec!(10)))
            .await
            .unwrap();

        let created = mock.created();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].market_id, MARKET_ID);
        assert_eq!(created[0].side, "BUY");
        assert_eq!(created[0].price, "0.5");
        assert_eq!(created[0].size, "10");
        assert_eq!(created[0].expiration, None);
    }

    #[tokio::test]
    async fn place_order_forwards_expiration() {
        let (mock, trader) = trader_with_mock();

        trader
            .place_order(OrderTicket::sell(dec!(0.65), dec!(25)).with_expiration(1_730_000_000))
            .await
            .unwrap();

        let created = mock.created();
        assert_eq!(created[0].side, "SELL");
        assert_eq!(created[0].expiration, Some(1_730_000_000));
    }

    #[tokio::test]
    async fn place_order_returns_exchange_response_unmodified() {
        let (mock, trader) = trader_with_mock();
        mock.set_create_response(json!({ "orderID": "0xdeadbeef", "success": true }));

        let response = trader
            .place_order(OrderTicket::buy(dec!(0.5), dec!(10)))
            .await
            .unwrap();
        assert_eq!(response, json!({ "orderID": "0xdeadbeef", "success": true }));
    }

    #[tokio::test]
    async fn invalid_ticket_never_reaches_the_exchange() {
        let (mock, trader) = trader_with_mock();

        let ticket = OrderTicket {
            side: Side::Buy,
            price: dec!(0),
            size: dec!(10),
            expiration: None,
        };
        let result = trader.place_order(ticket).await;

        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn cancel_empty_order_id_makes_no_network_call() {
        let (mock, trader) = trader_with_mock();

        let result = trader.cancel_order("").await;
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn cancel_forwards_order_id() {
        let (mock, trader) = trader_with_mock();

        let result = trader.cancel_order("abc-123").await.unwrap();
        assert_eq!(result, json!({ "canceled": ["abc-123"] }));
        assert_eq!(mock.cancelled(), vec!["abc-123".to_string()]);
    }

    #[tokio::test]
    async fn open_orders_filters_to_market_and_open_status() {
        let (mock, trader) = trader_with_mock();
        mock.set_open_orders(vec![json!({ "id": "o-1" }), json!({ "id": "o-2" })]);

        let orders = trader.open_orders().await.unwrap();
        assert_eq!(orders.len(), 2);

        let queries = mock.queries();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].market, MARKET_ID);
        assert_eq!(queries[0].status, "OPEN");
    }

    #[tokio::test]
    async fn exchange_failures_propagate() {
        let (mock, trader) = trader_with_mock();
        mock.fail_with("exchange unavailable");

        let result = trader.current_price().await;
        assert!(matches!(result, Err(Error::Api { .. })));
    }
}
