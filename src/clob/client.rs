//! HTTP implementation of the trading-client seam.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::signing;

use super::types::{MarketRecord, NewOrder, OrderBookSnapshot, OrderQuery};
use super::ClobApi;

/// Polymarket CLOB API client.
///
/// One instance per process; every operation is a single request with no
/// retries. Authenticated endpoints carry `POLY_*` headers derived from the
/// configured private key.
#[derive(Debug, Clone)]
pub struct ClobClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Base URL for the CLOB API.
    host: String,
    /// Wallet private key.
    private_key: String,
    /// Chain ID (137 for Polygon).
    chain_id: u64,
}

impl ClobClient {
    /// Create a new client from config.
    ///
    /// Fails if the credential is missing; no network activity happens here.
    pub fn new(config: &Config) -> Result<Self> {
        if config.polymarket_private_key.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "a trading private key is required to initialize the client".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.http_timeout_ms))
            .build()?;

        Ok(Self {
            http,
            host: config.polymarket_api_host.trim_end_matches('/').to_string(),
            private_key: config.polymarket_private_key.clone(),
            chain_id: config.polymarket_chain_id,
        })
    }

    /// Get the CLOB base URL.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Get the chain ID.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Get the wallet address derived from the private key.
    pub fn address(&self) -> Result<String> {
        signing::address_from_private_key(&self.private_key)
    }

    /// Attach auth headers to a request builder.
    async fn authed(&self, request: reqwest::RequestBuilder) -> Result<reqwest::RequestBuilder> {
        let mut request = request;
        for (key, value) in signing::generate_auth_headers(&self.private_key).await? {
            request = request.header(&key, &value);
        }
        Ok(request)
    }

    /// Map non-success statuses to an API error with the response body.
    async fn check(endpoint: &str, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl ClobApi for ClobClient {
    #[instrument(skip(self), fields(market_id = %market_id))]
    async fn get_order_book(&self, market_id: &str) -> Result<OrderBookSnapshot> {
        let url = format!("{}/book", self.host);

        let response = self
            .http
            .get(&url)
            .query(&[("token_id", market_id)])
            .send()
            .await?;
        let response = Self::check("/book", response).await?;

        let book: OrderBookSnapshot = response
            .json()
            .await
            .map_err(|e| Error::Decode(format!("order book: {}", e)))?;

        debug!(
            bids = book.bids.as_ref().map(Vec::len).unwrap_or(0),
            asks = book.asks.as_ref().map(Vec::len).unwrap_or(0),
            "fetched order book"
        );

        Ok(book)
    }

    #[instrument(skip(self), fields(market_id = %market_id))]
    async fn get_market(&self, market_id: &str) -> Result<MarketRecord> {
        let url = format!("{}/markets/{}", self.host, market_id);

        let response = self.http.get(&url).send().await?;
        let response = Self::check("/markets", response).await?;

        response
            .json()
            .await
            .map_err(|e| Error::Decode(format!("market record: {}", e)))
    }

    #[instrument(skip(self, order), fields(side = %order.side, price = %order.price, size = %order.size))]
    async fn create_order(&self, order: NewOrder) -> Result<Value> {
        let url = format!("{}/order", self.host);

        let request = self.http.post(&url).json(&order);
        let request = self.authed(request).await?;

        let response = request.send().await?;
        let response = Self::check("/order", response).await?;

        response
            .json()
            .await
            .map_err(|e| Error::Decode(format!("order response: {}", e)))
    }

    #[instrument(skip(self), fields(order_id = %order_id))]
    async fn cancel_order(&self, order_id: &str) -> Result<Value> {
        let url = format!("{}/order/{}", self.host, order_id);

        let request = self.http.delete(&url);
        let request = self.authed(request).await?;

        let response = request.send().await?;
        let response = Self::check("/order", response).await?;

        response
            .json()
            .await
            .map_err(|e| Error::Decode(format!("cancel response: {}", e)))
    }

    #[instrument(skip(self), fields(market = %query.market, status = %query.status))]
    async fn get_orders(&self, query: OrderQuery) -> Result<Vec<Value>> {
        let url = format!("{}/orders", self.host);

        let request = self
            .http
            .get(&url)
            .query(&[("market", query.market.as_str()), ("status", query.status.as_str())]);
        let request = self.authed(request).await?;

        let response = request.send().await?;
        let response = Self::check("/orders", response).await?;

        response
            .json()
            .await
            .map_err(|e| Error::Decode(format!("orders list: {}", e)))
    }
}
