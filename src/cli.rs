//! Command-line surface: subcommand definitions and argv normalization.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use crate::trading::order::Side;

/// Trade a single Polymarket CLOB market from the command line.
///
/// Configuration comes from the environment: POLYMARKET_PRIVATE_KEY and
/// POLYMARKET_MARKET_ID are required; POLYMARKET_API_HOST and
/// POLYMARKET_CHAIN_ID are optional.
#[derive(Parser, Debug, PartialEq)]
#[command(name = "polymarket-cli")]
#[command(about = "Trade a single Polymarket CLOB market from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// The recognized subcommands.
#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Show best bid/ask and mid price for the market.
    Price,

    /// Show market metadata.
    Market,

    /// List open orders for the market.
    OpenOrders,

    /// Place a limit order (side = BUY | SELL).
    PlaceOrder {
        /// Order side: BUY or SELL (any case).
        side: Side,
        /// Limit price in (0, 1].
        price: Decimal,
        /// Order size in shares.
        size: Decimal,
        /// Optional expiration timestamp.
        expiration: Option<i64>,
    },

    /// Cancel a specific order.
    CancelOrder {
        /// Id of the order to cancel.
        order_id: String,
    },
}

/// Lowercase the command selector so dispatch is case-insensitive.
///
/// Only the first positional token is touched; command parameters (order ids,
/// BUY/SELL) pass through untouched.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args: Vec<String> = args.into_iter().collect();
    if let Some(selector) = args.get_mut(1) {
        if !selector.starts_with('-') {
            *selector = selector.to_lowercase();
        }
    }
    args
}
