//! Order types and the per-market trader.

pub mod order;
pub mod trader;

pub use self::order::{OrderTicket, Side};
pub use self::trader::{MarketDetails, MarketTrader, PriceQuote};
