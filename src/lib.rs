//! Command-line trading utility for a single Polymarket CLOB market.
//!
//! The binary reads its configuration from the environment, connects to the
//! CLOB API for one configured market, and exposes a handful of subcommands:
//! price lookup, market metadata, open-order listing, order placement and
//! cancellation. Every command is a single round-trip; results are printed as
//! indented JSON.
//!
//! # Modules
//!
//! - [`cli`]: Command definitions and argv normalization
//! - [`clob`]: Trading-client seam (HTTP implementation and test mock)
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`signing`]: Private-key signer and CLOB auth headers
//! - [`trading`]: Order types and the per-market trader

pub mod cli;
pub mod clob;
pub mod config;
pub mod error;
pub mod signing;
pub mod trading;

pub use config::Config;
pub use error::{Error, Result};
pub use trading::trader::MarketTrader;
