//! CLI entry point: logging init, argument parsing, dispatch, exit codes.

use std::sync::Arc;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use polymarket_cli::cli::{normalize_args, Cli, Command};
use polymarket_cli::clob::ClobClient;
use polymarket_cli::config::Config;
use polymarket_cli::trading::{MarketTrader, OrderTicket};

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays clean JSON.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cli = match Cli::try_parse_from(normalize_args(std::env::args())) {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version are successful outcomes; everything else is a
            // usage error. clap already routes help to stdout and errors
            // (with a usage line) to stderr.
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        std::process::exit(0);
    };

    if let Err(err) = run(command).await {
        error!("{err:#}");
        std::process::exit(1);
    }
}

/// Dispatch one subcommand: load config, build the trader, run the single
/// operation, print the result as indented JSON.
async fn run(command: Command) -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    let clob = Arc::new(ClobClient::new(&config)?);
    let trader = MarketTrader::new(clob, config.polymarket_market_id.clone())?;

    match command {
        Command::Price => print_json(&trader.current_price().await?)?,
        Command::Market => print_json(&trader.market_details().await?)?,
        Command::OpenOrders => print_json(&trader.open_orders().await?)?,
        Command::PlaceOrder {
            side,
            price,
            size,
            expiration,
        } => {
            let ticket = OrderTicket {
                side,
                price,
                size,
                expiration,
            };
            print_json(&trader.place_order(ticket).await?)?;
        }
        Command::CancelOrder { order_id } => {
            print_json(&trader.cancel_order(&order_id).await?)?;
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
