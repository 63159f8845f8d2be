use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use nftcart::application::cart::CartAggregator;
use nftcart::application::config::{AggregatorConfig, ResultOrdering};
use nftcart::application::payment::CurrencyAggregator;
use nftcart::interfaces::csv::view_writer::ViewWriter;
use nftcart::interfaces::json::catalog_reader::CatalogReader;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON catalog with orders, NFTs, currencies and images
    catalog: PathBuf,

    /// Order of the rows in the output
    #[arg(long, value_enum, default_value_t = ResultOrdering::Request)]
    ordering: ResultOrdering,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the cart for an order
    Order { id: String },
    /// Replace the NFTs of an order and print the reloaded cart
    Change { id: String, items: Vec<String> },
    /// Print the payment currencies
    Currencies,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = AggregatorConfig::with_ordering(cli.ordering);

    let file = File::open(&cli.catalog).into_diagnostic()?;
    let market = Arc::new(
        CatalogReader::new(file)
            .into_marketplace()
            .await
            .into_diagnostic()?,
    );

    let stdout = io::stdout();
    let mut writer = ViewWriter::new(stdout.lock());
    match cli.command {
        Command::Order { id } => {
            let cart =
                CartAggregator::with_config(market.clone(), market.clone(), market, config);
            let state = cart.fetch_order(&id).await.into_diagnostic()?;
            writer.write_cart(&state).into_diagnostic()?;
        }
        Command::Change { id, items } => {
            let cart =
                CartAggregator::with_config(market.clone(), market.clone(), market, config);
            let state = cart.change_order(&id, items).await.into_diagnostic()?;
            writer.write_cart(&state).into_diagnostic()?;
        }
        Command::Currencies => {
            let payment = CurrencyAggregator::with_config(market.clone(), market, config);
            let state = payment.fetch_currencies().await.into_diagnostic()?;
            writer.write_payment(&state).into_diagnostic()?;
        }
    }

    Ok(())
}
