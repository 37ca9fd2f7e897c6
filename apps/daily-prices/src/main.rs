//! Daily Prices Binary
//!
//! Logs into FinMind with the token file when one exists, downloads one
//! stock's daily prices and prints them as a table.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p daily-prices -- --stock-id 2454 --start 2025-01-01 --end 2025-05-01
//! ```

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use daily_prices::{DailyPrice, FinMindClient, FinMindConfig, default_token_path, load_token};

/// Download daily stock prices from FinMind.
#[derive(Parser, Debug)]
#[command(name = "daily-prices")]
#[command(version)]
struct Args {
    /// Stock code
    #[arg(long, default_value = "2454")]
    stock_id: String,

    /// First date (YYYY-MM-DD)
    #[arg(long, default_value = "2025-01-01")]
    start: NaiveDate,

    /// Last date (YYYY-MM-DD)
    #[arg(long, default_value = "2025-05-01")]
    end: NaiveDate,

    /// Token file (default: ~/.finMind)
    #[arg(long)]
    token_file: Option<PathBuf>,

    /// API base URL
    #[arg(long, default_value = daily_prices::config::DEFAULT_BASE_URL)]
    base_url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let mut client = FinMindClient::new(FinMindConfig::new(args.base_url))
        .context("Failed to create FinMind client")?;

    let token_path = match args.token_file {
        Some(path) => path,
        None => default_token_path()?,
    };
    match load_token(&token_path) {
        Ok(token) => client.login_by_token(token),
        Err(e) => tracing::warn!(error = %e, "Continuing without a FinMind token"),
    }

    let rows = client
        .taiwan_stock_daily(&args.stock_id, args.start, args.end)
        .await
        .context("Failed to download daily prices")?;

    println!("{}", DailyPrice::header());
    for row in &rows {
        println!("{row}");
    }
    println!("{} rows", rows.len());

    Ok(())
}
