//! Sinopac Trader Binary
//!
//! Logs in, prints k-bars, recent ticks, positions and holdings for TSMC
//! (2330), then asks before placing one limit buy. Always logs out.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p sinopac-trader
//! ```
//!
//! # Environment Variables
//!
//! - `SINOPAC_CONFIG`: Config file (default: `sinopac.yaml` if present)
//! - `SINOPAC_ENV`: SIMULATION | LIVE (overrides the config file)
//! - `RUST_LOG`: Log filter (overrides `logging.level`)

use anyhow::Context;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use sinopac_trader::config::load_config;
use sinopac_trader::observability::init_logging;
use sinopac_trader::{
    BrokerConnector, GatewayConfig, OrderTicket, ShioajiGatewayConnector, TraderSession,
};

const DEMO_CONTRACT: &str = "2330";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let config = load_config(None).context("Failed to load configuration")?;
    let _log_guard = init_logging(&config.logging).context("Failed to initialize logging")?;

    tracing::info!(
        mode = %config.mode,
        gateway = %config.gateway.base_url,
        "Starting sinopac-trader"
    );

    let credential_path = config
        .credentials
        .resolve()
        .context("Failed to resolve credential file path")?;
    let connector = ShioajiGatewayConnector::new(GatewayConfig::from(&config.gateway));

    let mut session = TraderSession::open(connector, config.mode, &credential_path).await;
    if !session.is_logged_in() {
        anyhow::bail!("login failed, see log for details");
    }

    let outcome = run(&session).await;

    // Log out even when the demo failed part way.
    if let Err(e) = session.logout().await {
        tracing::error!(error = %e, "Logout failed");
    }

    outcome
}

async fn run<C: BrokerConnector>(session: &TraderSession<C>) -> anyhow::Result<()> {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).context("invalid start date")?;

    // Query failures are already logged by the session; keep going.
    if let Ok(kbars) = session.get_kbars(DEMO_CONTRACT, start, None).await {
        println!("K-bars for {DEMO_CONTRACT} since {start}: {} bars", kbars.len());
        for bar in kbars.iter().rev().take(5).rev() {
            println!(
                "  {} O={} H={} L={} C={} V={}",
                bar.ts, bar.open, bar.high, bar.low, bar.close, bar.volume
            );
        }
    }

    if let Ok(ticks) = session.get_ticks(DEMO_CONTRACT).await {
        println!("Recent ticks for {DEMO_CONTRACT}:");
        for tick in &ticks {
            println!(
                "  {} {} x{} (bid {} / ask {})",
                tick.ts, tick.close, tick.volume, tick.bid_price, tick.ask_price
            );
        }
    }

    if let Ok(positions) = session.get_positions("stock").await {
        println!("Stock positions: {}", positions.len());
        for p in &positions {
            println!(
                "  {} {} x{} @ {} pnl={}",
                p.code, p.direction, p.quantity, p.price, p.pnl
            );
        }
    }

    if let Ok(inventory) = session.get_inventory("stock", true).await {
        println!("{inventory}");
    }

    let ticket = OrderTicket::new(
        DEMO_CONTRACT,
        Decimal::new(5000, 1),
        1,
        "Buy",
        "Limit",
        "ROD",
    );
    let prompt = format!(
        "Place {} {} x{} @ {} ({} / {})? [y/N] ",
        ticket.action,
        ticket.contract_id,
        ticket.quantity,
        ticket.price,
        ticket.order_type,
        ticket.price_type
    );

    if confirm(&prompt).await? {
        match session.place_order(&ticket).await {
            Ok(trade) => println!("Order result: {trade}"),
            Err(e) => println!("Order not placed: {e}"),
        }
    } else {
        println!("Order skipped");
    }

    Ok(())
}

async fn confirm(prompt: &str) -> std::io::Result<bool> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(prompt.as_bytes()).await?;
    stdout.flush().await?;

    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await?;

    Ok(line.trim().eq_ignore_ascii_case("y"))
}
