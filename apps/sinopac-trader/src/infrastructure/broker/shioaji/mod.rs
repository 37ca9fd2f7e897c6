//! Shioaji Gateway Adapter
//!
//! Implementation of `BrokerPort` for a local bridge process that hosts the
//! Shioaji SDK and exposes it as JSON over HTTP:
//! - Bearer token from login attached to every later call
//! - `X-Request-Id` on every request for correlating bridge logs
//! - Column-oriented market data converted to rows
//! - No retries; every failure is returned to the caller

mod adapter;
mod api_types;
mod config;
mod error;
mod http_client;

pub use adapter::{ShioajiGatewayClient, ShioajiGatewayConnector};
pub use config::GatewayConfig;
pub use error::GatewayError;
