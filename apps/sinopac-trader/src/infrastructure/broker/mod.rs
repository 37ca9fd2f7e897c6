//! Broker Adapters
//!
//! Implementations of `BrokerConnector` and `BrokerPort`.

pub mod shioaji;

pub use shioaji::{GatewayConfig, GatewayError, ShioajiGatewayClient, ShioajiGatewayConnector};
