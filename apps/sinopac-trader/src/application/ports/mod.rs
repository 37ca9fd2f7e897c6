//! Application Ports
//!
//! Ports define interfaces for interacting with external systems. The only
//! driven port is the brokerage SDK.

mod broker_port;

pub use broker_port::{BrokerConnector, BrokerError, BrokerPort, TradingMode};
