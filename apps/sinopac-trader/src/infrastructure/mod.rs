//! Infrastructure Layer
//!
//! Adapters for the ports defined in the application layer.
//!
//! - `broker/`: Brokerage SDK adapters (Shioaji gateway)

pub mod broker;
