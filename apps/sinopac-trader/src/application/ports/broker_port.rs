//! Broker Port (Driven Port)
//!
//! Interface to the brokerage SDK. Every method is one blocking round trip
//! to the vendor as far as the session is concerned.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{
    Account, Contract, Credentials, KBar, OrderRequest, PositionDetail, PositionSummary, Tick,
    TicksQuery, Trade,
};

/// Which vendor environment a client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradingMode {
    /// Vendor simulation environment (no real orders).
    #[default]
    Simulation,
    /// Production environment (real money).
    Live,
}

impl TradingMode {
    /// Check if this is live trading.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self, Self::Live)
    }

    /// Check if this is the simulation environment.
    #[must_use]
    pub const fn is_simulation(&self) -> bool {
        matches!(self, Self::Simulation)
    }
}

impl fmt::Display for TradingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simulation => write!(f, "SIMULATION"),
            Self::Live => write!(f, "LIVE"),
        }
    }
}

/// Broker port error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BrokerError {
    /// Connection error.
    #[error("Broker connection error: {message}")]
    ConnectionError {
        /// Error details.
        message: String,
    },

    /// Credentials were refused or the session token expired.
    #[error("Broker authentication failed")]
    AuthenticationFailed,

    /// No contract with that code in the requested table.
    #[error("Contract not found: {code}")]
    ContractNotFound {
        /// The missing contract code.
        code: String,
    },

    /// Order rejected by broker.
    #[error("Order rejected: {reason}")]
    OrderRejected {
        /// Rejection reason.
        reason: String,
    },

    /// Rate limited.
    #[error("Rate limited by broker")]
    RateLimited,

    /// The broker answered with something this crate cannot interpret.
    #[error("Invalid broker response: {message}")]
    InvalidResponse {
        /// Error details.
        message: String,
    },

    /// Unknown error.
    #[error("Broker error: {message}")]
    Unknown {
        /// Error details.
        message: String,
    },
}

/// Creates SDK client handles.
///
/// Constructing a client does not log in; it only binds the handle to an
/// environment.
pub trait BrokerConnector {
    /// Client type produced by this connector.
    type Client: BrokerPort;

    /// Create a client for the given environment.
    fn connect(&self, mode: TradingMode) -> Result<Self::Client, BrokerError>;
}

/// Port for brokerage SDK interactions.
#[async_trait]
pub trait BrokerPort: Send + Sync {
    /// Log in and return the accounts the credentials can trade with.
    async fn login(&self, credentials: &Credentials) -> Result<Vec<Account>, BrokerError>;

    /// Resolve a contract from the stock contract table.
    async fn stock_contract(&self, code: &str) -> Result<Contract, BrokerError>;

    /// Resolve a contract from the futures contract table.
    async fn future_contract(&self, code: &str) -> Result<Contract, BrokerError>;

    /// Historical ticks for a contract.
    async fn ticks(
        &self,
        contract: &Contract,
        query: TicksQuery,
    ) -> Result<Vec<Tick>, BrokerError>;

    /// Historical k-bars for a contract over an inclusive date range.
    async fn kbars(
        &self,
        contract: &Contract,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<KBar>, BrokerError>;

    /// Submit an order.
    async fn place_order(
        &self,
        contract: &Contract,
        order: &OrderRequest,
        account: &Account,
    ) -> Result<Trade, BrokerError>;

    /// Per-contract position summary for an account.
    async fn position_summary(
        &self,
        account: &Account,
    ) -> Result<Vec<PositionSummary>, BrokerError>;

    /// Per-lot position listing for an account.
    async fn list_positions(&self, account: &Account) -> Result<Vec<PositionDetail>, BrokerError>;

    /// End the vendor session.
    async fn logout(&self) -> Result<(), BrokerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trading_mode_default_is_simulation() {
        assert_eq!(TradingMode::default(), TradingMode::Simulation);
        assert!(TradingMode::default().is_simulation());
        assert!(!TradingMode::default().is_live());
    }

    #[test]
    fn trading_mode_display_and_serde() {
        assert_eq!(TradingMode::Live.to_string(), "LIVE");
        assert_eq!(TradingMode::Simulation.to_string(), "SIMULATION");
        let parsed: TradingMode = serde_json::from_str("\"LIVE\"").unwrap();
        assert!(parsed.is_live());
    }

    #[test]
    fn broker_error_messages() {
        let err = BrokerError::ContractNotFound {
            code: "9999".to_string(),
        };
        assert_eq!(err.to_string(), "Contract not found: 9999");
        assert_eq!(
            BrokerError::AuthenticationFailed.to_string(),
            "Broker authentication failed"
        );
    }
}
