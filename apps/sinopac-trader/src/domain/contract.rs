//! Contract (tradable instrument) descriptors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Security type of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecurityType {
    /// Listed stock or ETF.
    #[serde(rename = "STK")]
    Stock,
    /// Futures contract.
    #[serde(rename = "FUT")]
    Future,
    /// Options contract.
    #[serde(rename = "OPT")]
    Option,
    /// Index.
    #[serde(rename = "IND")]
    Index,
}

/// A contract resolved from the vendor's contract tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    /// Security type.
    pub security_type: SecurityType,
    /// Exchange (e.g. "TSE", "OTC", "TAIFEX").
    pub exchange: String,
    /// Contract code (e.g. "2330", "TXFR1").
    pub code: String,
    /// Vendor symbol.
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// Category code.
    #[serde(default)]
    pub category: String,
    /// Previous close used as the reference price.
    #[serde(default)]
    pub reference: Option<Decimal>,
    /// Upper price limit for the day.
    #[serde(default)]
    pub limit_up: Option<Decimal>,
    /// Lower price limit for the day.
    #[serde(default)]
    pub limit_down: Option<Decimal>,
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.exchange, self.code, self.name)
    }
}
