//! Order type (market or limit).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order pricing type, serialized as the vendor constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Market order - execute at best available price.
    #[serde(rename = "MKT")]
    Market,
    /// Limit order - execute at specified price or better.
    #[serde(rename = "LMT")]
    Limit,
}

impl OrderType {
    /// Vendor constant for this order type.
    #[must_use]
    pub const fn vendor_code(&self) -> &'static str {
        match self {
            Self::Market => "MKT",
            Self::Limit => "LMT",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.vendor_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_type_serde() {
        assert_eq!(serde_json::to_string(&OrderType::Limit).unwrap(), "\"LMT\"");
        let parsed: OrderType = serde_json::from_str("\"MKT\"").unwrap();
        assert_eq!(parsed, OrderType::Market);
    }
}
