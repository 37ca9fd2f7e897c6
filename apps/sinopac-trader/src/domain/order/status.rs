//! Order status as reported by the vendor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status in the vendor's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Queued locally, not yet sent.
    PendingSubmit,
    /// Accepted by the broker before the session opens.
    PreSubmitted,
    /// Working at the exchange.
    Submitted,
    /// Some quantity filled.
    PartFilled,
    /// Completely filled.
    Filled,
    /// Canceled.
    Cancelled,
    /// Rejected by the broker or exchange.
    Failed,
    /// Any status this crate does not know about.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::PendingSubmit => "PendingSubmit",
            Self::PreSubmitted => "PreSubmitted",
            Self::Submitted => "Submitted",
            Self::PartFilled => "PartFilled",
            Self::Filled => "Filled",
            Self::Cancelled => "Cancelled",
            Self::Failed => "Failed",
            Self::Unknown => "Unknown",
        };
        f.pad(s)
    }
}
