//! Trade action (buy or sell).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Trade action, serialized as the vendor constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Buy.
    Buy,
    /// Sell.
    Sell,
}

impl Action {
    /// Vendor constant for this action.
    #[must_use]
    pub const fn vendor_code(&self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.vendor_code())
    }
}
