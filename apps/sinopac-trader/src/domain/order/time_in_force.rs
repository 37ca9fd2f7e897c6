//! Time in force for orders.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Time in force specifying order validity duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeInForce {
    /// Valid for the current trading day only.
    Day,
    /// Fill-or-kill (all or nothing, immediate execution required).
    Fok,
    /// Immediate-or-cancel (fill immediately, cancel remainder).
    Ioc,
    /// Rest of day: rests in the book until filled or the session ends.
    Rod,
}

impl TimeInForce {
    /// Vendor constant for this time in force.
    #[must_use]
    pub const fn vendor_code(&self) -> &'static str {
        match self {
            Self::Day => "DAY",
            Self::Fok => "FOK",
            Self::Ioc => "IOC",
            Self::Rod => "ROD",
        }
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.vendor_code())
    }
}
