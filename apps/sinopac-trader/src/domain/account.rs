//! Brokerage account references.
//!
//! The SDK hands back one entry per account the login can trade with. Each
//! entry is tagged by kind and carries a `signed` flag: the vendor refuses
//! orders from an account that has not completed its signing step.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of brokerage account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Securities (cash/margin) account.
    Stock,
    /// Futures and options account.
    Future,
}

impl AccountKind {
    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stock => "stock",
            Self::Future => "future",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an account-type token is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported account type: {0}")]
pub struct UnknownAccountKind(pub String);

impl FromStr for AccountKind {
    type Err = UnknownAccountKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("stock") {
            Ok(Self::Stock)
        } else if s.eq_ignore_ascii_case("future") {
            Ok(Self::Future)
        } else {
            Err(UnknownAccountKind(s.to_string()))
        }
    }
}

/// Fields common to every account kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    /// Account number.
    pub account_id: String,
    /// Branch code.
    pub broker_id: String,
    /// Owner's person ID.
    pub person_id: String,
    /// Owner's display name.
    pub username: String,
    /// Whether the account has completed the vendor's signing step.
    pub signed: bool,
}

/// A brokerage account returned by login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Account {
    /// Securities account.
    Stock(AccountInfo),
    /// Futures account.
    Future(AccountInfo),
}

impl Account {
    /// The account's kind tag.
    #[must_use]
    pub const fn kind(&self) -> AccountKind {
        match self {
            Self::Stock(_) => AccountKind::Stock,
            Self::Future(_) => AccountKind::Future,
        }
    }

    /// Fields shared by all kinds.
    #[must_use]
    pub const fn info(&self) -> &AccountInfo {
        match self {
            Self::Stock(info) | Self::Future(info) => info,
        }
    }

    /// Account number.
    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.info().account_id
    }

    /// Whether orders may be placed from this account.
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        self.info().signed
    }
}
