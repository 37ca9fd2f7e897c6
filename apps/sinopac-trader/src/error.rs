//! Session error taxonomy.
//!
//! Every public [`TraderSession`](crate::TraderSession) method returns
//! `Result<_, SessionError>`. [`SessionError::kind`] groups the variants:
//!
//! | Kind | Variants | Cause |
//! |------|----------|-------|
//! | `Configuration` | `Credentials` | Credential file missing, unreadable or incomplete |
//! | `Authentication` | `NoAccounts` | Login returned no accounts |
//! | `State` | `NotLoggedIn`, `AccountUnavailable`, `AccountNotSigned` | Operation not allowed in the current session state |
//! | `Parameter` | `UnsupportedValue` | Unrecognized order or account token |
//! | `Vendor` | `Broker` | The SDK or its transport failed |

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::ports::BrokerError;
use crate::domain::account::UnknownAccountKind;
use crate::domain::{AccountKind, CredentialError, OrderField, TranslateError};

/// Error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Missing or invalid local configuration.
    Configuration,
    /// The vendor did not authenticate the session.
    Authentication,
    /// The session is not in a state that allows the operation.
    State,
    /// A caller-supplied token is not supported.
    Parameter,
    /// The vendor call itself failed.
    Vendor,
}

/// Errors returned by the trader session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Credentials could not be obtained.
    #[error("credential error: {0}")]
    Credentials(#[from] CredentialError),

    /// Login succeeded at the transport level but returned no accounts.
    #[error("login failed: broker returned no accounts")]
    NoAccounts,

    /// Operation requires a logged-in session.
    #[error("not logged in")]
    NotLoggedIn,

    /// No account of the requested kind was returned at login.
    #[error("no {kind} account available")]
    AccountUnavailable {
        /// Requested account kind.
        kind: AccountKind,
    },

    /// The account has not completed the vendor's signing step.
    #[error("{kind} account {account_id} is not signed; orders are not allowed")]
    AccountNotSigned {
        /// Account kind.
        kind: AccountKind,
        /// Account number.
        account_id: String,
    },

    /// A token is not in its lookup table.
    #[error("unsupported {field}: {value}")]
    UnsupportedValue {
        /// Field the token was given for.
        field: OrderField,
        /// The token as the caller wrote it.
        value: String,
    },

    /// The SDK call failed.
    #[error(transparent)]
    Broker(#[from] BrokerError),
}

impl SessionError {
    /// Category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Credentials(_) => ErrorKind::Configuration,
            Self::NoAccounts => ErrorKind::Authentication,
            Self::NotLoggedIn | Self::AccountUnavailable { .. } | Self::AccountNotSigned { .. } => {
                ErrorKind::State
            }
            Self::UnsupportedValue { .. } => ErrorKind::Parameter,
            Self::Broker(_) => ErrorKind::Vendor,
        }
    }
}

impl From<TranslateError> for SessionError {
    fn from(err: TranslateError) -> Self {
        match err {
            TranslateError::Unsupported { field, value } => Self::UnsupportedValue { field, value },
        }
    }
}

impl From<UnknownAccountKind> for SessionError {
    fn from(err: UnknownAccountKind) -> Self {
        Self::UnsupportedValue {
            field: OrderField::AccountType,
            value: err.0,
        }
    }
}
