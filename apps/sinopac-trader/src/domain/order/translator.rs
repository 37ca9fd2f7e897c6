//! Order parameter translator.
//!
//! Maps the lowercase tokens callers use for action, order type and time in
//! force onto vendor constants. Lookups ignore ASCII case. A token missing
//! from its table is an error and the order must not be built.

use std::fmt;

use thiserror::Error;

use super::{Action, OrderType, TimeInForce};

/// Action tokens.
pub const ACTION_TABLE: &[(&str, Action)] = &[("buy", Action::Buy), ("sell", Action::Sell)];

/// Order type tokens. "fixed" is an alias for a limit order.
pub const ORDER_TYPE_TABLE: &[(&str, OrderType)] = &[
    ("market", OrderType::Market),
    ("limit", OrderType::Limit),
    ("fixed", OrderType::Limit),
];

/// Time-in-force tokens.
pub const TIME_IN_FORCE_TABLE: &[(&str, TimeInForce)] = &[
    ("day", TimeInForce::Day),
    ("fok", TimeInForce::Fok),
    ("ioc", TimeInForce::Ioc),
    ("rod", TimeInForce::Rod),
];

/// Which order parameter a token was given for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderField {
    /// Trade action.
    Action,
    /// Order type.
    OrderType,
    /// Time in force (called "price type" by callers).
    TimeInForce,
    /// Account type.
    AccountType,
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Action => "action",
            Self::OrderType => "order type",
            Self::TimeInForce => "price type",
            Self::AccountType => "account type",
        };
        f.write_str(s)
    }
}

/// Translation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// Token is not in the field's table.
    #[error("unsupported {field}: {value}")]
    Unsupported {
        /// Field the token was given for.
        field: OrderField,
        /// The token as the caller wrote it.
        value: String,
    },
}

/// The three translated order parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslatedOrder {
    /// Buy or sell.
    pub action: Action,
    /// Market or limit.
    pub order_type: OrderType,
    /// Time in force.
    pub time_in_force: TimeInForce,
}

fn lookup<T: Copy>(
    table: &[(&str, T)],
    field: OrderField,
    token: &str,
) -> Result<T, TranslateError> {
    table
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(token))
        .map(|(_, value)| *value)
        .ok_or_else(|| TranslateError::Unsupported {
            field,
            value: token.to_string(),
        })
}

/// Translate an action token.
pub fn action(token: &str) -> Result<Action, TranslateError> {
    lookup(ACTION_TABLE, OrderField::Action, token)
}

/// Translate an order type token.
pub fn order_type(token: &str) -> Result<OrderType, TranslateError> {
    lookup(ORDER_TYPE_TABLE, OrderField::OrderType, token)
}

/// Translate a time-in-force token.
pub fn time_in_force(token: &str) -> Result<TimeInForce, TranslateError> {
    lookup(TIME_IN_FORCE_TABLE, OrderField::TimeInForce, token)
}

/// Translate all three tokens, reporting the first one that misses.
pub fn translate(
    action_token: &str,
    order_type_token: &str,
    time_in_force_token: &str,
) -> Result<TranslatedOrder, TranslateError> {
    Ok(TranslatedOrder {
        action: action(action_token)?,
        order_type: order_type(order_type_token)?,
        time_in_force: time_in_force(time_in_force_token)?,
    })
}
