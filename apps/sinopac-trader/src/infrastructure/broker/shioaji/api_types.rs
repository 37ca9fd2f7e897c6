//! Gateway request and response types.
//!
//! These mirror the JSON the bridge exchanges, which follows the SDK's own
//! field names. Contracts and positions already deserialize straight into
//! domain types; everything else is converted here.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::ports::TradingMode;
use crate::domain::{
    Account, AccountInfo, Action, Contract, Credentials, KBar, OrderRequest, OrderStatus,
    OrderType, Tick, TicksQuery, TimeInForce, Trade,
};

use super::error::GatewayError;

// ============================================================================
// Login
// ============================================================================

/// Login request body.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    /// Use the vendor's simulation environment.
    pub simulation: bool,
    /// Scheme-specific fields, flattened into the body.
    #[serde(flatten)]
    pub credentials: LoginCredentials<'a>,
}

/// Scheme-specific login fields, named as the SDK names them.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum LoginCredentials<'a> {
    /// API key login.
    ApiKey {
        /// API key.
        api_key: &'a str,
        /// Secret key.
        secret_key: &'a str,
    },
    /// Person ID + certificate login.
    Certificate {
        /// Person ID.
        person_id: &'a str,
        /// Login password.
        passwd: &'a str,
        /// Certificate path.
        ca_path: &'a str,
        /// Certificate password.
        ca_passwd: &'a str,
    },
}

impl<'a> LoginRequest<'a> {
    /// Build the login body for a mode and credential scheme.
    #[must_use]
    pub fn new(credentials: &'a Credentials, mode: TradingMode) -> Self {
        let credentials = match credentials {
            Credentials::ApiKey {
                api_key,
                secret_key,
            } => LoginCredentials::ApiKey {
                api_key,
                secret_key,
            },
            Credentials::Certificate {
                person_id,
                password,
                cert_path,
                cert_password,
            } => LoginCredentials::Certificate {
                person_id,
                passwd: password,
                ca_path: cert_path,
                ca_passwd: cert_password,
            },
        };
        Self {
            simulation: mode.is_simulation(),
            credentials,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Session token for later requests.
    pub token: String,
    /// Accounts the credentials can use.
    #[serde(default)]
    pub accounts: Vec<GatewayAccount>,
}

/// Account as the SDK reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayAccount {
    /// "S" (stock), "F" (future), or another tag this crate ignores.
    pub account_type: String,
    /// Account number.
    pub account_id: String,
    /// Branch code.
    pub broker_id: String,
    /// Owner's person ID.
    #[serde(default)]
    pub person_id: String,
    /// Owner's name.
    #[serde(default)]
    pub username: String,
    /// Whether the account has been signed for trading.
    #[serde(default)]
    pub signed: bool,
}

impl GatewayAccount {
    /// Convert to a domain account. `None` for account types other than
    /// stock and future.
    #[must_use]
    pub fn into_account(self) -> Option<Account> {
        let tag = self.account_type;
        let info = AccountInfo {
            account_id: self.account_id,
            broker_id: self.broker_id,
            person_id: self.person_id,
            username: self.username,
            signed: self.signed,
        };
        match tag.as_str() {
            "S" => Some(Account::Stock(info)),
            "F" => Some(Account::Future(info)),
            _ => None,
        }
    }
}

/// Account reference sent with orders.
#[derive(Debug, Clone, Serialize)]
pub struct GatewayAccountRef<'a> {
    /// "S" or "F".
    pub account_type: &'static str,
    /// Account number.
    pub account_id: &'a str,
    /// Branch code.
    pub broker_id: &'a str,
}

impl<'a> From<&'a Account> for GatewayAccountRef<'a> {
    fn from(account: &'a Account) -> Self {
        let account_type = match account {
            Account::Stock(_) => "S",
            Account::Future(_) => "F",
        };
        Self {
            account_type,
            account_id: &account.info().account_id,
            broker_id: &account.info().broker_id,
        }
    }
}

// ============================================================================
// Market data
// ============================================================================

/// Ticks request body.
#[derive(Debug, Serialize)]
pub struct TicksRequest<'a> {
    /// Contract to query.
    pub contract: &'a Contract,
    /// Trading date.
    pub date: NaiveDate,
    /// "AllDay" or "LastCount".
    pub query_type: &'static str,
    /// Number of ticks for "LastCount".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_cnt: Option<u32>,
}

impl<'a> TicksRequest<'a> {
    /// Build from a domain query.
    #[must_use]
    pub const fn new(contract: &'a Contract, query: TicksQuery) -> Self {
        let query_type = match query.last_count {
            Some(_) => "LastCount",
            None => "AllDay",
        };
        Self {
            contract,
            date: query.date,
            query_type,
            last_cnt: query.last_count,
        }
    }
}

/// K-bars request body.
#[derive(Debug, Serialize)]
pub struct KbarsRequest<'a> {
    /// Contract to query.
    pub contract: &'a Contract,
    /// First date, inclusive.
    pub start: NaiveDate,
    /// Last date, inclusive.
    pub end: NaiveDate,
}

/// Ticks, one array per field. Timestamps are nanoseconds encoding the
/// exchange-local wall clock.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColumnarTicks {
    /// Timestamps (ns).
    pub ts: Vec<i64>,
    /// Trade prices.
    pub close: Vec<Decimal>,
    /// Trade volumes.
    pub volume: Vec<u64>,
    /// Best bid prices.
    pub bid_price: Vec<Decimal>,
    /// Best bid volumes.
    pub bid_volume: Vec<u64>,
    /// Best ask prices.
    pub ask_price: Vec<Decimal>,
    /// Best ask volumes.
    pub ask_volume: Vec<u64>,
    /// Tick types.
    pub tick_type: Vec<i32>,
}

impl ColumnarTicks {
    /// Zip the columns into rows.
    pub fn into_rows(self) -> Result<Vec<Tick>, GatewayError> {
        let len = self.ts.len();
        check_columns(
            "ticks",
            len,
            &[
                ("close", self.close.len()),
                ("volume", self.volume.len()),
                ("bid_price", self.bid_price.len()),
                ("bid_volume", self.bid_volume.len()),
                ("ask_price", self.ask_price.len()),
                ("ask_volume", self.ask_volume.len()),
                ("tick_type", self.tick_type.len()),
            ],
        )?;

        Ok((0..len)
            .map(|i| Tick {
                ts: ns_to_local(self.ts[i]),
                close: self.close[i],
                volume: self.volume[i],
                bid_price: self.bid_price[i],
                bid_volume: self.bid_volume[i],
                ask_price: self.ask_price[i],
                ask_volume: self.ask_volume[i],
                tick_type: self.tick_type[i],
            })
            .collect())
    }
}

/// K-bars, one array per field, with the SDK's capitalized names.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColumnarKbars {
    /// Bar timestamps (ns).
    pub ts: Vec<i64>,
    /// Opens.
    #[serde(rename = "Open")]
    pub open: Vec<Decimal>,
    /// Highs.
    #[serde(rename = "High")]
    pub high: Vec<Decimal>,
    /// Lows.
    #[serde(rename = "Low")]
    pub low: Vec<Decimal>,
    /// Closes.
    #[serde(rename = "Close")]
    pub close: Vec<Decimal>,
    /// Volumes.
    #[serde(rename = "Volume")]
    pub volume: Vec<u64>,
    /// Traded amounts.
    #[serde(rename = "Amount")]
    pub amount: Vec<Decimal>,
}

impl ColumnarKbars {
    /// Zip the columns into rows.
    pub fn into_rows(self) -> Result<Vec<KBar>, GatewayError> {
        let len = self.ts.len();
        check_columns(
            "kbars",
            len,
            &[
                ("Open", self.open.len()),
                ("High", self.high.len()),
                ("Low", self.low.len()),
                ("Close", self.close.len()),
                ("Volume", self.volume.len()),
                ("Amount", self.amount.len()),
            ],
        )?;

        Ok((0..len)
            .map(|i| KBar {
                ts: ns_to_local(self.ts[i]),
                open: self.open[i],
                high: self.high[i],
                low: self.low[i],
                close: self.close[i],
                volume: self.volume[i],
                amount: self.amount[i],
            })
            .collect())
    }
}

fn check_columns(
    dataset: &str,
    expected: usize,
    columns: &[(&str, usize)],
) -> Result<(), GatewayError> {
    match columns.iter().find(|(_, len)| *len != expected) {
        Some((name, len)) => Err(GatewayError::MalformedData(format!(
            "{dataset}: column '{name}' has {len} values, expected {expected}"
        ))),
        None => Ok(()),
    }
}

/// The SDK stores local wall-clock time as if it were UTC.
fn ns_to_local(ns: i64) -> NaiveDateTime {
    DateTime::from_timestamp_nanos(ns).naive_utc()
}

// ============================================================================
// Orders
// ============================================================================

/// Order request body.
#[derive(Debug, Serialize)]
pub struct PlaceOrderRequest<'a> {
    /// Resolved contract.
    pub contract: &'a Contract,
    /// Order fields.
    pub order: GatewayOrder<'a>,
    /// Account to trade in.
    pub account: GatewayAccountRef<'a>,
}

/// Order fields in SDK naming: `order_type` carries the price kind
/// (MKT/LMT) and `price_type` carries the time-in-force (ROD/IOC/FOK/DAY).
#[derive(Debug, Serialize)]
pub struct GatewayOrder<'a> {
    /// Limit price.
    pub price: Decimal,
    /// Lots.
    pub quantity: u32,
    /// "Buy" or "Sell".
    pub action: &'static str,
    /// Time-in-force code.
    pub price_type: &'static str,
    /// Order type code.
    pub order_type: &'static str,
    /// Caller's tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field: Option<&'a str>,
}

impl<'a> PlaceOrderRequest<'a> {
    /// Build the order body.
    #[must_use]
    pub fn new(contract: &'a Contract, order: &'a OrderRequest, account: &'a Account) -> Self {
        Self {
            contract,
            order: GatewayOrder {
                price: order.price,
                quantity: order.quantity,
                action: order.action.vendor_code(),
                price_type: order.time_in_force.vendor_code(),
                order_type: order.order_type.vendor_code(),
                custom_field: order.custom_id.as_deref(),
            },
            account: GatewayAccountRef::from(account),
        }
    }
}

/// Trade acknowledgement.
#[derive(Debug, Clone, Deserialize)]
pub struct TradeResponse {
    /// Contract the order was placed on.
    pub contract: Contract,
    /// Order as recorded by the SDK.
    pub order: OrderEcho,
    /// Current status.
    pub status: StatusEcho,
}

/// Order part of a trade acknowledgement.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderEcho {
    /// SDK order id.
    pub id: String,
    /// Sequence number.
    pub seqno: String,
    /// Exchange order number (empty until the exchange assigns one).
    #[serde(default)]
    pub ordno: String,
    /// Action.
    pub action: Action,
    /// Price.
    pub price: Decimal,
    /// Lots.
    pub quantity: u32,
    /// Order type (MKT/LMT).
    pub order_type: OrderType,
    /// Time-in-force (ROD/IOC/FOK/DAY).
    pub price_type: TimeInForce,
    /// Caller's tag.
    #[serde(default)]
    pub custom_field: Option<String>,
}

/// Status part of a trade acknowledgement.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusEcho {
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Vendor status code.
    #[serde(default)]
    pub status_code: String,
    /// Vendor message.
    #[serde(default)]
    pub msg: String,
}

impl TradeResponse {
    /// Convert to a domain trade.
    #[must_use]
    pub fn into_trade(self) -> Trade {
        Trade {
            contract_code: self.contract.code,
            order: OrderRequest {
                price: self.order.price,
                quantity: self.order.quantity,
                action: self.order.action,
                order_type: self.order.order_type,
                time_in_force: self.order.price_type,
                custom_id: self.order.custom_field.filter(|s| !s.is_empty()),
            },
            order_id: self.order.id,
            seqno: self.order.seqno,
            ordno: self.order.ordno,
            status: self.status.status,
            status_code: self.status.status_code,
            msg: self.status.msg,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Error body returned by the bridge.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    #[serde(default)]
    pub code: Option<String>,
    /// Error message.
    #[serde(alias = "detail")]
    pub message: String,
}
