//! Order input from the caller and the translated request sent to the vendor.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::translator::TranslatedOrder;
use super::{Action, OrderType, TimeInForce};

/// Order parameters as a caller writes them.
///
/// The action, order type, price type and account type are free-form
/// tokens; the session translates them before anything reaches the broker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTicket {
    /// Contract code (e.g. "2330").
    pub contract_id: String,
    /// Order price.
    pub price: Decimal,
    /// Quantity in lots.
    pub quantity: u32,
    /// "buy" or "sell".
    pub action: String,
    /// "market", "limit" or "fixed".
    pub order_type: String,
    /// Time in force: "day", "fok", "ioc" or "rod".
    pub price_type: String,
    /// "stock" or "future".
    pub account_type: String,
    /// Free-form tag echoed back by the broker.
    pub custom_id: Option<String>,
}

impl OrderTicket {
    /// Build a stock-account ticket.
    #[must_use]
    pub fn new(
        contract_id: impl Into<String>,
        price: Decimal,
        quantity: u32,
        action: impl Into<String>,
        order_type: impl Into<String>,
        price_type: impl Into<String>,
    ) -> Self {
        Self {
            contract_id: contract_id.into(),
            price,
            quantity,
            action: action.into(),
            order_type: order_type.into(),
            price_type: price_type.into(),
            account_type: "stock".to_string(),
            custom_id: None,
        }
    }

    /// Set the account type token.
    #[must_use]
    pub fn with_account_type(mut self, account_type: impl Into<String>) -> Self {
        self.account_type = account_type.into();
        self
    }

    /// Set the custom ID.
    #[must_use]
    pub fn with_custom_id(mut self, custom_id: impl Into<String>) -> Self {
        self.custom_id = Some(custom_id.into());
        self
    }
}

/// Order request with vendor constants, ready for submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Order price.
    pub price: Decimal,
    /// Quantity in lots.
    pub quantity: u32,
    /// Buy or sell.
    pub action: Action,
    /// Market or limit.
    pub order_type: OrderType,
    /// Time in force.
    pub time_in_force: TimeInForce,
    /// Free-form tag echoed back by the broker.
    #[serde(default)]
    pub custom_id: Option<String>,
}

impl OrderRequest {
    /// Combine a ticket's price and quantity with its translated tokens.
    #[must_use]
    pub fn from_ticket(ticket: &OrderTicket, translated: TranslatedOrder) -> Self {
        Self {
            price: ticket.price,
            quantity: ticket.quantity,
            action: translated.action,
            order_type: translated.order_type,
            time_in_force: translated.time_in_force,
            custom_id: ticket.custom_id.clone(),
        }
    }
}
