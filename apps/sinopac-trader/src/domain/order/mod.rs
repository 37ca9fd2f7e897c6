//! Order value objects.
//!
//! Immutable types for building, translating and acknowledging orders.

mod action;
mod order_type;
mod request;
mod status;
mod time_in_force;
mod trade;
pub mod translator;

pub use action::Action;
pub use order_type::OrderType;
pub use request::{OrderRequest, OrderTicket};
pub use status::OrderStatus;
pub use time_in_force::TimeInForce;
pub use trade::Trade;
pub use translator::{OrderField, TranslateError, TranslatedOrder};
