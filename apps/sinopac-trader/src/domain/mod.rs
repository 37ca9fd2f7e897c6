//! Domain Layer
//!
//! Vendor-neutral types the session works with. Nothing in here performs I/O.
//!
//! - [`account`]: Stock/future account references and the `signed` capability
//! - [`credentials`]: The two login schemes accepted by the brokerage
//! - [`contract`]: Tradable instrument descriptors
//! - [`market_data`]: Ticks and k-bars
//! - [`order`]: Order value objects, trade results and the token translator
//! - [`position`]: Position summaries and detailed holdings

pub mod account;
pub mod contract;
pub mod credentials;
pub mod market_data;
pub mod order;
pub mod position;

pub use account::{Account, AccountInfo, AccountKind};
pub use contract::{Contract, SecurityType};
pub use credentials::{CredentialError, Credentials};
pub use market_data::{KBar, Tick, TicksQuery};
pub use order::{
    Action, OrderField, OrderRequest, OrderStatus, OrderTicket, OrderType, TimeInForce, Trade,
    TranslateError, TranslatedOrder,
};
pub use position::{Direction, Inventory, PositionDetail, PositionSummary};
