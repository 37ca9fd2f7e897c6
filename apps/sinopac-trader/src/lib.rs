// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::default_trait_access
    )
)]

//! Sinopac Trader - Brokerage Session Library
//!
//! Typed session over the Sinopac Shioaji brokerage API: login with either
//! credential scheme, guarded market-data and position queries, and order
//! placement from human-readable tokens.
//!
//! # Architecture (Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Accounts, credentials, contracts, market data, orders,
//!   positions and the order-token translator. No I/O.
//!
//! - **Application**: The `TraderSession` and the SDK boundary
//!   - `ports`: `BrokerConnector` creates SDK clients, `BrokerPort` is one
//!     client session
//!   - `session`: Login state machine and per-call guards
//!
//! - **Infrastructure**: Adapters
//!   - `broker::shioaji`: JSON/HTTP client for a local Shioaji bridge
//!
//! Cross-cutting: `config` (YAML + credential file), `observability`
//! (console and file logging), `error` (the session error taxonomy).

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Hexagonal Layers
// =============================================================================

/// Domain layer - Value types with no external dependencies.
pub mod domain;

/// Application layer - Session and port definitions.
pub mod application;

/// Infrastructure layer - SDK adapters.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// Configuration loading.
pub mod config;

/// Logging setup.
pub mod observability;

/// Session error taxonomy.
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use application::ports::{BrokerConnector, BrokerError, BrokerPort, TradingMode};
pub use application::session::{SessionState, TraderSession};
pub use domain::{Account, AccountKind, Credentials, Inventory, OrderTicket, Trade};
pub use error::{ErrorKind, SessionError};
pub use infrastructure::broker::shioaji::{GatewayConfig, ShioajiGatewayConnector};
