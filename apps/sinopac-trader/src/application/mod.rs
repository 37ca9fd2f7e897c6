//! Application Layer
//!
//! - **Ports**: The brokerage SDK boundary
//! - **Session**: Login lifecycle, guards and order placement

pub mod ports;
pub mod session;

pub use ports::*;
pub use session::{RECENT_TICK_COUNT, SessionState, TraderSession};
