//! Trade (order acknowledgement) returned after submission.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{OrderRequest, OrderStatus};

/// The vendor's record of a submitted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Contract code the order was placed on.
    pub contract_code: String,
    /// Order as the vendor accepted it.
    pub order: OrderRequest,
    /// Vendor order ID.
    pub order_id: String,
    /// Broker sequence number.
    pub seqno: String,
    /// Exchange order number (empty until the exchange acknowledges).
    #[serde(default)]
    pub ordno: String,
    /// Current status.
    pub status: OrderStatus,
    /// Vendor status code ("00" on success).
    #[serde(default)]
    pub status_code: String,
    /// Vendor status message.
    #[serde(default)]
    pub msg: String,
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} x{} @ {} [{}] status={} seqno={}",
            self.contract_code,
            self.order.action,
            self.order.order_type,
            self.order.quantity,
            self.order.price,
            self.order.time_in_force,
            self.status,
            self.seqno
        )
    }
}
