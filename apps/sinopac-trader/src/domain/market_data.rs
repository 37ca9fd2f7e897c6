//! Historical market data: ticks and k-bars.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One trade print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tick {
    /// Exchange-local timestamp.
    pub ts: NaiveDateTime,
    /// Trade price.
    pub close: Decimal,
    /// Trade volume (lots).
    pub volume: u64,
    /// Best bid price at the time of the trade.
    pub bid_price: Decimal,
    /// Best bid volume.
    pub bid_volume: u64,
    /// Best ask price at the time of the trade.
    pub ask_price: Decimal,
    /// Best ask volume.
    pub ask_volume: u64,
    /// Aggressor side: 1 = buy, 2 = sell, 0 = unknown.
    pub tick_type: i32,
}

/// One aggregated OHLCV bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KBar {
    /// Bar timestamp (exchange-local).
    pub ts: NaiveDateTime,
    /// Opening price.
    pub open: Decimal,
    /// Highest price.
    pub high: Decimal,
    /// Lowest price.
    pub low: Decimal,
    /// Closing price.
    pub close: Decimal,
    /// Traded volume.
    pub volume: u64,
    /// Traded amount.
    pub amount: Decimal,
}

/// Which ticks to fetch for a trading date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicksQuery {
    /// Trading date.
    pub date: NaiveDate,
    /// Only the most recent `n` ticks, or all ticks when `None`.
    pub last_count: Option<u32>,
}

impl TicksQuery {
    /// All ticks for a date.
    #[must_use]
    pub const fn all(date: NaiveDate) -> Self {
        Self {
            date,
            last_count: None,
        }
    }

    /// The most recent `count` ticks for a date.
    #[must_use]
    pub const fn last(date: NaiveDate, count: u32) -> Self {
        Self {
            date,
            last_count: Some(count),
        }
    }
}
