//! Open positions.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::order::Action;

/// Position direction, expressed as the action that opened it.
pub type Direction = Action;

/// Aggregated position in one contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionSummary {
    /// Contract code.
    pub code: String,
    /// Long (`Buy`) or short (`Sell`).
    pub direction: Direction,
    /// Quantity held.
    pub quantity: u32,
    /// Average cost price.
    pub price: Decimal,
    /// Last traded price.
    pub last_price: Decimal,
    /// Unrealized profit and loss.
    pub pnl: Decimal,
}

/// One lot of a position, as it was filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionDetail {
    /// Trade date of the lot.
    pub date: NaiveDate,
    /// Contract code.
    pub code: String,
    /// Order sequence number that opened the lot.
    pub seqno: String,
    /// Long (`Buy`) or short (`Sell`).
    pub direction: Direction,
    /// Quantity in the lot.
    pub quantity: u32,
    /// Fill price.
    pub price: Decimal,
    /// Last traded price.
    pub last_price: Decimal,
    /// Unrealized profit and loss.
    pub pnl: Decimal,
    /// Commission charged.
    #[serde(default)]
    pub fee: Decimal,
}

/// Holdings as returned by an inventory query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", content = "rows", rename_all = "lowercase")]
pub enum Inventory {
    /// One row per contract.
    Summary(Vec<PositionSummary>),
    /// One row per lot.
    Detail(Vec<PositionDetail>),
}

impl Inventory {
    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Summary(rows) => rows.len(),
            Self::Detail(rows) => rows.len(),
        }
    }

    /// True when there are no open positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Summary(rows) => {
                writeln!(
                    f,
                    "{:<8} {:<5} {:>8} {:>10} {:>10} {:>12}",
                    "code", "dir", "qty", "price", "last", "pnl"
                )?;
                for row in rows {
                    writeln!(
                        f,
                        "{:<8} {:<5} {:>8} {:>10} {:>10} {:>12}",
                        row.code, row.direction, row.quantity, row.price, row.last_price, row.pnl
                    )?;
                }
            }
            Self::Detail(rows) => {
                writeln!(
                    f,
                    "{:<10} {:<8} {:<8} {:<5} {:>6} {:>10} {:>10} {:>12}",
                    "date", "code", "seqno", "dir", "qty", "price", "last", "pnl"
                )?;
                for row in rows {
                    writeln!(
                        f,
                        "{:<10} {:<8} {:<8} {:<5} {:>6} {:>10} {:>10} {:>12}",
                        row.date,
                        row.code,
                        row.seqno,
                        row.direction,
                        row.quantity,
                        row.price,
                        row.last_price,
                        row.pnl
                    )?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn summary(code: &str) -> PositionSummary {
        PositionSummary {
            code: code.to_string(),
            direction: Action::Buy,
            quantity: 2,
            price: dec!(500.0),
            last_price: dec!(510.0),
            pnl: dec!(20000),
        }
    }

    #[test]
    fn inventory_len_and_empty() {
        assert!(Inventory::Summary(vec![]).is_empty());
        assert!(Inventory::Detail(vec![]).is_empty());
        let inv = Inventory::Summary(vec![summary("2330"), summary("2454")]);
        assert_eq!(inv.len(), 2);
        assert!(!inv.is_empty());
    }

    #[test]
    fn inventory_display_lists_rows() {
        let text = Inventory::Summary(vec![summary("2330")]).to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("code"));
        assert!(lines[1].starts_with("2330"));
        assert!(lines[1].contains("Buy"));
    }
}
