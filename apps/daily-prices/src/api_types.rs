//! FinMind response types.
//!
//! Every `/api/v4/data` response is an envelope `{"msg", "status", "data"}`
//! whose `data` rows depend on the dataset. Field names follow the API,
//! which mixes `Trading_Volume` style with lowercase.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Dataset name for daily stock prices.
pub const TAIWAN_STOCK_PRICE: &str = "TaiwanStockPrice";

/// Response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// Status message ("success" on success).
    #[serde(default)]
    pub msg: String,
    /// API status (200 on success).
    pub status: u16,
    /// Dataset rows.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// One trading day of a stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPrice {
    /// Trading date.
    pub date: NaiveDate,
    /// Stock code.
    pub stock_id: String,
    /// Shares traded.
    #[serde(rename = "Trading_Volume")]
    pub trading_volume: u64,
    /// Value traded (TWD).
    #[serde(rename = "Trading_money")]
    pub trading_money: u64,
    /// Opening price.
    pub open: Decimal,
    /// Highest price.
    pub max: Decimal,
    /// Lowest price.
    pub min: Decimal,
    /// Closing price.
    pub close: Decimal,
    /// Change from the previous close.
    pub spread: Decimal,
    /// Number of transactions.
    #[serde(rename = "Trading_turnover")]
    pub trading_turnover: Decimal,
}

impl DailyPrice {
    /// Header line matching the [`Display`](fmt::Display) column widths.
    #[must_use]
    pub fn header() -> String {
        format!(
            "{:<10} {:<6} {:>8} {:>8} {:>8} {:>8} {:>8} {:>13} {:>15}",
            "date", "stock", "open", "max", "min", "close", "spread", "volume", "money"
        )
    }
}

impl fmt::Display for DailyPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<10} {:<6} {:>8} {:>8} {:>8} {:>8} {:>8} {:>13} {:>15}",
            self.date,
            self.stock_id,
            self.open,
            self.max,
            self.min,
            self.close,
            self.spread,
            self.trading_volume,
            self.trading_money
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const BODY: &str = r#"{
        "msg": "success",
        "status": 200,
        "data": [{
            "date": "2025-01-02",
            "stock_id": "2454",
            "Trading_Volume": 5327071,
            "Trading_money": 7112390365,
            "open": 1340.0,
            "max": 1355.0,
            "min": 1315.0,
            "close": 1335.0,
            "spread": -5.0,
            "Trading_turnover": 21342.0
        }]
    }"#;

    #[test]
    fn envelope_parses_rows() {
        let envelope: Envelope<DailyPrice> = serde_json::from_str(BODY).unwrap();

        assert_eq!(envelope.status, 200);
        assert_eq!(envelope.data.len(), 1);
        let row = &envelope.data[0];
        assert_eq!(row.date, NaiveDate::from_ymd_opt(2025, 1, 2).unwrap());
        assert_eq!(row.trading_volume, 5_327_071);
        assert_eq!(row.close, dec!(1335));
        assert_eq!(row.spread, dec!(-5));
    }

    #[test]
    fn error_envelope_has_no_data() {
        let envelope: Envelope<DailyPrice> =
            serde_json::from_str(r#"{"msg": "Requests reach the upper limit.", "status": 402}"#)
                .unwrap();

        assert_eq!(envelope.status, 402);
        assert!(envelope.data.is_empty());
    }

    #[test]
    fn display_aligns_with_header() {
        let envelope: Envelope<DailyPrice> = serde_json::from_str(BODY).unwrap();
        let line = envelope.data[0].to_string();

        assert!(line.starts_with("2025-01-02 2454"));
        assert_eq!(line.len(), DailyPrice::header().len());
    }
}
