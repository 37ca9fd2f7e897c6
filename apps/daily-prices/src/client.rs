//! FinMind HTTP client.

use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::api_types::{DailyPrice, Envelope, TAIWAN_STOCK_PRICE};
use crate::config::FinMindConfig;
use crate::error::FinMindError;

const DATA_PATH: &str = "/api/v4/data";

/// Client for the FinMind data API.
///
/// Works anonymously until [`login_by_token`](Self::login_by_token) is
/// called; anonymous use gets the provider's lower request quota.
#[derive(Debug)]
pub struct FinMindClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl FinMindClient {
    /// Create a client. Does not contact the API.
    pub fn new(config: FinMindConfig) -> Result<Self, FinMindError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FinMindError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url,
            token: None,
        })
    }

    /// Use `token` for every following request. No network call is made.
    pub fn login_by_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
        tracing::debug!("FinMind token set");
    }

    /// True once a token has been set.
    pub const fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// Daily prices of `stock_id` from `start_date` to `end_date`, inclusive,
    /// sorted by date.
    pub async fn taiwan_stock_daily(
        &self,
        stock_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<DailyPrice>, FinMindError> {
        if start_date > end_date {
            return Err(FinMindError::InvalidRange {
                start: start_date,
                end: end_date,
            });
        }

        let start = start_date.to_string();
        let end = end_date.to_string();
        let mut rows: Vec<DailyPrice> = self
            .data(&[
                ("dataset", TAIWAN_STOCK_PRICE),
                ("data_id", stock_id),
                ("start_date", start.as_str()),
                ("end_date", end.as_str()),
            ])
            .await?;

        rows.sort_by_key(|row| row.date);

        tracing::info!(
            stock_id,
            start = %start_date,
            end = %end_date,
            rows = rows.len(),
            "Fetched daily prices"
        );

        Ok(rows)
    }

    async fn data<T: DeserializeOwned>(
        &self,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, FinMindError> {
        let url = format!("{}{DATA_PATH}", self.base_url);

        let mut request = self.client.get(&url).query(query);
        match &self.token {
            Some(token) => request = request.bearer_auth(token),
            None => tracing::warn!("No FinMind token; using the anonymous request quota"),
        }

        tracing::debug!(?query, "FinMind request");

        let response = request
            .send()
            .await
            .map_err(|e| FinMindError::Network(e.to_string()))?;

        let http_status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FinMindError::Network(e.to_string()))?;

        let envelope: Envelope<T> = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(_) if !http_status.is_success() => {
                return Err(FinMindError::Api {
                    status: http_status.as_u16(),
                    message: body,
                });
            }
            Err(e) => return Err(FinMindError::JsonParse(e.to_string())),
        };

        if envelope.status != 200 {
            tracing::warn!(status = envelope.status, msg = %envelope.msg, "FinMind returned an error");
            return Err(FinMindError::Api {
                status: envelope.status,
                message: envelope.msg,
            });
        }

        Ok(envelope.data)
    }
}
