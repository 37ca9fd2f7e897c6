//! HTTP client wrapper for the gateway.

use parking_lot::RwLock;
use reqwest::{Client, Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::api_types::ErrorResponse;
use super::config::GatewayConfig;
use super::error::GatewayError;

const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// HTTP client for the gateway. Holds the session token once logged in.
#[derive(Debug)]
pub struct GatewayHttpClient {
    client: Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl GatewayHttpClient {
    /// Create a new HTTP client from config.
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            token: RwLock::new(None),
        })
    }

    /// Replace (or clear) the bearer token.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.write() = token;
    }

    /// True when a token is held.
    #[cfg(test)]
    pub fn has_token(&self) -> bool {
        self.token.read().is_some()
    }

    /// GET request. Each path segment is percent-encoded.
    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, GatewayError> {
        self.request(Method::GET, segments, None::<&()>).await
    }

    /// POST request with a JSON body.
    #[allow(clippy::future_not_send)]
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T, GatewayError> {
        self.request(Method::POST, segments, Some(body)).await
    }

    /// Base URL with `segments` appended as escaped path segments.
    fn url(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| GatewayError::Http(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| {
                GatewayError::Http(format!("base URL cannot take a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    #[allow(clippy::future_not_send)]
    async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<T, GatewayError> {
        let url = self.url(segments)?;
        let path = url.path().to_string();
        let path = path.as_str();
        let request_id = uuid::Uuid::new_v4().to_string();

        let mut request = self
            .client
            .request(method.clone(), url)
            .header(REQUEST_ID_HEADER, &request_id);
        // Clone out of the lock so the guard is not held across the await.
        let token = self.token.read().clone();
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(b) = body {
            request = request.json(b);
        }

        tracing::debug!(%method, path, request_id = %request_id, "Gateway request");

        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();

        if status.is_success() {
            let text = response
                .text()
                .await
                .map_err(|e| GatewayError::Network(e.to_string()))?;
            if text.is_empty() {
                return serde_json::from_str("null")
                    .map_err(|e| GatewayError::JsonParse(e.to_string()));
            }
            return serde_json::from_str(&text).map_err(|e| GatewayError::JsonParse(e.to_string()));
        }

        let retry_after = response
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        let error_body = response.text().await.unwrap_or_default();

        let (error_code, error_message) =
            match serde_json::from_str::<ErrorResponse>(&error_body) {
                Ok(err) => (
                    err.code.unwrap_or_else(|| status.as_u16().to_string()),
                    err.message,
                ),
                Err(_) => (status.as_u16().to_string(), error_body),
            };

        tracing::warn!(
            status = status.as_u16(),
            code = %error_code,
            message = %error_message,
            path,
            request_id = %request_id,
            "Gateway returned an error"
        );

        Err(error_for_status(
            status,
            path,
            error_code,
            error_message,
            retry_after,
        ))
    }
}

/// Categorize an error status. Nothing is retried.
fn error_for_status(
    status: StatusCode,
    path: &str,
    code: String,
    message: String,
    retry_after: Option<u64>,
) -> GatewayError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => GatewayError::RateLimited {
            retry_after_secs: retry_after.unwrap_or(60),
        },
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GatewayError::AuthenticationFailed,
        StatusCode::NOT_FOUND => GatewayError::NotFound {
            path: path.to_string(),
        },
        StatusCode::UNPROCESSABLE_ENTITY => GatewayError::OrderRejected(message),
        _ => GatewayError::Api { code, message },
    }
}
