//! # HTTP Client
//!
//! Shared reqwest wrapper for provider adapters.
//!
//! Adds a request timeout, JSON decoding and a mapping from transport
//! failures and HTTP status codes onto [`ProviderError`]. No retries are
//! performed: each provider gets exactly one attempt per search.
//!
//! # Examples
//!
//! ```ignore
//! use price_compare::infrastructure::providers::http_client::HttpClient;
//!
//! let client = HttpClient::new(5000)?;
//! let body: serde_json::Value = client.get("https://api.example.com/search/phone").await?;
//! ```

use crate::infrastructure::providers::error::{ProviderError, ProviderResult};
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client wrapper for provider adapters.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Inner reqwest client.
    client: Client,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a new HTTP client with the specified timeout.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InternalError` if the client cannot be created.
    pub fn new(timeout_ms: u64) -> ProviderResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                ProviderError::internal_error(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, timeout_ms })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Makes a GET request and deserializes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Timeout` or `ProviderError::Connection` if the
    /// request fails, a status-specific error on non-2xx responses, and
    /// `ProviderError::ProtocolError` if the body cannot be parsed.
    pub async fn get<T: DeserializeOwned>(&self, url: Url) -> ProviderResult<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    /// Makes a GET request with query parameters and deserializes the JSON response.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::get`].
    pub async fn get_with_params<T: DeserializeOwned, P: serde::Serialize + ?Sized>(
        &self,
        url: Url,
        params: &P,
    ) -> ProviderResult<T> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    /// Handles the HTTP response, checking status and deserializing JSON.
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> ProviderResult<T> {
        let status = response.status();

        if status.is_success() {
            response.json::<T>().await.map_err(|e| {
                ProviderError::protocol_error(format!("Failed to parse response: {}", e))
            })
        } else {
            let error_body = response.text().await.unwrap_or_default();
            Err(self.map_status_error(status, &error_body))
        }
    }

    /// Maps a reqwest error to a ProviderError.
    fn map_reqwest_error(&self, error: reqwest::Error) -> ProviderError {
        if error.is_timeout() {
            ProviderError::timeout(format!("Request timed out after {}ms", self.timeout_ms))
        } else if error.is_connect() {
            ProviderError::connection(format!("Connection failed: {}", error))
        } else {
            ProviderError::connection(format!("HTTP request failed: {}", error))
        }
    }

    /// Maps an HTTP status code to a ProviderError.
    fn map_status_error(&self, status: StatusCode, body: &str) -> ProviderError {
        match status {
            StatusCode::BAD_REQUEST => {
                ProviderError::invalid_request(format!("Bad request: {}", body))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                ProviderError::authentication(format!("Authentication failed: {}", body))
            }
            StatusCode::NOT_FOUND => {
                ProviderError::protocol_error(format!("Resource not found: {}", body))
            }
            StatusCode::TOO_MANY_REQUESTS => ProviderError::rate_limited("Rate limit exceeded"),
            StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT => {
                ProviderError::connection(format!("Server error ({}): {}", status, body))
            }
            _ => ProviderError::protocol_error(format!("HTTP error ({}): {}", status, body)),
        }
    }
}

/// Builds an endpoint URL by appending path segments to `base`.
///
/// Each segment is percent-encoded, so a free-text search term can be used
/// as a single segment. The one exception is a segment made only of dots
/// (`.`, `..`): URL normalization treats those as path navigation even
/// when encoded, so they are rejected instead of silently dropped.
///
/// # Errors
///
/// Returns `ProviderError::Configuration` if `base` is not an absolute
/// hierarchical URL, and `ProviderError::InvalidRequest` for a `.` or `..`
/// segment.
pub fn endpoint(base: &str, segments: &[&str]) -> ProviderResult<Url> {
    if let Some(segment) = segments.iter().find(|s| matches!(**s, "." | "..")) {
        return Err(ProviderError::invalid_request(format!(
            "path segment {:?} cannot be sent verbatim",
            segment
        )));
    }

    let mut url = Url::parse(base)
        .map_err(|e| ProviderError::configuration(format!("invalid base URL {}: {}", base, e)))?;

    url.path_segments_mut()
        .map_err(|()| ProviderError::configuration(format!("base URL {} cannot have a path", base)))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn new_client() {
        let client = HttpClient::new(5000);
        assert!(client.is_ok());
        assert_eq!(client.unwrap().timeout_ms(), 5000);
    }

    #[test]
    fn endpoint_appends_encoded_segments() {
        let url = endpoint("https://example.com/", &["search", "iphone 15/pro"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/search/iphone%2015%2Fpro");

        let url = endpoint("http://127.0.0.1:8080/api", &["request"]).unwrap();
        assert_eq!(url.path(), "/api/request");
    }

    #[test]
    fn endpoint_rejects_dot_segments() {
        for segment in [".", ".."] {
            assert!(matches!(
                endpoint("https://x.test/", &["search", segment]),
                Err(ProviderError::InvalidRequest { .. })
            ));
        }

        let url = endpoint("https://x.test/", &["search", "..."]).unwrap();
        assert_eq!(url.path(), "/search/...");
    }

    #[test]
    fn endpoint_rejects_bad_base() {
        assert!(matches!(
            endpoint("not a url", &["x"]),
            Err(ProviderError::Configuration { .. })
        ));
        assert!(endpoint("mailto:someone@example.com", &["x"]).is_err());
    }

    #[test]
    fn status_mapping() {
        let client = HttpClient::new(1000).unwrap();
        assert!(matches!(
            client.map_status_error(StatusCode::UNAUTHORIZED, ""),
            ProviderError::Authentication { .. }
        ));
        assert!(matches!(
            client.map_status_error(StatusCode::TOO_MANY_REQUESTS, ""),
            ProviderError::RateLimited { .. }
        ));
        assert!(matches!(
            client.map_status_error(StatusCode::BAD_GATEWAY, "upstream down"),
            ProviderError::Connection { .. }
        ));
        assert!(matches!(
            client.map_status_error(StatusCode::IM_A_TEAPOT, ""),
            ProviderError::ProtocolError { .. }
        ));
    }
}
