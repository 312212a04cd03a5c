//! Tracker API client.
//!
//! Low-level HTTP client that handles authentication and raw requests.
//! Higher-level operations are implemented via traits on resource types.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Response};
use url::Url;

use crate::error::{Result, TrackerError};

const DEFAULT_API_URL: &str = "https://www.pivotaltracker.com/services/v5";
const USER_AGENT: &str = concat!("trackerapi/", env!("CARGO_PKG_VERSION"));

/// Header the service expects the API token in.
const TOKEN_HEADER: &str = "X-TrackerToken";

/// Low-level Tracker API client.
///
/// Handles authentication and HTTP requests. Resource-specific operations
/// are implemented via the [`FetchAll`](crate::FetchAll) trait on model types.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use trackerapi::TrackerClient;
///
/// # fn example() -> trackerapi::Result<()> {
/// // Create from environment variables
/// let client = TrackerClient::from_env()?;
///
/// // Or configure manually
/// let client = TrackerClient::new(
///     "your-api-token",
///     "https://www.pivotaltracker.com/services/v5",
/// )?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TrackerClient {
    http: Client,
    base_url: Arc<Url>,
    token: String,
}

impl std::fmt::Debug for TrackerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackerClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl TrackerClient {
    /// Create a client from environment variables.
    ///
    /// Uses `TRACKER_TOKEN` for authentication and optionally
    /// `TRACKER_API_URL` for the base URL (defaults to
    /// `https://www.pivotaltracker.com/services/v5`).
    ///
    /// # Errors
    ///
    /// Returns an error if `TRACKER_TOKEN` is not set. No request is issued
    /// in that case.
    pub fn from_env() -> Result<Self> {
        let token = env::var("TRACKER_TOKEN").map_err(|_| {
            TrackerError::ConfigMissing("TRACKER_TOKEN environment variable not set".to_string())
        })?;

        let base_url = env::var("TRACKER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::new(&token, &base_url)
    }

    /// Create a new client with the provided token and base URL.
    ///
    /// # Arguments
    ///
    /// * `token` - Tracker API token
    /// * `base_url` - Base URL for the Tracker API
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty or the base URL is invalid.
    pub fn new(token: &str, base_url: &str) -> Result<Self> {
        if token.is_empty() {
            return Err(TrackerError::ConfigMissing(
                "no API token had been set".to_string(),
            ));
        }

        // Ensure base URL ends with /
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(TrackerError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            token: token.to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Make a GET request.
    ///
    /// `path` is relative to the base URL and may carry a query string.
    /// Exactly one request is issued; there is no retry.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .get(url)
            .header(TOKEN_HEADER, &self.token)
            .send()
            .await
            .map_err(TrackerError::HttpError)?;

        Self::check_response(response).await
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = Self::extract_error_message(response, status).await;
        Err(TrackerError::ApiError {
            message,
            status_code: Some(status.as_u16()),
        })
    }

    /// Extract error message from a failed response.
    ///
    /// Tracker error bodies carry `error` and sometimes `general_problem`.
    async fn extract_error_message(response: Response, status: reqwest::StatusCode) -> String {
        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => return format!("HTTP {status}"),
        };

        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            if let Some(msg) = json.get("error").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
            if let Some(msg) = json.get("general_problem").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
        }

        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_debug() {
        let client = TrackerClient::new("test-token", DEFAULT_API_URL).unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("TrackerClient"));
        assert!(debug.contains("base_url"));
        // Token should not be in debug output
        assert!(!debug.contains("test-token"));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client1 = TrackerClient::new("token", "https://www.pivotaltracker.com/services/v5")
            .unwrap();
        let client2 = TrackerClient::new("token", "https://www.pivotaltracker.com/services/v5/")
            .unwrap();
        assert_eq!(client1.base_url().as_str(), client2.base_url().as_str());
    }

    #[test]
    fn test_empty_token_rejected() {
        let err = TrackerClient::new("", DEFAULT_API_URL).unwrap_err();
        assert!(matches!(err, TrackerError::ConfigMissing(_)));
    }
}
