//! Main GreyNoise API client implementation.

use crate::api::*;
use greynoise_core::{GreyNoiseError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// The GreyNoise API base URL
const DEFAULT_BASE_URL: &str = "https://api.greynoise.io";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Header the API reads the key from
const API_KEY_HEADER: &str = "key";

/// Main GreyNoise API client
#[derive(Clone)]
pub struct GreyNoiseClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    base_url: String,
}

impl GreyNoiseClient {
    /// Create a new client with the given API key using default settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        GreyNoiseClientBuilder::new(api_key).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> GreyNoiseClientBuilder {
        GreyNoiseClientBuilder::new(api_key)
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Access noise classification endpoints
    #[must_use]
    pub fn noise(&self) -> NoiseApi<'_> {
        NoiseApi::new(self)
    }

    /// Access research endpoints (actors)
    #[must_use]
    pub fn research(&self) -> ResearchApi<'_> {
        ResearchApi::new(self)
    }

    /// Access GNQL query endpoints
    #[must_use]
    pub fn gnql(&self) -> GnqlApi<'_> {
        GnqlApi::new(self)
    }

    /// Perform a GET request
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_with_query(path, &[]).await
    }

    /// Perform a GET request with query parameters
    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.build_url(path, params);
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(&url)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// Perform a POST request with JSON body
    pub(crate) async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(path, &[]);
        debug!(url = %url, "POST request");

        let response = self
            .inner
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// Build a URL with encoded query parameters
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!("{}{}", self.inner.base_url, path);

        let mut separator = '?';
        for (key, value) in params {
            url.push(separator);
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
            separator = '&';
        }

        url
    }

    /// Decode a JSON body, or turn a non-success status into a request failure
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if status.is_success() {
            return serde_json::from_str(&body).map_err(GreyNoiseError::Json);
        }

        let body = serde_json::from_str::<serde_json::Value>(&body)
            .unwrap_or(serde_json::Value::String(body));
        warn!(status = status.as_u16(), "GreyNoise API request failed");

        Err(GreyNoiseError::RequestFailure {
            status: status.as_u16(),
            body,
        })
    }
}

fn transport_error(err: reqwest::Error) -> GreyNoiseError {
    if err.is_timeout() {
        GreyNoiseError::Http(format!("request timed out: {err}"))
    } else {
        GreyNoiseError::Http(err.to_string())
    }
}

/// Builder for configuring a [`GreyNoiseClient`]
pub struct GreyNoiseClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl GreyNoiseClientBuilder {
    /// Create a new builder with the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("greynoise-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<GreyNoiseClient> {
        let api_key = self.api_key.trim();
        if api_key.is_empty() {
            return Err(GreyNoiseError::Config("API key is required".to_string()));
        }

        let base_url = url::Url::parse(&self.base_url)
            .map_err(|e| GreyNoiseError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(GreyNoiseError::InvalidUrl(self.base_url));
        }

        let mut key = HeaderValue::from_str(api_key)
            .map_err(|_| GreyNoiseError::Config("API key contains invalid characters".to_string()))?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .default_headers(headers)
            .gzip(true)
            .build()
            .map_err(|e| GreyNoiseError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(GreyNoiseClient {
            inner: Arc::new(ClientInner {
                http,
                base_url: self.base_url.trim_end_matches('/').to_string(),
            }),
        })
    }
}

// URL encoding helper
mod urlencoding {
    pub fn encode(s: &str) -> String {
        url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_is_rejected() {
        let err = GreyNoiseClient::new("  ").err().unwrap();
        assert!(matches!(err, GreyNoiseError::Config(_)));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = GreyNoiseClient::builder("key")
            .base_url("not a url")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, GreyNoiseError::InvalidUrl(_)));
    }

    #[test]
    fn test_build_url_encodes_params() {
        let client = GreyNoiseClient::builder("key")
            .base_url("http://localhost:8080/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(
            client.build_url("/v2/experimental/gnql", &[("query", "classification:malicious tags:Mirai")]),
            "http://localhost:8080/v2/experimental/gnql?query=classification%3Amalicious+tags%3AMirai"
        );
        assert_eq!(
            client.build_url("/v2/research/actors", &[]),
            "http://localhost:8080/v2/research/actors"
        );
    }
}
