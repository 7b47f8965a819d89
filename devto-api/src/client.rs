//! HTTP client for the DEV REST API.
//!
//! Every request in the crate passes through [`ApiClient::build_request`] and
//! [`ApiClient::send`]: the first turns a method, a path and an optional body
//! into an [`ApiRequest`], the second attaches the API key, performs the call
//! and either decodes the success body or turns the error body into a
//! [`DevError::Remote`].
//!
//! The client holds no mutable state. Cloning it is cheap and clones share the
//! underlying connection pool, so one instance can serve concurrent callers.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use devto_core::config::ApiConfig;
use devto_core::constants;
use devto_core::error::{DevError, DevResult};

use crate::response;

/// A fully resolved request, ready to be sent.
///
/// Built per call by [`ApiClient::build_request`] and consumed by
/// [`ApiClient::send`] / [`ApiClient::send_empty`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    /// Base URL and path, concatenated verbatim.
    pub url: String,
    /// JSON-encoded body, if any.
    pub body: Option<String>,
}

/// HTTP client for the DEV API.
///
/// Wraps `reqwest::Client` with the base URL and the API key sent in the
/// `api-key` header of every request.
#[derive(Clone)]
pub struct ApiClient {
    inner: Client,
    /// API root, e.g. "https://dev.to/api". Never ends with a slash.
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl ApiClient {
    /// Create a client for `https://dev.to/api` with the default timeout.
    ///
    /// Fails with [`DevError::InvalidCredential`] if `api_key` is empty.
    pub fn new(api_key: &str) -> DevResult<Self> {
        Self::from_config(&ApiConfig {
            api_key: api_key.to_string(),
            ..ApiConfig::default()
        })
    }

    /// Create a client from configuration, honouring its base URL and timeout.
    pub fn from_config(config: &ApiConfig) -> DevResult<Self> {
        if config.api_key.is_empty() {
            return Err(DevError::InvalidCredential);
        }

        let inner = Client::builder()
            .timeout(Duration::from_millis(config.api_timeout_ms))
            .user_agent(format!("{}/{}", constants::APP_NAME, constants::APP_VERSION))
            .build()
            .map_err(|e| DevError::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            inner,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Get the API root URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request for `path`, serializing `body` to JSON if given.
    ///
    /// `path` is appended to the base URL as-is; path segments and query
    /// strings must already be encoded.
    pub fn build_request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> DevResult<ApiRequest>
    where
        B: Serialize + ?Sized,
    {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| DevError::Serialization(format!("failed to encode request body: {e}")))?;

        Ok(ApiRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            body,
        })
    }

    /// Send a request and decode the 2xx response body into `T`.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> DevResult<T> {
        let response = self.execute(request).await?;
        let body = response.bytes().await.map_err(Self::classify_error)?;
        serde_json::from_slice(&body)
            .map_err(|e| DevError::Decode(format!("failed to parse response: {e}")))
    }

    /// Send a request whose response body is not needed (e.g. deletes).
    pub async fn send_empty(&self, request: ApiRequest) -> DevResult<()> {
        self.execute(request).await?;
        Ok(())
    }

    /// Perform the round trip. Non-2xx responses become errors here and only here.
    async fn execute(&self, request: ApiRequest) -> DevResult<Response> {
        let ApiRequest { method, url, body } = request;
        debug!("{} {}", method, url);

        let mut builder = self
            .inner
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json")
            .header(constants::API_KEY_HEADER, &self.api_key);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(Self::classify_error)?;
        let status = response.status();
        debug!("{} {} -> {}", method, url, status.as_u16());

        if !status.is_success() {
            let body = response.bytes().await.map_err(Self::classify_error)?;
            let err = response::extract_error(&body);
            warn!("{} {} failed: {}", method, url, err);
            return Err(err);
        }

        Ok(response)
    }

    /// Classify a reqwest error into a DevError variant.
    fn classify_error(e: reqwest::Error) -> DevError {
        if e.is_timeout() {
            DevError::Timeout(e.to_string())
        } else if e.is_connect() {
            DevError::Http(format!("connection failed: {e}"))
        } else {
            DevError::Http(e.to_string())
        }
    }

    // --- Convenience wrappers used by the endpoint modules ---

    /// GET `path` and decode the body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> DevResult<T> {
        let request = self.build_request::<()>(Method::GET, path, None)?;
        self.send(request).await
    }

    /// POST `body` to `path` and decode the response.
    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> DevResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.build_request(Method::POST, path, Some(body))?;
        self.send(request).await
    }

    /// PUT `body` to `path` and decode the response.
    pub async fn put_json<T, B>(&self, path: &str, body: &B) -> DevResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.build_request(Method::PUT, path, Some(body))?;
        self.send(request).await
    }

    /// DELETE `path`, discarding the response body.
    pub async fn delete(&self, path: &str) -> DevResult<()> {
        let request = self.build_request::<()>(Method::DELETE, path, None)?;
        self.send_empty(request).await
    }
}
