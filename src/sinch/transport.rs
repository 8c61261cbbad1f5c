//! HTTP transport for Sinch REST calls.
//!
//! Every remote operation is described by an [`ApiRequest`] and executed by a
//! [`SinchTransport`]. The production implementation is [`ReqwestTransport`];
//! tests substitute a recording double.

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::error::{SinchError, SinchResult};

/// User agent for API requests.
const USER_AGENT: &str = concat!("sinch-mcp-server/", env!("CARGO_PKG_VERSION"));

/// One outbound request against a Sinch API family.
#[derive(Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Scheme and host, without trailing slash.
    pub base_url: String,
    /// Absolute path, already percent-encoded.
    pub path: String,
    /// Query pairs in order; keys may repeat.
    pub query: Vec<(String, String)>,
    /// Bearer token sent in the Authorization header.
    pub bearer_token: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(
        method: Method,
        base_url: impl Into<String>,
        path: impl Into<String>,
        bearer_token: impl Into<String>,
    ) -> Self {
        Self {
            method,
            base_url: base_url.into(),
            path: path.into(),
            query: Vec::new(),
            bearer_token: bearer_token.into(),
            body: None,
        }
    }

    /// Append a query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Attach a JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Full request URL including the encoded query string.
    pub fn url(&self) -> String {
        let mut url = format!("{}{}", self.base_url, self.path);
        if !self.query.is_empty() {
            // Serializing a list of string pairs cannot fail.
            let query = serde_urlencoded::to_string(&self.query).unwrap_or_default();
            url.push('?');
            url.push_str(&query);
        }
        url
    }
}

/// Custom Debug implementation to redact the bearer token from logs.
impl std::fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("url", &self.url())
            .field("bearer_token", &"[REDACTED]")
            .field("body", &self.body)
            .finish()
    }
}

/// Executes API requests and returns the decoded JSON response body.
#[async_trait]
pub trait SinchTransport: Send + Sync {
    /// Send one request. Non-2xx responses are errors.
    async fn send(&self, request: ApiRequest) -> SinchResult<Value>;
}

/// Transport backed by an async `reqwest` client.
///
/// No retries or timeouts are added on top of reqwest's defaults.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with a default reqwest client.
    pub fn new() -> SinchResult<Self> {
        let http_client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http_client })
    }

    /// Wrap an existing reqwest client.
    pub fn with_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl SinchTransport for ReqwestTransport {
    #[instrument(skip_all, fields(method = %request.method, path = %request.path))]
    async fn send(&self, request: ApiRequest) -> SinchResult<Value> {
        let url = request.url();
        debug!("Sending Sinch request to {}", url);

        let mut builder = self
            .http_client
            .request(request.method, &url)
            .bearer_auth(&request.bearer_token)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!("Sinch API returned HTTP {}", status.as_u16());
            return Err(SinchError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        decode_body(&text)
    }
}

/// Decode a response body; an empty body is JSON `null`.
fn decode_body(text: &str) -> SinchResult<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| SinchError::Decode(e.to_string()))
}
