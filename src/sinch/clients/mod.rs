//! Per-family Sinch API clients.
//!
//! Each client is built fresh for one call from a [`ResolvedProject`] and
//! carries the family base URL, the project bearer token and the shared
//! transport. Clients are never cached between calls.
//!
//! [`ResolvedProject`]: super::resolver::ResolvedProject

mod numbers;
mod sms;
mod subprojects;
mod verification;

pub use numbers::{Capability, NumberSearch, NumberType, NumbersClient};
pub use sms::{BatchListFilter, DeliveryReportMode, SendBatch, SmsClient};
pub use subprojects::{NewSubproject, SubprojectsClient};
pub use verification::{StartVerification, VerificationClient, VerificationMethod};

use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

use super::error::SinchResult;
use super::transport::{ApiRequest, SinchTransport};

/// Base URL, credentials and transport common to every family client.
#[derive(Clone)]
struct ApiClient {
    transport: Arc<dyn SinchTransport>,
    base_url: String,
    token: String,
}

impl ApiClient {
    fn new(transport: Arc<dyn SinchTransport>, base_url: String, token: &str) -> Self {
        Self {
            transport,
            base_url,
            token: token.to_string(),
        }
    }

    fn request(&self, method: Method, path: impl Into<String>) -> ApiRequest {
        ApiRequest::new(method, self.base_url.clone(), path, self.token.clone())
    }

    async fn send(&self, request: ApiRequest) -> SinchResult<Value> {
        self.transport.send(request).await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Percent-encode one path segment (phone numbers contain `+`).
fn segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_encoding() {
        assert_eq!(segment("+15551234567"), "%2B15551234567");
        assert_eq!(segment("01ABCDEF"), "01ABCDEF");
        assert_eq!(segment("a/b"), "a%2Fb");
    }
}
