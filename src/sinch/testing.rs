//! Test helpers shared by the Sinch, tools and resources test suites.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::context::SinchContext;
use super::endpoints::SinchEndpoints;
use super::error::{SinchError, SinchResult};
use super::projects::SinchConfig;
use super::transport::{ApiRequest, SinchTransport};

type Responder = Box<dyn Fn(&ApiRequest) -> SinchResult<Value> + Send + Sync>;

/// Build a configuration from literal environment pairs.
pub(crate) fn config_from(vars: &[(&str, &str)]) -> SinchConfig {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    SinchConfig::from_lookup(|key| vars.get(key).cloned())
}

/// Transport double that records every request and answers from a closure.
pub(crate) struct RecordingTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responder: Responder,
}

impl RecordingTransport {
    /// Answer every request with the same body.
    pub(crate) fn returning(body: Value) -> Arc<Self> {
        Self::with(move |_| Ok(body.clone()))
    }

    /// Answer every request through `responder`.
    pub(crate) fn with<F>(responder: F) -> Arc<Self>
    where
        F: Fn(&ApiRequest) -> SinchResult<Value> + Send + Sync + 'static,
    {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responder: Box::new(responder),
        })
    }

    /// Fail every request with an HTTP error.
    pub(crate) fn failing(status: u16) -> Arc<Self> {
        Self::with(move |_| {
            Err(SinchError::Api {
                status,
                body: "boom".to_string(),
            })
        })
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl SinchTransport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> SinchResult<Value> {
        let result = (self.responder)(&request);
        self.requests.lock().unwrap().push(request);
        result
    }
}

/// A context over the given configuration with public Sinch endpoints.
pub(crate) fn context_with(
    vars: &[(&str, &str)],
    transport: Arc<RecordingTransport>,
) -> Arc<SinchContext> {
    Arc::new(SinchContext::new(
        config_from(vars),
        SinchEndpoints::default(),
        transport,
    ))
}
