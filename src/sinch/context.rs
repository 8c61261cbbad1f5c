//! Per-process Sinch context.
//!
//! Built once at startup and shared read-only by every tool call and
//! resource read.

use std::sync::Arc;

use super::clients::{NumbersClient, SmsClient, SubprojectsClient, VerificationClient};
use super::endpoints::SinchEndpoints;
use super::error::SinchResult;
use super::projects::SinchConfig;
use super::resolver::ResolvedProject;
use super::transport::SinchTransport;

/// Configuration, endpoints and transport shared by all operations.
#[derive(Clone)]
pub struct SinchContext {
    config: Arc<SinchConfig>,
    endpoints: SinchEndpoints,
    transport: Arc<dyn SinchTransport>,
}

impl SinchContext {
    pub fn new(
        config: SinchConfig,
        endpoints: SinchEndpoints,
        transport: Arc<dyn SinchTransport>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            endpoints,
            transport,
        }
    }

    pub fn config(&self) -> &SinchConfig {
        &self.config
    }

    pub fn endpoints(&self) -> &SinchEndpoints {
        &self.endpoints
    }

    pub fn transport(&self) -> Arc<dyn SinchTransport> {
        self.transport.clone()
    }

    /// Resolve the project for one call.
    pub fn resolve(&self, project: Option<&str>) -> SinchResult<ResolvedProject> {
        self.config.resolve(project)
    }

    /// Resolve a project and build a fresh SMS client for it.
    ///
    /// Fails before any request when the project has no service plan ID.
    pub fn sms(&self, project: Option<&str>) -> SinchResult<SmsClient> {
        SmsClient::new(self, &self.resolve(project)?)
    }

    /// Resolve a project and build a fresh Numbers client for it.
    ///
    /// Fails before any request when the project has no project ID.
    pub fn numbers(&self, project: Option<&str>) -> SinchResult<NumbersClient> {
        NumbersClient::new(self, &self.resolve(project)?)
    }

    /// Resolve a project and build a fresh Verification client for it.
    pub fn verification(&self, project: Option<&str>) -> SinchResult<VerificationClient> {
        Ok(VerificationClient::new(self, &self.resolve(project)?))
    }

    /// Resolve a project and build a fresh sub-projects client for it.
    pub fn subprojects(&self, project: Option<&str>) -> SinchResult<SubprojectsClient> {
        Ok(SubprojectsClient::new(self, &self.resolve(project)?))
    }
}

impl std::fmt::Debug for SinchContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SinchContext")
            .field("config", &self.config)
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}
