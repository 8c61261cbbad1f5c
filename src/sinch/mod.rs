//! Sinch integration layer.
//!
//! - [`projects`]: credentials loaded from the environment
//! - [`resolver`]: picks the project for a single call
//! - [`endpoints`]: base URLs per API family
//! - [`transport`]: the HTTP seam ([`SinchTransport`]) and its `reqwest` implementation
//! - [`clients`]: typed per-family clients built fresh per call
//! - [`aggregate`]: fan-out over every parent project
//! - [`context`]: the shared, read-only [`SinchContext`]

pub mod aggregate;
pub mod clients;
pub mod context;
pub mod endpoints;
pub mod error;
pub mod projects;
pub mod resolver;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use context::SinchContext;
pub use endpoints::SinchEndpoints;
pub use error::{SinchError, SinchResult};
pub use projects::{ProjectConfig, Region, SinchConfig};
pub use resolver::ResolvedProject;
pub use transport::{ApiRequest, ReqwestTransport, SinchTransport};
