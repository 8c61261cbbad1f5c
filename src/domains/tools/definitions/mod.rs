//! Tool definitions module.
//!
//! One file per Sinch API family. Each tool is a unit struct implementing
//! [`SinchTool`] with its own typed parameter record.

pub mod common;
pub mod meta;
pub mod numbers;
pub mod projects;
pub mod sms;
pub mod verification;

pub use common::{NoParams, SinchTool};
pub use meta::ListProjectsTool;
pub use numbers::{
    ActivateNumberTool, GetActiveNumberTool, ListActiveNumbersTool, ReleaseNumberTool,
    SearchNumbersTool,
};
pub use projects::{
    CreateSubprojectTool, DeleteSubprojectTool, GetSubprojectTool, ListAllSubprojectsTool,
    ListSubprojectsTool, TestParentAccessTool,
};
pub use sms::{GetBatchTool, GetDeliveryReportTool, ListBatchesTool, SendSmsTool};
pub use verification::{GetVerificationStatusTool, ReportVerificationTool, StartVerificationTool};
