//! Tool Router - builds the rmcp ToolRouter from the tool kinds.
//!
//! This module builds the ToolRouter for STDIO/TCP transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::registry::ToolKind;
use crate::sinch::SinchContext;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(ctx: Arc<SinchContext>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolKind::ALL
        .iter()
        .fold(ToolRouter::new(), |router, kind| {
            router.with_route(kind.route(ctx.clone()))
        })
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::sinch::testing::{RecordingTransport, context_with};
    use serde_json::json;

    struct TestServer {}

    fn test_context() -> Arc<SinchContext> {
        context_with(&[], RecordingTransport::returning(json!({})))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_context());
        let tools = router.list_all();
        assert_eq!(tools.len(), 19);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"sinch_list_projects"));
        assert!(names.contains(&"sinch_send_sms"));
        assert!(names.contains(&"sinch_search_numbers"));
        assert!(names.contains(&"sinch_start_verification"));
        assert!(names.contains(&"sinch_list_all_subprojects"));
        assert!(names.contains(&"sinch_test_parent_access"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let ctx = test_context();
        let registry = ToolRegistry::new(ctx.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(ctx);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
