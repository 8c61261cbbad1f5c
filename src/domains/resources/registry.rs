//! Resource Registry - central registration of resource templates.
//!
//! When adding a new resource family:
//! 1. Create the definition file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register its template here

use rmcp::model::ResourceTemplate;

use super::definitions::{ActiveNumberResource, SmsBatchResource, template};

/// Get all registered resource templates.
///
/// Resource templates use URI templates (RFC 6570) to describe
/// parameterized resources that clients can fill in.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![
        template::<SmsBatchResource>(),
        template::<ActiveNumberResource>(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_resource_templates() {
        let templates = get_all_resource_templates();
        assert_eq!(templates.len(), 2);

        let uri_templates: Vec<_> = templates
            .iter()
            .map(|t| t.raw.uri_template.as_str())
            .collect();
        assert!(uri_templates.contains(&"sinch://sms/batch/{batchId}"));
        assert!(uri_templates.contains(&"sinch://numbers/active/{phoneNumber}"));
        assert!(
            templates
                .iter()
                .all(|t| t.raw.mime_type.as_deref() == Some("application/json"))
        );
    }
}
