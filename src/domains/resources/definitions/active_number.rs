//! Active number resources (`sinch://numbers/active/{phoneNumber}`).

use async_trait::async_trait;
use rmcp::model::Resource;
use serde_json::Value;

use super::{ResourceDefinition, descriptor, items};
use crate::domains::resources::uri::ResourceUri;
use crate::sinch::{SinchContext, SinchResult};

pub struct ActiveNumberResource;

impl ActiveNumberResource {
    /// Descriptor for one entry of a list-active-numbers response.
    fn describe(number: &Value) -> Option<Resource> {
        let phone_number = number.get("phoneNumber")?.as_str()?;
        let capabilities: Vec<&str> = number
            .get("capability")
            .and_then(Value::as_array)
            .map(|caps| caps.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();
        Some(descriptor(
            &ResourceUri::active_number(phone_number),
            format!("Phone Number {}", phone_number),
            format!("Active number (capabilities: {})", capabilities.join(", ")),
        ))
    }
}

#[async_trait]
impl ResourceDefinition for ActiveNumberResource {
    const URI_TEMPLATE: &'static str = "sinch://numbers/active/{phoneNumber}";
    const NAME: &'static str = "Active Phone Number";
    const DESCRIPTION: &'static str =
        "A phone number active on the default project (percent-encode the leading +)";

    async fn list(ctx: &SinchContext) -> SinchResult<Vec<Resource>> {
        let body = ctx.numbers(None)?.list_active().await?;
        Ok(items(&body, "activeNumbers")
            .iter()
            .filter_map(Self::describe)
            .collect())
    }

    async fn fetch(ctx: &SinchContext, id: &str) -> SinchResult<Value> {
        ctx.numbers(None)?.get_active(id).await
    }
}
