//! SMS batch resources (`sinch://sms/batch/{batchId}`).

use async_trait::async_trait;
use rmcp::model::Resource;
use serde_json::Value;

use super::{ResourceDefinition, descriptor, items};
use crate::domains::resources::uri::ResourceUri;
use crate::sinch::clients::BatchListFilter;
use crate::sinch::{SinchContext, SinchResult};

pub struct SmsBatchResource;

impl SmsBatchResource {
    /// Descriptor for one entry of a list-batches response.
    fn describe(batch: &Value) -> Option<Resource> {
        let id = batch.get("id")?.as_str()?;
        let recipients = batch
            .get("to")
            .and_then(Value::as_array)
            .map_or(0, Vec::len);
        Some(descriptor(
            &ResourceUri::sms_batch(id),
            format!("SMS Batch {}", id),
            format!("SMS batch to {} recipient(s)", recipients),
        ))
    }
}

#[async_trait]
impl ResourceDefinition for SmsBatchResource {
    const URI_TEMPLATE: &'static str = "sinch://sms/batch/{batchId}";
    const NAME: &'static str = "SMS Batch";
    const DESCRIPTION: &'static str = "An SMS batch sent from the default project";

    async fn list(ctx: &SinchContext) -> SinchResult<Vec<Resource>> {
        let body = ctx
            .sms(None)?
            .list_batches(&BatchListFilter::default())
            .await?;
        Ok(items(&body, "batches")
            .iter()
            .filter_map(Self::describe)
            .collect())
    }

    async fn fetch(ctx: &SinchContext, id: &str) -> SinchResult<Value> {
        ctx.sms(None)?.get_batch(id).await
    }
}
