//! Best-effort template schema lookup.
//!
//! A schema fetch that fails, or that returns something other than a field
//! list, yields an empty schema: assembly must still work from whatever raw
//! keys the caller supplies.

use tracing::warn;

use templatefox_core::fields::{self, ResolvedField};

use crate::client::TemplateFoxClient;

/// Fetch and resolve the field schema for a template.
///
/// Never fails: transport errors and unexpected response shapes degrade to
/// an empty field list. An empty template ID short-circuits without a fetch.
pub async fn resolved_fields(
    client: &TemplateFoxClient,
    template_id: &str,
) -> Vec<ResolvedField> {
    if template_id.is_empty() {
        return Vec::new();
    }

    match client.template_fields(template_id).await {
        Ok(descriptors) => descriptors.into_iter().map(fields::resolve).collect(),
        Err(err) => {
            warn!(template_id, error = %err, "field schema unavailable, continuing without it");
            Vec::new()
        }
    }
}
