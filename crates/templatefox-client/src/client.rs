//! Authenticated client for the TemplateFox REST API.

use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use templatefox_core::assemble::PdfRequest;
use templatefox_core::fields::FieldDescriptor;

use crate::error::ClientError;

/// Fixed API origin. The service does not expose per-tenant endpoints.
const API_BASE_URL: &str = "https://api.pdftemplateapi.com";

/// Header carrying the static API credential.
const API_KEY_HEADER: &str = "x-api-key";

/// One entry in the template listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct TemplateListing {
    #[serde(default)]
    templates: Vec<TemplateSummary>,
}

/// Successful generation result from `POST /v1/pdf/create`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPdf {
    pub url: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub credits_remaining: i64,
    #[serde(default)]
    pub expires_in: i64,
}

/// HTTP client that sends the `x-api-key` credential on every request.
#[derive(Debug, Clone)]
pub struct TemplateFoxClient {
    http: reqwest::Client,
    base_url: String,
}

impl TemplateFoxClient {
    pub fn new(api_key: &str) -> Result<Self, ClientError> {
        let mut key = HeaderValue::from_str(api_key)?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// GET /v1/templates - List the templates available to this API key.
    ///
    /// A response without a `templates` key yields an empty list.
    pub async fn list_templates(&self) -> Result<Vec<TemplateSummary>, ClientError> {
        let url = format!("{}/v1/templates", self.base_url);
        let resp = check_status(self.http.get(&url).send().await?).await?;

        let listing: TemplateListing = resp.json().await?;
        Ok(listing.templates)
    }

    /// GET /v1/templates/{id}/fields - Raw field descriptors for a template.
    ///
    /// The endpoint returns a JSON array of descriptors; any other body
    /// shape is a [`ClientError::UnexpectedShape`]. Callers that want the
    /// best-effort empty-schema behavior go through
    /// [`crate::schema::resolved_fields`] instead.
    pub async fn template_fields(
        &self,
        template_id: &str,
    ) -> Result<Vec<FieldDescriptor>, ClientError> {
        let url = format!("{}/v1/templates/{}/fields", self.base_url, template_id);
        let resp = check_status(self.http.get(&url).send().await?).await?;

        let body: Value = resp.json().await?;
        if !body.is_array() {
            return Err(ClientError::UnexpectedShape(format!(
                "expected a field list for template {template_id}"
            )));
        }

        serde_json::from_value(body)
            .map_err(|e| ClientError::UnexpectedShape(e.to_string()))
    }

    /// POST /v1/pdf/create - Generate a PDF and return its access URL.
    pub async fn create_pdf(&self, request: &PdfRequest) -> Result<GeneratedPdf, ClientError> {
        let url = format!("{}/v1/pdf/create", self.base_url);
        debug!(template_id = %request.template_id, "requesting PDF generation");

        let resp = check_status(self.http.post(&url).json(request).send().await?).await?;
        resp.json().await.map_err(Into::into)
    }
}

/// Turn a non-2xx response into an API error carrying the body text.
async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if resp.status().is_success() {
        return Ok(resp);
    }

    let status = resp.status().as_u16();
    let message = resp.text().await.unwrap_or_default();
    Err(ClientError::Api { status, message })
}
