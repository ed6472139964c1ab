//! Sequential batch execution with per-item failure isolation.
//!
//! Items are processed strictly in input order; the next item does not
//! start until the current item's network round-trip completes. Every
//! record carries the index of the item it came from, so outputs stay
//! correlated to inputs even when some items fail.

use std::future::Future;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use templatefox_core::assemble::{DataInputMode, GenerateOptions, PdfRequest};

use crate::client::{GeneratedPdf, TemplateFoxClient};
use crate::error::{BatchAbort, ClientError};

/// The operation to perform for an item. Only PDF generation exists today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    #[default]
    GeneratePdf,
}

/// One unit of work in a batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchItem {
    #[serde(default)]
    pub operation: Operation,
    pub template_id: String,
    pub input: DataInputMode,
    #[serde(default)]
    pub options: GenerateOptions,
}

/// Outcome of one batch item, correlated to its input position.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BatchRecord {
    Success(SuccessRecord),
    Error(ErrorRecord),
}

impl BatchRecord {
    /// Index of the originating input item.
    pub fn item(&self) -> usize {
        match self {
            Self::Success(record) => record.item,
            Self::Error(record) => record.item,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Generation result for one item, mirroring the service response.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessRecord {
    pub item: usize,
    pub url: String,
    pub filename: String,
    pub credits_remaining: i64,
    pub expires_in: i64,
}

/// Failure kept in place of a result when the run continues past it.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorRecord {
    pub item: usize,
    pub error: String,
}

/// Transport seam used by the runner; implemented by [`TemplateFoxClient`]
/// and stubbed in tests.
pub trait PdfGenerator {
    /// Issue one generation request.
    fn create_pdf(
        &self,
        request: &PdfRequest,
    ) -> impl Future<Output = Result<GeneratedPdf, ClientError>> + Send;
}

impl PdfGenerator for TemplateFoxClient {
    async fn create_pdf(&self, request: &PdfRequest) -> Result<GeneratedPdf, ClientError> {
        TemplateFoxClient::create_pdf(self, request).await
    }
}

/// Run a batch of generation requests strictly in input order.
///
/// With `continue_on_fail` set, a failing item becomes an [`ErrorRecord`]
/// and the run proceeds to the next item. Without it, the first failure
/// ends the run with a [`BatchAbort`] carrying the records accumulated so
/// far.
pub async fn run<G: PdfGenerator>(
    generator: &G,
    items: &[BatchItem],
    continue_on_fail: bool,
) -> Result<Vec<BatchRecord>, BatchAbort> {
    info!(items = items.len(), continue_on_fail, "starting batch run");

    let mut records: Vec<BatchRecord> = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        match execute_item(generator, item).await {
            Ok(output) => {
                records.push(BatchRecord::Success(SuccessRecord {
                    item: index,
                    url: output.url,
                    filename: output.filename,
                    credits_remaining: output.credits_remaining,
                    expires_in: output.expires_in,
                }));
            }
            Err(err) => {
                if !continue_on_fail {
                    return Err(BatchAbort {
                        item: index,
                        completed: records,
                        source: err,
                    });
                }
                warn!(item = index, error = %err, "item failed, continuing");
                records.push(BatchRecord::Error(ErrorRecord {
                    item: index,
                    error: err.to_string(),
                }));
            }
        }
    }

    info!(
        succeeded = records.iter().filter(|r| r.is_success()).count(),
        failed = records.iter().filter(|r| !r.is_success()).count(),
        "batch run complete"
    );

    Ok(records)
}

async fn execute_item<G: PdfGenerator>(
    generator: &G,
    item: &BatchItem,
) -> Result<GeneratedPdf, ClientError> {
    match item.operation {
        Operation::GeneratePdf => {
            let request = item.input.assemble(&item.template_id, &item.options)?;
            generator.create_pdf(&request).await
        }
    }
}
