use thiserror::Error;

use templatefox_core::error::AssemblyError;

use crate::batch::BatchRecord;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("invalid API key: {0}")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),

    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error(transparent)]
    Assembly(#[from] AssemblyError),
}

/// A batch run that stopped early.
///
/// Carries the records produced before the failing item, so callers can
/// still surface the work that completed.
#[derive(Debug, Error)]
#[error("item {item} failed: {source}")]
pub struct BatchAbort {
    /// Index of the input item whose failure ended the run.
    pub item: usize,
    /// Records accumulated before the failure.
    pub completed: Vec<BatchRecord>,
    #[source]
    pub source: ClientError,
}
