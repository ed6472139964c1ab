use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("invalid JSON data: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("JSON data must be an object, got {found}")]
    JsonNotObject { found: &'static str },

    #[error("field '{key}' already holds a non-array value and cannot take array items")]
    ArrayFieldCollision { key: String },

    #[error("template ID must not be empty")]
    MissingTemplateId,
}
