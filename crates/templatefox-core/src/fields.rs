//! Template field schema types and resolution.
//!
//! The fields endpoint describes each template variable's name, declared
//! type, and (for arrays) the per-item object shape. Resolution projects a
//! descriptor into the internal value kind used for input handling, plus a
//! human-readable description of what the field expects.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── API schema types ─────────────────────────────────────────────────────────

/// Declared type of a template field, as reported by the fields endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum FieldType {
    String,
    Text,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
    /// Unrecognized declared types; handled like `string`.
    Other,
}

impl From<String> for FieldType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "string" => Self::String,
            "text" => Self::Text,
            "integer" => Self::Integer,
            "number" => Self::Number,
            "boolean" => Self::Boolean,
            "array" => Self::Array,
            "object" => Self::Object,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Other => "unknown",
        };
        f.write_str(name)
    }
}

/// One property of the object held inside an array field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubFieldDescriptor {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default)]
    pub field_type: String,
}

/// A value the API sends either as a single element or as a sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// View the contents as a slice regardless of how the API sent them.
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::One(item) => std::slice::from_ref(item),
            Self::Many(items) => items,
        }
    }
}

/// Schema entry describing one template variable, as returned by
/// `GET /v1/templates/{id}/fields`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub key: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(rename = "helpText", default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    /// Per-item object shape for `array` fields. The API sends either a
    /// single descriptor or a list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<OneOrMany<SubFieldDescriptor>>,
}

// ── Resolution ───────────────────────────────────────────────────────────────

/// Internal value kind a descriptor resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Number,
    Boolean,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

/// A field descriptor projected into its internal kind, with a rendered
/// description of the expected input.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedField {
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub description: String,
}

/// Project an API field descriptor into its internal kind and description.
///
/// `integer` and `number` resolve to [`FieldKind::Number`] and `boolean` to
/// [`FieldKind::Boolean`]; everything else, including `array` and `object`,
/// resolves to [`FieldKind::String`]. Structured fields are authored as
/// literal JSON text and parsed at assembly time, not edited
/// property-by-property.
///
/// The description is the field's `helpText` verbatim when present. Without
/// it, array fields with a known item shape enumerate their property names,
/// and all other fields state their declared type.
pub fn resolve(descriptor: FieldDescriptor) -> ResolvedField {
    let FieldDescriptor {
        key,
        label,
        field_type,
        required,
        help_text,
        spec,
    } = descriptor;

    let kind = match field_type {
        FieldType::Integer | FieldType::Number => FieldKind::Number,
        FieldType::Boolean => FieldKind::Boolean,
        _ => FieldKind::String,
    };

    let mut description = format!("Type: {field_type}");
    if field_type == FieldType::Array {
        if let Some(spec) = &spec {
            let names: Vec<&str> = spec.as_slice().iter().map(|s| s.name.as_str()).collect();
            if !names.is_empty() {
                description = format!(
                    "Array with properties: {}. Enter as JSON array.",
                    names.join(", ")
                );
            }
        }
    }
    if let Some(help) = help_text.filter(|h| !h.is_empty()) {
        description = help;
    }

    let label = if label.is_empty() { key.clone() } else { label };

    ResolvedField {
        key,
        label,
        kind,
        required,
        description,
    }
}
