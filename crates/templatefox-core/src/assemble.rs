//! Request payload assembly.
//!
//! Template data arrives either as raw JSON text or as individual field
//! assignments, and must become the nested `data` document the service
//! accepts. The two assignment strategies (a flat column mapping, and
//! manual fields with grouped repeating array items) share the same value
//! coercion and produce the same payload shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::coerce::coerce;
use crate::error::AssemblyError;

// ── Input types ──────────────────────────────────────────────────────────────

/// How the caller supplies template data for one generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DataInputMode {
    /// Raw JSON text that becomes the `data` document verbatim.
    Json { raw: String },
    /// Individual field assignments, under one of the two strategies.
    Fields { assignments: FieldAssignments },
}

/// One field key paired with its raw value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldValue {
    pub key: String,
    pub value: Value,
}

/// Field assignment strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum FieldAssignments {
    /// Column-mapping style: a flat field → value table.
    Mapping {
        #[serde(default)]
        values: Vec<FieldValue>,
    },
    /// Manual style: flat scalar fields plus repeated array item groups.
    Manual {
        #[serde(default)]
        values: Vec<FieldValue>,
        #[serde(default)]
        items: Vec<ArrayItemGroup>,
    },
}

/// One repeating item destined for an array field.
///
/// Multiple groups naming the same `field` accumulate, in declaration
/// order, into a single array. A group with an empty `field` is skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrayItemGroup {
    /// Key of the array field this item belongs to.
    pub field: String,
    /// Property assignments for the item object. Properties with empty
    /// names are ignored.
    #[serde(default)]
    pub properties: Vec<FieldValue>,
}

/// Optional generation parameters passed through to the service.
///
/// `expiration` is the number of seconds the PDF URL stays valid; the
/// service accepts 60–604800 but no client-side range check is applied.
/// `filename` is the PDF name without the `.pdf` extension.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateOptions {
    #[serde(default)]
    pub expiration: Option<u64>,
    #[serde(default)]
    pub filename: Option<String>,
}

// ── Output types ─────────────────────────────────────────────────────────────

/// Request body for `POST /v1/pdf/create`.
#[derive(Debug, Clone, Serialize)]
pub struct PdfRequest {
    pub template_id: String,
    pub data: Map<String, Value>,
    pub export_type: ExportType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// Only URL export is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportType {
    Url,
}

// ── Assembly ─────────────────────────────────────────────────────────────────

impl DataInputMode {
    /// Assemble the request body for one generation call.
    ///
    /// Fails when the template ID is empty, when JSON-mode text is not a
    /// valid JSON object, or when an array item group targets a field that
    /// already holds a non-array value. Field assignments themselves never
    /// fail: unknown keys are kept (the schema is advisory, not a filter)
    /// and unparseable structured literals stay plain strings.
    ///
    /// `expiration` and `filename` are included only when set to a non-zero
    /// / non-empty value.
    pub fn assemble(
        &self,
        template_id: &str,
        options: &GenerateOptions,
    ) -> Result<PdfRequest, AssemblyError> {
        if template_id.is_empty() {
            return Err(AssemblyError::MissingTemplateId);
        }

        let data = match self {
            Self::Json { raw } => parse_json_data(raw)?,
            Self::Fields { assignments } => assignments.build_data()?,
        };

        Ok(PdfRequest {
            template_id: template_id.to_string(),
            data,
            export_type: ExportType::Url,
            expiration: options.expiration.filter(|&secs| secs > 0),
            filename: options.filename.clone().filter(|name| !name.is_empty()),
        })
    }
}

impl FieldAssignments {
    fn build_data(&self) -> Result<Map<String, Value>, AssemblyError> {
        let mut data = Map::new();

        let (values, items): (&[FieldValue], &[ArrayItemGroup]) = match self {
            Self::Mapping { values } => (values.as_slice(), &[]),
            Self::Manual { values, items } => (values.as_slice(), items.as_slice()),
        };

        for assignment in values {
            data.insert(assignment.key.clone(), coerce(assignment.value.clone()));
        }

        for group in items {
            if group.field.is_empty() {
                continue;
            }

            let slot = data
                .entry(group.field.clone())
                .or_insert_with(|| Value::Array(Vec::new()));
            let Value::Array(entries) = slot else {
                return Err(AssemblyError::ArrayFieldCollision {
                    key: group.field.clone(),
                });
            };

            let mut item = Map::new();
            for property in &group.properties {
                if property.key.is_empty() {
                    continue;
                }
                item.insert(property.key.clone(), coerce(property.value.clone()));
            }
            entries.push(Value::Object(item));
        }

        Ok(data)
    }
}

fn parse_json_data(raw: &str) -> Result<Map<String, Value>, AssemblyError> {
    let value: Value = serde_json::from_str(raw)?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(AssemblyError::JsonNotObject {
            found: json_type_name(&other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
