//! templatefox-core
//!
//! Pure domain types, field-schema resolution, and payload assembly for the
//! TemplateFox PDF API. No HTTP dependency: this is the shared vocabulary
//! of the TemplateFox toolkit.

pub mod assemble;
pub mod coerce;
pub mod error;
pub mod fields;
