//! Record structs for the three persisted collections.
//!
//! Partners and research entries carry arbitrary caller attributes next to
//! their typed fields (`#[serde(flatten)]`), so a stored record serializes
//! back to the same flat JSON object the caller submitted plus metadata.
//! `New*` types validate a raw submission before the store touches it.

mod history;
mod partner;
mod research;

pub use history::HistoryEntry;
pub use partner::{NewPartner, Partner};
pub use research::{NewResearchEntry, ResearchEntry};

use serde_json::{Map, Value};

use crate::errors::ValidationError;

/// Remove a required string field from a submission.
fn take_required_string(
    data: &mut Map<String, Value>,
    entity: &'static str,
    field: &str,
) -> Result<String, ValidationError> {
    match data.remove(field) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(ValidationError::invalid(
            field,
            format!("expected a string, got {}", json_kind(&other)),
        )),
        None => Err(ValidationError::missing(entity, field)),
    }
}

/// Remove an optional string field from a submission.
fn take_optional_string(
    data: &mut Map<String, Value>,
    field: &str,
) -> Result<Option<String>, ValidationError> {
    match data.remove(field) {
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Null) | None => Ok(None),
        Some(other) => Err(ValidationError::invalid(
            field,
            format!("expected a string, got {}", json_kind(&other)),
        )),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
