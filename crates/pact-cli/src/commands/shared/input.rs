use std::path::Path;

use anyhow::Context;
use serde_json::{Map, Value};

/// Read a JSON document from `path`, or from stdin when `path` is `-`.
pub fn read_json_file(path: &Path) -> anyhow::Result<Value> {
    let raw = if path == Path::new("-") {
        std::io::read_to_string(std::io::stdin()).context("failed to read JSON from stdin")?
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };
    serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))
}

/// Resolve a JSON object from `--json`, `--file`, or stdin, in that order.
pub fn read_object(json: Option<&str>, file: Option<&Path>) -> anyhow::Result<Map<String, Value>> {
    let value = match (json, file) {
        (Some(inline), _) => serde_json::from_str(inline).context("invalid JSON in --json")?,
        (None, Some(path)) => read_json_file(path)?,
        (None, None) => read_json_file(Path::new("-"))?,
    };
    into_object(value)
}

pub fn into_object(value: Value) -> anyhow::Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => anyhow::bail!("expected a JSON object, got {}", kind(&other)),
    }
}

/// Accept either one item or an array of items.
pub fn one_or_many(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        single => vec![single],
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
