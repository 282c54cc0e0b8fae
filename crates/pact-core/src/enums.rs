//! Pools, history operations, data types, and result statuses.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Pool
// ---------------------------------------------------------------------------

/// The partner namespace a record lives in. Names are unique per pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Pool {
    Current,
    Potential,
}

impl Pool {
    /// Lookup order used when searching both pools.
    pub const ALL: [Self; 2] = [Self::Current, Self::Potential];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Potential => "potential",
        }
    }

    /// Name of the list holding this pool in the partners document.
    #[must_use]
    pub const fn document_key(self) -> &'static str {
        match self {
            Self::Current => "current_partners",
            Self::Potential => "potential_partners",
        }
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// HistoryOperation
// ---------------------------------------------------------------------------

/// Kind of mutation recorded in the history.
///
/// Only `Add` is produced today; `Update` and `Delete` are part of the
/// persisted vocabulary so older or hand-edited histories still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum HistoryOperation {
    Add,
    Update,
    Delete,
}

impl HistoryOperation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for HistoryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DataType
// ---------------------------------------------------------------------------

/// Which collection a history entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Partner,
    Research,
}

impl DataType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Partner => "partner",
            Self::Research => "research",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ResultStatus
// ---------------------------------------------------------------------------

/// Status tag of an [`OpResult`](crate::responses::OpResult).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResultStatus {
    Success,
    Error,
}

impl ResultStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Pool::Current).unwrap(), "\"current\"");
        let pool: Pool = serde_json::from_str("\"potential\"").unwrap();
        assert_eq!(pool, Pool::Potential);
    }

    #[test]
    fn pool_document_keys() {
        assert_eq!(Pool::Current.document_key(), "current_partners");
        assert_eq!(Pool::Potential.document_key(), "potential_partners");
    }

    #[test]
    fn as_str_matches_serde() {
        for op in [
            HistoryOperation::Add,
            HistoryOperation::Update,
            HistoryOperation::Delete,
        ] {
            let json = serde_json::to_string(&op).unwrap();
            assert_eq!(json, format!("\"{}\"", op.as_str()));
        }
        for dt in [DataType::Partner, DataType::Research] {
            let json = serde_json::to_string(&dt).unwrap();
            assert_eq!(json, format!("\"{dt}\""));
        }
    }
}
