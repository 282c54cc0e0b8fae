//! Result envelopes returned across the caller boundary.
//!
//! Expected business conditions (duplicates, lookups that miss) are not
//! errors: they come back as an [`OpResult`] with `status: "error"` and,
//! where one exists, the conflicting record in `data`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{HistoryEntry, Partner, ResearchEntry};
use crate::enums::{Pool, ResultStatus};

/// Tagged `{status, message, data}` result.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OpResult<T> {
    pub status: ResultStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> OpResult<T> {
    #[must_use]
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: ResultStatus::Success,
            message: message.into(),
            data: Some(data),
        }
    }

    /// An error-status result, optionally carrying the conflicting record.
    #[must_use]
    pub fn error(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status: ResultStatus::Error,
            message: message.into(),
            data,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == ResultStatus::Success
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.status == ResultStatus::Error
    }
}

/// A partner together with the pool it was found in.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PartnerLookup {
    pub partner: Partner,
    pub pool: Pool,
}

/// All research entries recorded for one partner, in storage order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PartnerResearch {
    pub partner_id: String,
    pub research_count: usize,
    pub research_entries: Vec<ResearchEntry>,
}

/// The most recent slice of history, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HistoryWindow {
    pub count: usize,
    pub history: Vec<HistoryEntry>,
}
