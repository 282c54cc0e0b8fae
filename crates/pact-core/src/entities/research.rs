use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{take_optional_string, take_required_string};
use crate::errors::ValidationError;
use crate::fingerprint::fingerprint;

/// A stored piece of research about a partner. Identity is the fingerprint
/// of `data`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResearchEntry {
    pub id: String,
    pub partner_id: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    pub data: Value,
    pub added_date: DateTime<Utc>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// A validated research submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResearchEntry {
    /// Fingerprint of `data`.
    pub fingerprint: String,
    pub partner_id: String,
    pub source: String,
    pub search_query: Option<String>,
    pub data: Value,
    pub attributes: Map<String, Value>,
}

impl NewResearchEntry {
    /// Validate a raw research object.
    ///
    /// `partner_id` and `source` must be present strings and `data` must be
    /// present (any JSON value). Any caller `id` is discarded: the id is
    /// always the fingerprint of `data`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a required field is missing or has the
    /// wrong type.
    pub fn from_map(mut data: Map<String, Value>) -> Result<Self, ValidationError> {
        let partner_id = take_required_string(&mut data, "research", "partner_id")?;
        let source = take_required_string(&mut data, "research", "source")?;
        let payload = data
            .remove("data")
            .ok_or_else(|| ValidationError::missing("research", "data"))?;
        let search_query = take_optional_string(&mut data, "search_query")?;
        data.remove("id");
        data.remove("added_date");

        Ok(Self {
            fingerprint: fingerprint(&payload),
            partner_id,
            source,
            search_query,
            data: payload,
            attributes: data,
        })
    }

    #[must_use]
    pub fn into_entry(self, now: DateTime<Utc>) -> ResearchEntry {
        ResearchEntry {
            id: self.fingerprint,
            partner_id: self.partner_id,
            source: self.source,
            search_query: self.search_query,
            data: self.data,
            added_date: now,
            attributes: self.attributes,
        }
    }
}
