use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{take_optional_string, take_required_string};
use crate::errors::ValidationError;
use crate::fingerprint::fingerprint;

/// A current or potential partner organisation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Partner {
    pub id: String,
    pub name: String,
    pub industry: String,
    pub added_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    /// Caller attributes: partnership type, value, contact info, notes.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Partner {
    /// The `partnership_type` attribute, when present as a string.
    #[must_use]
    pub fn partnership_type(&self) -> Option<&str> {
        self.attributes.get("partnership_type").and_then(Value::as_str)
    }
}

/// A validated partner submission that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPartner {
    /// Caller-supplied id, or the fingerprint of the submission.
    pub id: String,
    pub name: String,
    pub industry: String,
    pub attributes: Map<String, Value>,
}

impl NewPartner {
    /// Validate a raw partner object.
    ///
    /// `name` and `industry` must be present strings. When `id` is absent the
    /// fingerprint of the whole submission becomes the id. Caller-supplied
    /// `added_date`/`last_updated` are dropped; the store stamps its own.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a required field is missing or any of
    /// `id`, `name`, `industry` is not a string.
    pub fn from_map(mut data: Map<String, Value>) -> Result<Self, ValidationError> {
        let id = match take_optional_string(&mut data, "id")? {
            Some(id) => id,
            None => fingerprint(&Value::Object(data.clone())),
        };
        let name = take_required_string(&mut data, "partner", "name")?;
        let industry = take_required_string(&mut data, "partner", "industry")?;
        data.remove("added_date");
        data.remove("last_updated");

        Ok(Self {
            id,
            name,
            industry,
            attributes: data,
        })
    }

    /// Stamp dates and produce the stored record.
    #[must_use]
    pub fn into_partner(self, now: DateTime<Utc>) -> Partner {
        Partner {
            id: self.id,
            name: self.name,
            industry: self.industry,
            added_date: now,
            last_updated: now,
            attributes: self.attributes,
        }
    }
}
