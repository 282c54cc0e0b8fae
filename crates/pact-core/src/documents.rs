//! Persisted document envelopes.
//!
//! Each collection is stored as one self-describing JSON document with a
//! single named list (two for partners). Missing lists deserialize empty so
//! a hand-created `{}` file is a valid empty document.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{HistoryEntry, Partner, ResearchEntry};
use crate::enums::{DataType, HistoryOperation, Pool};
use crate::fingerprint::fingerprint;

/// `{"current_partners": [...], "potential_partners": [...]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PartnersDocument {
    #[serde(default)]
    pub current_partners: Vec<Partner>,
    #[serde(default)]
    pub potential_partners: Vec<Partner>,
}

impl PartnersDocument {
    #[must_use]
    pub fn pool(&self, pool: Pool) -> &[Partner] {
        match pool {
            Pool::Current => &self.current_partners,
            Pool::Potential => &self.potential_partners,
        }
    }

    pub fn pool_mut(&mut self, pool: Pool) -> &mut Vec<Partner> {
        match pool {
            Pool::Current => &mut self.current_partners,
            Pool::Potential => &mut self.potential_partners,
        }
    }

    /// First partner in `pool` with exactly this name.
    #[must_use]
    pub fn find_by_name(&self, pool: Pool, name: &str) -> Option<&Partner> {
        self.pool(pool).iter().find(|p| p.name == name)
    }

    /// Search both pools, current first.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<(&Partner, Pool)> {
        Pool::ALL.into_iter().find_map(|pool| {
            self.pool(pool)
                .iter()
                .find(|p| p.id == id)
                .map(|partner| (partner, pool))
        })
    }
}

/// `{"research_entries": [...]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResearchDocument {
    #[serde(default)]
    pub research_entries: Vec<ResearchEntry>,
}

impl ResearchDocument {
    /// The stored entry whose `data` has fingerprint `digest`.
    ///
    /// The digest is recomputed from each entry's data; stored ids from
    /// older or hand-edited documents are not trusted.
    #[must_use]
    pub fn find_by_fingerprint(&self, digest: &str) -> Option<&ResearchEntry> {
        self.research_entries
            .iter()
            .find(|e| fingerprint(&e.data) == digest)
    }
}

/// `{"history": [...]}`, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HistoryDocument {
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl HistoryDocument {
    /// Append an entry stamped `now`, or the previous entry's timestamp if
    /// the clock went backwards, so timestamps never decrease.
    pub fn record(
        &mut self,
        operation: HistoryOperation,
        data_type: DataType,
        data_id: &str,
        now: DateTime<Utc>,
    ) -> &HistoryEntry {
        let timestamp = self
            .history
            .last()
            .map_or(now, |last| last.timestamp.max(now));
        self.history.push(HistoryEntry {
            timestamp,
            operation,
            data_type,
            data_id: data_id.to_string(),
        });
        &self.history[self.history.len() - 1]
    }

    /// The last `limit` entries, oldest first.
    #[must_use]
    pub fn tail(&self, limit: usize) -> &[HistoryEntry] {
        let start = self.history.len().saturating_sub(limit);
        &self.history[start..]
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_object_is_empty_document() {
        let doc: PartnersDocument = serde_json::from_value(json!({})).unwrap();
        assert!(doc.current_partners.is_empty());
        assert!(doc.potential_partners.is_empty());
        let history: HistoryDocument = serde_json::from_value(json!({})).unwrap();
        assert!(history.history.is_empty());
    }

    #[test]
    fn record_never_goes_back_in_time() {
        let mut doc = HistoryDocument::default();
        let now = Utc::now();
        doc.record(HistoryOperation::Add, DataType::Partner, "a", now);
        let second = doc
            .record(
                HistoryOperation::Add,
                DataType::Partner,
                "b",
                now - Duration::seconds(30),
            )
            .clone();
        assert_eq!(second.timestamp, now);
        assert_eq!(second.data_id, "b");
    }

    #[test]
    fn tail_returns_oldest_first_window() {
        let mut doc = HistoryDocument::default();
        let now = Utc::now();
        for i in 0..5 {
            doc.record(
                HistoryOperation::Add,
                DataType::Research,
                &format!("r{i}"),
                now + Duration::seconds(i),
            );
        }
        let ids: Vec<&str> = doc.tail(2).iter().map(|e| e.data_id.as_str()).collect();
        assert_eq!(ids, ["r3", "r4"]);
        assert_eq!(doc.tail(50).len(), 5);
        assert!(doc.tail(0).is_empty());
    }

    #[test]
    fn research_lookup_ignores_stored_id() {
        let doc: ResearchDocument = serde_json::from_value(json!({
            "research_entries": [{
                "id": "5d41402abc4b2a76b9719d911017c592",
                "partner_id": "p1",
                "source": "manual",
                "data": {"k": 1, "j": [true]},
                "added_date": "2024-03-01T09:00:00Z"
            }]
        }))
        .unwrap();

        let digest = fingerprint(&json!({"j": [true], "k": 1}));
        let found = doc.find_by_fingerprint(&digest).unwrap();
        assert_eq!(found.partner_id, "p1");
        assert!(doc.find_by_fingerprint("5d41402abc4b2a76b9719d911017c592").is_none());
    }
}
