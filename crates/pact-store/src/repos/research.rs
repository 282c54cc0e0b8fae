//! Research repository: fingerprint-deduplicated add and per-partner lookup.

use chrono::Utc;
use serde_json::{Map, Value};

use pact_core::documents::{HistoryDocument, ResearchDocument};
use pact_core::entities::{NewResearchEntry, ResearchEntry};
use pact_core::enums::{DataType, HistoryOperation};
use pact_core::responses::{OpResult, PartnerResearch};

use crate::error::StoreError;
use crate::files::DocumentKind;
use crate::service::RecordStore;

impl RecordStore {
    /// Add a research entry unless one with the same `data` is stored.
    ///
    /// The entry id is the fingerprint of `data`. Duplicates are detected
    /// across all partners and come back with error status carrying the
    /// stored entry.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if `partner_id`, `source` or `data`
    /// is missing, or a persistence error.
    pub async fn add_research(
        &self,
        data: Map<String, Value>,
    ) -> Result<OpResult<ResearchEntry>, StoreError> {
        let submission = NewResearchEntry::from_map(data)?;

        let guard = self.write_guard().await?;
        let mut research: ResearchDocument = self.read(DocumentKind::Research)?;

        if let Some(existing) = research.find_by_fingerprint(&submission.fingerprint) {
            tracing::debug!(id = %existing.id, "duplicate research data");
            return Ok(OpResult::error(
                "Duplicate research data detected",
                Some(existing.clone()),
            ));
        }

        let mut history: HistoryDocument = self.read(DocumentKind::History)?;
        let entry = submission.into_entry(Utc::now());
        history.record(
            HistoryOperation::Add,
            DataType::Research,
            &entry.id,
            entry.added_date,
        );
        research.research_entries.push(entry.clone());

        self.commit(
            &guard,
            (DocumentKind::Research, &research),
            (DocumentKind::History, &history),
        )?;
        tracing::info!(id = %entry.id, partner_id = %entry.partner_id, "research added");

        Ok(OpResult::success("Added new research data", entry))
    }

    /// Every research entry for `partner_id`, in storage order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store lock times out or the research document
    /// cannot be read.
    pub async fn get_research_for_partner(
        &self,
        partner_id: &str,
    ) -> Result<PartnerResearch, StoreError> {
        let _guard = self.write_guard().await?;
        let research: ResearchDocument = self.read(DocumentKind::Research)?;
        let research_entries: Vec<ResearchEntry> = research
            .research_entries
            .into_iter()
            .filter(|entry| entry.partner_id == partner_id)
            .collect();

        Ok(PartnerResearch {
            partner_id: partner_id.to_string(),
            research_count: research_entries.len(),
            research_entries,
        })
    }
}
