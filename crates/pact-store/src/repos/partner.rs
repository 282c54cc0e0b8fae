//! Partner repository: add with per-pool name uniqueness, lookup, listing.

use chrono::Utc;
use serde_json::{Map, Value};

use pact_core::documents::{HistoryDocument, PartnersDocument};
use pact_core::entities::{NewPartner, Partner};
use pact_core::enums::{DataType, HistoryOperation, Pool};
use pact_core::responses::{OpResult, PartnerLookup};

use crate::error::StoreError;
use crate::files::DocumentKind;
use crate::service::RecordStore;

impl RecordStore {
    /// Add a partner to `pool`.
    ///
    /// A partner whose `name` already exists in the same pool is not added;
    /// the result has error status and carries the existing record. The same
    /// name may exist once in each pool.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if `name` or `industry` is missing
    /// or not a string, or a persistence error.
    pub async fn add_partner(
        &self,
        data: Map<String, Value>,
        pool: Pool,
    ) -> Result<OpResult<Partner>, StoreError> {
        let submission = NewPartner::from_map(data)?;

        let guard = self.write_guard().await?;
        let mut partners: PartnersDocument = self.read(DocumentKind::Partners)?;

        if let Some(existing) = partners.find_by_name(pool, &submission.name) {
            tracing::debug!(name = %existing.name, %pool, "duplicate partner name");
            return Ok(OpResult::error(
                format!("Partner '{}' already exists", existing.name),
                Some(existing.clone()),
            ));
        }

        let mut history: HistoryDocument = self.read(DocumentKind::History)?;
        let partner = submission.into_partner(Utc::now());
        history.record(
            HistoryOperation::Add,
            DataType::Partner,
            &partner.id,
            partner.added_date,
        );
        partners.pool_mut(pool).push(partner.clone());

        self.commit(
            &guard,
            (DocumentKind::Partners, &partners),
            (DocumentKind::History, &history),
        )?;
        tracing::info!(id = %partner.id, name = %partner.name, %pool, "partner added");

        Ok(OpResult::success(
            format!("Added {pool} partner '{}'", partner.name),
            partner,
        ))
    }

    /// Find a partner by id in either pool, current first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store lock times out or the partners document
    /// cannot be read.
    pub async fn get_partner(&self, id: &str) -> Result<OpResult<PartnerLookup>, StoreError> {
        let _guard = self.write_guard().await?;
        let partners: PartnersDocument = self.read(DocumentKind::Partners)?;
        Ok(match partners.find_by_id(id) {
            Some((partner, pool)) => OpResult::success(
                format!("Found {pool} partner '{}'", partner.name),
                PartnerLookup {
                    partner: partner.clone(),
                    pool,
                },
            ),
            None => OpResult::error(format!("Partner with ID '{id}' not found"), None),
        })
    }

    /// All partners in `pool`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store lock times out or the partners document
    /// cannot be read.
    pub async fn partners(&self, pool: Pool) -> Result<Vec<Partner>, StoreError> {
        let _guard = self.write_guard().await?;
        let mut partners: PartnersDocument = self.read(DocumentKind::Partners)?;
        Ok(std::mem::take(partners.pool_mut(pool)))
    }
}
