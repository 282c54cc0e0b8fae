//! History repository.

use pact_core::documents::HistoryDocument;
use pact_core::responses::HistoryWindow;

use crate::error::StoreError;
use crate::files::DocumentKind;
use crate::service::RecordStore;

impl RecordStore {
    /// The most recent `limit` history entries, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store lock times out or the history document
    /// cannot be read.
    pub async fn get_history(&self, limit: usize) -> Result<HistoryWindow, StoreError> {
        let _guard = self.write_guard().await?;
        let document: HistoryDocument = self.read(DocumentKind::History)?;
        let history = document.tail(limit).to_vec();
        Ok(HistoryWindow {
            count: history.len(),
            history,
        })
    }
}
