//! Commit journal.
//!
//! A mutation touches two documents: the collection it changes and the
//! history. Both new documents are first written to `pending_commit.json`,
//! then applied one by one, then the journal is removed. If the process dies
//! part way, the next writer (or the next `RecordStore::open`) finds the
//! journal and rolls it forward, so the data and its history never disagree.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StoreError;
use crate::files::{self, DocumentKind};

pub const JOURNAL_FILE: &str = "pending_commit.json";

#[derive(Debug, Serialize, Deserialize)]
struct PendingCommit {
    started_at: DateTime<Utc>,
    writes: Vec<PendingWrite>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PendingWrite {
    document: DocumentKind,
    contents: Value,
}

/// Durably apply a set of document replacements as one logical step.
///
/// # Errors
///
/// Returns `StoreError` if the journal or any document cannot be written.
/// A journal left behind by a failure is rolled forward by [`recover`].
pub fn commit(dir: &Path, writes: Vec<(DocumentKind, Value)>) -> Result<(), StoreError> {
    let pending = PendingCommit {
        started_at: Utc::now(),
        writes: writes
            .into_iter()
            .map(|(document, contents)| PendingWrite { document, contents })
            .collect(),
    };

    let journal = dir.join(JOURNAL_FILE);
    files::write_atomic(&journal, &pending)?;
    apply(dir, &pending)?;
    std::fs::remove_file(&journal).map_err(|e| StoreError::io(&journal, e))
}

/// Roll forward an interrupted commit, if there is one.
///
/// Returns `true` when a journal was found and applied.
///
/// # Errors
///
/// Returns `StoreError::Corrupt` if the journal cannot be parsed, or any
/// write error from re-applying it.
pub fn recover(dir: &Path) -> Result<bool, StoreError> {
    let journal = dir.join(JOURNAL_FILE);
    if !journal.exists() {
        return Ok(false);
    }

    let raw = std::fs::read_to_string(&journal).map_err(|e| StoreError::io(&journal, e))?;
    let pending: PendingCommit = serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
        path: journal.clone(),
        reason: e.to_string(),
    })?;

    tracing::warn!(
        started_at = %pending.started_at,
        documents = pending.writes.len(),
        "rolling forward interrupted commit"
    );
    apply(dir, &pending)?;
    std::fs::remove_file(&journal).map_err(|e| StoreError::io(&journal, e))?;
    Ok(true)
}

fn apply(dir: &Path, pending: &PendingCommit) -> Result<(), StoreError> {
    for write in &pending.writes {
        files::write_atomic(&dir.join(write.document.file_name()), &write.contents)?;
    }
    Ok(())
}
