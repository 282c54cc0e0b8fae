//! Document files in the data directory.
//!
//! Every write goes to a temp file in the same directory, is fsynced, and is
//! renamed over the target, so a reader sees either the old or the new
//! document and never a torn one.

use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// The three persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Partners,
    Research,
    History,
}

impl DocumentKind {
    pub const ALL: [Self; 3] = [Self::Partners, Self::Research, Self::History];

    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Partners => "partners.json",
            Self::Research => "research_data.json",
            Self::History => "data_history.json",
        }
    }

    /// Contents of a freshly initialised document.
    #[must_use]
    pub fn empty(self) -> serde_json::Value {
        match self {
            Self::Partners => serde_json::json!({"current_partners": [], "potential_partners": []}),
            Self::Research => serde_json::json!({"research_entries": []}),
            Self::History => serde_json::json!({"history": []}),
        }
    }
}

/// Read and parse a document. A missing file reads as `T::default()`.
///
/// # Errors
///
/// Returns `StoreError::Io` if the file exists but cannot be read, or
/// `StoreError::Corrupt` if it is not a valid document.
pub fn read_document<T>(path: &Path) -> Result<T, StoreError>
where
    T: DeserializeOwned + Default,
{
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "document missing, reading as empty");
            return Ok(T::default());
        }
        Err(e) => return Err(StoreError::io(path, e)),
    };
    serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Atomically replace `path` with the pretty-printed JSON of `value`.
///
/// # Errors
///
/// Returns `StoreError` if encoding, writing, syncing, or renaming fails.
pub fn write_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut bytes = serde_json::to_vec_pretty(value)?;
    bytes.push(b'\n');

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
    tmp.write_all(&bytes)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| StoreError::io(tmp.path(), e))?;
    tmp.persist(path)
        .map_err(|e| StoreError::io(path, e.error))?;
    Ok(())
}

/// Create any missing document with its empty contents.
///
/// # Errors
///
/// Returns `StoreError` if a document cannot be written.
pub fn initialize(dir: &Path) -> Result<(), StoreError> {
    for kind in DocumentKind::ALL {
        let path = dir.join(kind.file_name());
        if !path.exists() {
            write_atomic(&path, &kind.empty())?;
            tracing::debug!(path = %path.display(), "initialized empty document");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pact_core::documents::{HistoryDocument, PartnersDocument};

    use super::*;

    #[test]
    fn initialize_creates_all_documents() {
        let dir = tempfile::tempdir().unwrap();
        initialize(dir.path()).unwrap();
        for kind in DocumentKind::ALL {
            assert!(dir.path().join(kind.file_name()).is_file());
        }
        let partners: PartnersDocument =
            read_document(&dir.path().join("partners.json")).unwrap();
        assert_eq!(partners, PartnersDocument::default());
    }

    #[test]
    fn initialize_keeps_existing_documents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data_history.json");
        std::fs::write(
            &path,
            r#"{"history":[{"timestamp":"2025-01-01T00:00:00Z","operation":"add","data_type":"partner","data_id":"x"}]}"#,
        )
        .unwrap();
        initialize(dir.path()).unwrap();
        let history: HistoryDocument = read_document(&path).unwrap();
        assert_eq!(history.history.len(), 1);
    }

    #[test]
    fn corrupt_document_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partners.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = read_document::<PartnersDocument>(&path).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn write_atomic_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("research_data.json");
        write_atomic(&path, &DocumentKind::Research.empty()).unwrap();
        write_atomic(&path, &DocumentKind::Research.empty()).unwrap();
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
