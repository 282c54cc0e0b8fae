//! Service layer owning the data directory.
//!
//! `RecordStore` holds the data directory, its configuration, and the
//! single-writer mutex. Repo methods are implemented as `impl RecordStore`
//! in `repos/*`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use pact_config::StoreConfig;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::{Mutex, MutexGuard};

use crate::error::StoreError;
use crate::files::{self, DocumentKind};
use crate::journal;
use crate::write_lock::{self, LOCK_FILE, WriteLockGuard};

/// Persistent partner, research, and history collections.
///
/// Every mutation method follows this protocol:
/// 1. Validate the submission (no lock held)
/// 2. Take the writer mutex, then the cross-process lock if enabled
/// 3. Roll forward any interrupted commit
/// 4. Re-read the affected documents and check for duplicates
/// 5. Commit the new collection and history through the journal
///
/// Reads take the same guard, so they never observe a half-applied commit
/// and roll forward a journal left by a crashed writer.
pub struct RecordStore {
    dir: PathBuf,
    config: StoreConfig,
    writer: Mutex<()>,
}

/// Held for the duration of one mutation or snapshot read.
///
/// Fields drop in declaration order: the lock file is removed before the
/// mutex is released.
pub(crate) struct WriteGuard<'a> {
    _file: Option<WriteLockGuard>,
    _local: MutexGuard<'a, ()>,
}

impl RecordStore {
    /// Open (creating if needed) the data directory named by `config`.
    ///
    /// Missing documents are created empty and a commit journal left by a
    /// crashed writer is rolled forward.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the configuration is invalid, the directory
    /// cannot be created, or a leftover journal cannot be applied.
    pub async fn open(config: StoreConfig) -> Result<Self, StoreError> {
        config.validate()?;
        let dir = config.data_dir.clone();
        std::fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;

        let store = Self {
            dir,
            config,
            writer: Mutex::new(()),
        };

        {
            let _guard = store.write_guard().await?;
            files::initialize(&store.dir)?;
        }
        tracing::debug!(dir = %store.dir.display(), "record store opened");
        Ok(store)
    }

    /// Open a store at `dir` with default settings.
    ///
    /// # Errors
    ///
    /// See [`RecordStore::open`].
    pub async fn open_at(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Self::open(StoreConfig::at(dir)).await
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub(crate) async fn write_guard(&self) -> Result<WriteGuard<'_>, StoreError> {
        let local = self.writer.lock().await;
        let file = if self.config.cross_process_lock {
            let timeout = Duration::from_secs(self.config.lock_timeout_secs);
            Some(write_lock::acquire(&self.dir.join(LOCK_FILE), timeout).await?)
        } else {
            None
        };
        journal::recover(&self.dir)?;
        Ok(WriteGuard {
            _file: file,
            _local: local,
        })
    }

    pub(crate) fn read<T>(&self, kind: DocumentKind) -> Result<T, StoreError>
    where
        T: DeserializeOwned + Default,
    {
        files::read_document(&self.dir.join(kind.file_name()))
    }

    /// Persist two documents as one step. Callers must hold a [`WriteGuard`].
    pub(crate) fn commit<A, B>(
        &self,
        _guard: &WriteGuard<'_>,
        (kind_a, doc_a): (DocumentKind, &A),
        (kind_b, doc_b): (DocumentKind, &B),
    ) -> Result<(), StoreError>
    where
        A: Serialize,
        B: Serialize,
    {
        journal::commit(
            &self.dir,
            vec![
                (kind_a, serde_json::to_value(doc_a)?),
                (kind_b, serde_json::to_value(doc_b)?),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn open_creates_directory_and_documents() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("nested").join("data");
        let store = RecordStore::open_at(&dir).await.unwrap();

        assert_eq!(store.data_dir(), dir.as_path());
        for kind in DocumentKind::ALL {
            assert!(dir.join(kind.file_name()).is_file());
        }
        assert!(!dir.join(LOCK_FILE).exists());
    }

    #[tokio::test]
    async fn empty_data_dir_is_rejected() {
        let err = RecordStore::open(StoreConfig::at("")).await.err().unwrap();
        assert!(matches!(err, StoreError::Config(_)));
    }

    #[tokio::test]
    async fn write_guard_without_file_lock() {
        let temp = tempfile::tempdir().unwrap();
        let config = StoreConfig {
            cross_process_lock: false,
            ..StoreConfig::at(temp.path())
        };
        let store = RecordStore::open(config).await.unwrap();
        let guard = store.write_guard().await.unwrap();
        assert!(guard._file.is_none());
        assert!(!temp.path().join(LOCK_FILE).exists());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn waiting_writer_never_sees_released_lock_file() {
        let temp = tempfile::tempdir().unwrap();
        let config = StoreConfig {
            lock_timeout_secs: 0,
            ..StoreConfig::at(temp.path())
        };
        let store = std::sync::Arc::new(RecordStore::open(config).await.unwrap());

        for _ in 0..20 {
            let guard = store.write_guard().await.unwrap();
            assert!(temp.path().join(LOCK_FILE).is_file());

            let waiter = {
                let store = std::sync::Arc::clone(&store);
                tokio::spawn(async move { store.write_guard().await.map(|g| g._file.is_some()) })
            };
            tokio::time::sleep(Duration::from_millis(5)).await;
            drop(guard);

            // A zero timeout fails outright if the lock file outlived the mutex.
            assert!(waiter.await.unwrap().unwrap());
        }
    }
}
