//! Cross-process write lock.
//!
//! A lock file holding the writer's pid, created with `create_new` so only
//! one process wins. A lock whose pid is no longer running is stale and is
//! removed. The lock is released when the guard drops.

use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::StoreError;

pub const LOCK_FILE: &str = "store.write.lock";
const LOCK_RETRY_DELAY: Duration = Duration::from_millis(250);

#[derive(Debug)]
pub struct WriteLockGuard {
    path: PathBuf,
}

impl Drop for WriteLockGuard {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Wait up to `timeout` for the lock at `lock_path`.
///
/// # Errors
///
/// Returns `StoreError::Lock` if another live process still holds the lock
/// when `timeout` elapses.
pub async fn acquire(lock_path: &Path, timeout: Duration) -> Result<WriteLockGuard, StoreError> {
    let started = std::time::Instant::now();

    loop {
        match try_acquire(lock_path) {
            Ok(guard) => return Ok(guard),
            Err(LockState::HeldBy(pid)) => {
                if started.elapsed() >= timeout {
                    return Err(StoreError::Lock(format!(
                        "another writer is running (pid {pid}); try again after it finishes"
                    )));
                }
                tokio::time::sleep(LOCK_RETRY_DELAY).await;
            }
            Err(LockState::Stale(pid)) => {
                tracing::warn!(pid, path = %lock_path.display(), "removing stale write lock");
                let _ = std::fs::remove_file(lock_path);
            }
            Err(LockState::Unknown) => {
                if started.elapsed() >= timeout {
                    return Err(StoreError::Lock(format!(
                        "could not acquire write lock at {}; remove the lock file if no writer is running",
                        lock_path.display()
                    )));
                }
                tokio::time::sleep(LOCK_RETRY_DELAY).await;
            }
        }
    }
}

#[derive(Debug)]
enum LockState {
    HeldBy(u32),
    Stale(u32),
    Unknown,
}

fn try_acquire(lock_path: &Path) -> Result<WriteLockGuard, LockState> {
    match OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(lock_path)
    {
        Ok(mut file) => {
            let _ = writeln!(file, "{}", std::process::id());
            Ok(WriteLockGuard {
                path: lock_path.to_path_buf(),
            })
        }
        Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
            let mut pid_buf = String::new();
            if OpenOptions::new()
                .read(true)
                .open(lock_path)
                .and_then(|mut file| file.read_to_string(&mut pid_buf))
                .is_err()
            {
                return Err(LockState::Unknown);
            }

            match pid_buf.trim().parse::<u32>().ok() {
                Some(pid) if is_process_running(pid) => Err(LockState::HeldBy(pid)),
                Some(pid) => Err(LockState::Stale(pid)),
                None => Err(LockState::Unknown),
            }
        }
        Err(_) => Err(LockState::Unknown),
    }
}

fn is_process_running(pid: u32) -> bool {
    if pid == std::process::id() {
        return true;
    }
    std::process::Command::new("kill")
        .arg("-0")
        .arg(pid.to_string())
        .status()
        .is_ok_and(|status| status.success())
}
