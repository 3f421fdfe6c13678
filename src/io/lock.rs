//! Lock file management for single-instance enforcement.
//!
//! Only one countdown session may run at a time: two concurrent sessions
//! would mean two timers over the same logical state. The lock lives in the
//! runtime directory and holds the owning PID for diagnostics.

use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs::File;
use std::io::{Seek, SeekFrom, Write};
use std::path::PathBuf;

/// Held lock; releases and removes the lock file on drop.
pub struct InstanceLock {
    _file: File,
    path: PathBuf,
}

impl Drop for InstanceLock {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

fn lock_path() -> PathBuf {
    let runtime_dir = std::env::var("XDG_RUNTIME_DIR").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(runtime_dir).join("iftarr.lock")
}

/// Try to acquire the single-instance lock.
///
/// Returns `Ok(Some(lock))` when acquired, `Ok(None)` when another instance
/// already holds it (its PID is logged).
pub fn acquire_lock() -> Result<Option<InstanceLock>> {
    let path = lock_path();

    let mut file = std::fs::OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(&path)
        .with_context(|| format!("Failed to open lock file {}", path.display()))?;

    match file.try_lock_exclusive() {
        Ok(()) => {
            file.set_len(0)?;
            file.seek(SeekFrom::Start(0))?;
            writeln!(&file, "{}", std::process::id())?;
            file.flush()?;
            Ok(Some(InstanceLock { _file: file, path }))
        }
        Err(_) => {
            let contents = std::fs::read_to_string(&path).unwrap_or_default();
            let pid = contents.trim();
            if pid.is_empty() {
                log_warning!("Another iftarr instance is already running");
            } else {
                log_warning!("Another iftarr instance is already running (PID {pid})");
            }
            Ok(None)
        }
    }
}
