//! Advisory lock over the experiment data directory.
//!
//! The lock file holds the owner's PID and is created with `create_new`, so
//! exactly one writer wins. A file left by a process that is no longer
//! running is cleared under a `.takeover` sibling, which serialises cleanup
//! so a waiter never removes a lock another waiter has just taken.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rcl_config::LockConfig;

/// Time a new holder gets to write its PID before an empty lock counts as
/// abandoned.
const PID_WRITE_GRACE: Duration = Duration::from_secs(2);

/// A takeover file this old was left by a crash during cleanup.
const TAKEOVER_EXPIRY: Duration = Duration::from_secs(10);

#[derive(Debug)]
pub struct WriteLockGuard {
    path: PathBuf,
}

impl Drop for WriteLockGuard {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Wait for the lock at `lock_path`, retrying every `retry_delay_ms` up to
/// `wait_timeout_secs`.
pub async fn acquire(lock_path: &Path, config: &LockConfig) -> anyhow::Result<WriteLockGuard> {
    let timeout = Duration::from_secs(config.wait_timeout_secs);
    let retry_delay = Duration::from_millis(config.retry_delay_ms);
    let started = Instant::now();

    loop {
        let state = match try_acquire(lock_path) {
            Ok(guard) => {
                tracing::debug!(path = %lock_path.display(), "data directory lock acquired");
                return Ok(guard);
            }
            Err(state) => state,
        };

        if matches!(state, LockState::Stale(_) | LockState::Abandoned) {
            tracing::warn!(?state, path = %lock_path.display(), "clearing lock left by a dead process");
            if clear_dead_lock(lock_path) {
                continue;
            }
        }

        if started.elapsed() >= timeout {
            if let LockState::HeldBy(pid) = state {
                anyhow::bail!(
                    "another rcl process (pid {pid}) holds {}; try again after it finishes",
                    lock_path.display()
                );
            }
            anyhow::bail!(
                "could not acquire lock at {}; remove it if no rcl process is running",
                lock_path.display()
            );
        }
        tokio::time::sleep(retry_delay).await;
    }
}

#[derive(Debug, PartialEq, Eq)]
enum LockState {
    HeldBy(u32),
    Stale(u32),
    /// No PID written within `PID_WRITE_GRACE`.
    Abandoned,
    Unknown,
}

fn try_acquire(lock_path: &Path) -> Result<WriteLockGuard, LockState> {
    if let Some(parent) = lock_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

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
        Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => Err(inspect(lock_path)),
        Err(_) => Err(LockState::Unknown),
    }
}

fn inspect(lock_path: &Path) -> LockState {
    let Ok(contents) = std::fs::read_to_string(lock_path) else {
        return LockState::Unknown;
    };
    match contents.trim().parse::<u32>() {
        Ok(pid) if is_process_running(pid) => LockState::HeldBy(pid),
        Ok(pid) => LockState::Stale(pid),
        Err(_) if older_than(lock_path, PID_WRITE_GRACE) => LockState::Abandoned,
        // Written by a holder that has not flushed its PID yet.
        Err(_) => LockState::Unknown,
    }
}

/// Remove the lock at `lock_path` if it still belongs to a dead process.
///
/// The lock is re-inspected while holding the takeover file. Nothing else
/// removes it in that window and `create_new` cannot replace an existing
/// file, so only the dead holder's file is ever deleted.
fn clear_dead_lock(lock_path: &Path) -> bool {
    let takeover = takeover_path(lock_path);
    if older_than(&takeover, TAKEOVER_EXPIRY) {
        let _ = std::fs::remove_file(&takeover);
    }
    if OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(&takeover)
        .is_err()
    {
        return false;
    }
    let _takeover = WriteLockGuard { path: takeover };

    match inspect(lock_path) {
        LockState::Stale(_) | LockState::Abandoned => std::fs::remove_file(lock_path).is_ok(),
        LockState::HeldBy(_) | LockState::Unknown => false,
    }
}

fn takeover_path(lock_path: &Path) -> PathBuf {
    let mut name = lock_path.file_name().unwrap_or_default().to_os_string();
    name.push(".takeover");
    lock_path.with_file_name(name)
}

fn older_than(path: &Path, age: Duration) -> bool {
    std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .ok()
        .and_then(|modified| modified.elapsed().ok())
        .is_some_and(|elapsed| elapsed >= age)
}

fn is_process_running(pid: u32) -> bool {
    if pid == std::process::id() {
        return true;
    }
    std::process::Command::new("kill")
        .arg("-0")
        .arg(pid.to_string())
        .stderr(std::process::Stdio::null())
        .status()
        .is_ok_and(|status| status.success())
}
