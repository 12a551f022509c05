//! Per-operation engine session accounting.
//!
//! libgit2 keeps a process-global, reference-counted init/shutdown pair;
//! the git2 crate drives it for every handle it creates. [`Session`] brackets
//! one operation with that lifecycle: acquisition forces the global init (so
//! an init failure surfaces before any operation work) and bumps an active
//! counter, and the `Drop` impl releases on every exit path, early returns
//! included. Nested acquisition is safe because the engine refcounts.

use std::sync::atomic::{AtomicUsize, Ordering};

use gitpick_utils::{GitError, GitResult, errors::engine_message};

static ACTIVE: AtomicUsize = AtomicUsize::new(0);

/// Guard for one operation's use of the git engine.
#[derive(Debug)]
pub struct Session {
    _priv: (),
}

impl Session {
    /// Acquire a session, initializing the engine's global state.
    pub fn acquire() -> GitResult<Self> {
        // Cheapest fallible engine call; forces the ref-counted global init.
        if let Err(err) = git2::Config::new() {
            return Err(GitError::EngineInit {
                message: engine_message(&err),
            });
        }

        let active = ACTIVE.fetch_add(1, Ordering::SeqCst) + 1;
        let (major, minor, patch) = git2::Version::get().libgit2_version();
        let engine = format!("{major}.{minor}.{patch}");
        tracing::debug!(libgit2 = %engine, active, "session acquired");
        Ok(Self { _priv: () })
    }

    /// Number of sessions currently held across the process.
    #[must_use]
    pub fn active() -> usize {
        ACTIVE.load(Ordering::SeqCst)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let active = ACTIVE.fetch_sub(1, Ordering::SeqCst) - 1;
        tracing::trace!(active, "session released");
    }
}
