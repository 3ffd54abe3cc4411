//! Scoped acquisition of the "no background scroll" view resource.
//!
//! While any widget panel is open the page behind it must not scroll. The
//! lock is a shared counter; holders keep an RAII [`ScrollLockGuard`] that
//! releases on drop, so every exit path (close, unmount, session eviction)
//! releases the resource without a manual call.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared handle to the scroll-lock counter.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold the lock for as long as the returned guard lives.
    #[must_use]
    pub fn acquire(&self) -> ScrollLockGuard {
        self.holders.fetch_add(1, Ordering::SeqCst);
        ScrollLockGuard {
            holders: Arc::clone(&self.holders),
        }
    }

    /// Whether any holder currently suppresses background scroll.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.holders.load(Ordering::SeqCst) > 0
    }
}

/// Releases one hold on the scroll lock when dropped.
#[derive(Debug)]
pub struct ScrollLockGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.holders.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_releases_on_drop() {
        let lock = ScrollLock::new();
        assert!(!lock.is_locked());

        let guard = lock.acquire();
        assert!(lock.is_locked());

        drop(guard);
        assert!(!lock.is_locked());
    }

    #[test]
    fn lock_counts_multiple_holders() {
        let lock = ScrollLock::new();
        let a = lock.acquire();
        let b = lock.acquire();

        drop(a);
        assert!(lock.is_locked(), "still held by the second guard");

        drop(b);
        assert!(!lock.is_locked());
    }
}
