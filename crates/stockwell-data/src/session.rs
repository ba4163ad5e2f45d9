//! Session state: the currently loaded snapshot.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::error::SessionError;
use crate::model::Snapshot;

/// Holder for the active [`Snapshot`], replaced wholesale on each upload.
///
/// A successful load swaps in a new `Arc<Snapshot>` as a single atomic
/// update and bumps the version counter; a failed load leaves the previous
/// snapshot untouched. Readers clone the `Arc`, so a report that started
/// against one snapshot keeps seeing that snapshot even if an upload lands
/// mid-computation.
#[derive(Debug, Default)]
pub struct Session {
    snapshot: RwLock<Option<Arc<Snapshot>>>,
    version: AtomicU64,
}

impl Session {
    /// Create an empty session with no data loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active snapshot, returning the new session version.
    pub fn replace(&self, snapshot: Snapshot) -> u64 {
        let mut guard = self.snapshot.write().unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = Some(Arc::new(snapshot));
        self.version.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// The active snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoData`] if nothing has been loaded yet.
    pub fn current(&self) -> Result<Arc<Snapshot>, SessionError> {
        let guard = self.snapshot.read().unwrap_or_else(std::sync::PoisonError::into_inner);
        guard.clone().ok_or(SessionError::NoData)
    }

    /// Number of uploads this session has seen.
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    /// Whether a snapshot is loaded.
    pub fn is_loaded(&self) -> bool {
        self.snapshot
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_snapshot() -> Snapshot {
        Snapshot::new(vec![], vec![], vec![], vec![], vec![]).unwrap()
    }

    #[test]
    fn test_empty_session_has_no_data() {
        let session = Session::new();

        assert!(!session.is_loaded());
        assert_eq!(session.version(), 0);
        assert!(matches!(session.current(), Err(SessionError::NoData)));
    }

    #[test]
    fn test_replace_bumps_version() {
        let session = Session::new();

        assert_eq!(session.replace(empty_snapshot()), 1);
        assert_eq!(session.replace(empty_snapshot()), 2);
        assert_eq!(session.version(), 2);
        assert!(session.is_loaded());
    }

    #[test]
    fn test_reader_keeps_snapshot_across_replace() {
        let session = Session::new();
        session.replace(empty_snapshot());

        let held = session.current().unwrap();
        session.replace(empty_snapshot());

        // The old Arc stays valid; only new readers see the replacement.
        assert_eq!(*held, empty_snapshot());
        assert_eq!(session.version(), 2);
    }
}
