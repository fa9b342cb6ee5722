//! Single-level undo state for the last bulk replace.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Snapshot map from file path to its full pre-mutation content.
pub type UndoState = BTreeMap<PathBuf, String>;

/// Holds at most one generation of pre-mutation snapshots.
///
/// Publishing a new generation silently discards the previous one, and
/// taking the state clears it unconditionally: even if the restore that
/// follows fails, there is nothing left to re-apply. Single-level undo is a
/// deliberate design limit, not a bug.
#[derive(Debug, Default)]
pub struct UndoManager {
    state: Option<UndoState>,
}

impl UndoManager {
    /// Create an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a prior bulk replace can currently be undone.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.state.is_some()
    }

    /// Replace the held generation with the snapshots of a completed run.
    pub fn publish(&mut self, snapshots: UndoState) {
        self.state = Some(snapshots);
    }

    /// Discard any held generation.
    pub fn clear(&mut self) {
        self.state = None;
    }

    /// Take the held generation, leaving the manager empty.
    pub fn take(&mut self) -> Option<UndoState> {
        self.state.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_clears_the_generation() {
        let mut manager = UndoManager::new();
        assert!(!manager.has_pending());

        let mut snapshots = UndoState::new();
        snapshots.insert(PathBuf::from("a.txt"), "old".to_string());
        manager.publish(snapshots);
        assert!(manager.has_pending());

        let taken = manager.take().expect("Take snapshots");
        assert_eq!(taken.len(), 1);
        assert!(!manager.has_pending());
        assert!(manager.take().is_none());
    }

    #[test]
    fn publish_supersedes_previous_generation() {
        let mut manager = UndoManager::new();

        let mut first = UndoState::new();
        first.insert(PathBuf::from("a.txt"), "one".to_string());
        manager.publish(first);

        let mut second = UndoState::new();
        second.insert(PathBuf::from("b.txt"), "two".to_string());
        manager.publish(second);

        let taken = manager.take().expect("Take snapshots");
        assert!(taken.contains_key(&PathBuf::from("b.txt")));
        assert!(!taken.contains_key(&PathBuf::from("a.txt")));
    }
}
