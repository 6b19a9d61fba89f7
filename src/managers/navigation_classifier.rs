//! Navigation Classifier for navscroll.
//!
//! Decides, for each path change, whether to restore a previous offset or
//! reset to the top, based on whether a native back/forward signal preceded
//! the change.

use crate::types::navigation::NavigationKind;

/// Trait defining navigation classification operations.
pub trait NavigationClassifierTrait {
    fn note_history_traversal(&mut self);
    fn classify_next(&mut self) -> NavigationKind;
    fn has_pending_restore(&self) -> bool;
}

/// Single-flag classifier over the host's back/forward signal.
pub struct NavigationClassifier {
    pending_restore: bool,
}

impl NavigationClassifier {
    pub fn new() -> Self {
        Self {
            pending_restore: false,
        }
    }
}

impl Default for NavigationClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationClassifierTrait for NavigationClassifier {
    /// Flags the next path change as a restore. Idempotent: repeated signals
    /// before a path change collapse into a single pending restore.
    fn note_history_traversal(&mut self) {
        self.pending_restore = true;
    }

    /// Consumes the pending flag into a classification.
    ///
    /// Must be called exactly once per path-change pass, even when the pass
    /// takes no other action, so a stale flag cannot leak into an unrelated
    /// later navigation.
    fn classify_next(&mut self) -> NavigationKind {
        let kind = if self.pending_restore {
            NavigationKind::Restore
        } else {
            NavigationKind::Fresh
        };
        self.pending_restore = false;
        kind
    }

    /// Returns whether a restore is pending, without consuming it.
    fn has_pending_restore(&self) -> bool {
        self.pending_restore
    }
}
