//! Scroll Restorer for navscroll.
//!
//! The per-path-change orchestrator: captures the previous path's offset,
//! classifies the change via `NavigationClassifier`, and schedules a
//! deferred scroll application that the host runs on the next turn of its
//! event loop, once the new view's scrollable height exists.

use tracing::{debug, trace};

use crate::host::viewport::Viewport;
use crate::managers::navigation_classifier::{NavigationClassifier, NavigationClassifierTrait};
use crate::managers::scroll_history::{ScrollHistoryStore, ScrollHistoryTrait};
use crate::types::navigation::NavigationKind;

/// A scroll application scheduled for the next turn of the host event loop.
///
/// `generation` is the cancellation token: a superseding navigation replaces
/// the pending action wholesale, so only the latest generation ever runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingScroll {
    pub target: u32,
    pub generation: u64,
}

/// Trait defining the orchestration operations.
pub trait ScrollRestorerTrait {
    fn history_traversal(&mut self);
    fn route_changed(&mut self, new_path: &str) -> NavigationKind;
    fn apply_pending(&mut self);
    fn cancel_pending(&mut self);
    fn teardown(&mut self);
}

/// Ties the store and the classifier together and performs the scroll side
/// effects against the host viewport.
pub struct ScrollRestorer<V: Viewport> {
    store: ScrollHistoryStore,
    classifier: NavigationClassifier,
    viewport: V,
    previous_path: Option<String>,
    pending: Option<PendingScroll>,
    generation: u64,
}

impl<V: Viewport> ScrollRestorer<V> {
    /// Creates a restorer with a fresh store at the default capacity.
    pub fn new(viewport: V) -> Self {
        Self::with_store(viewport, ScrollHistoryStore::new())
    }

    /// Creates a restorer over an existing store, e.g. one recovered from a
    /// previous mount via [`into_store`](Self::into_store).
    pub fn with_store(viewport: V, store: ScrollHistoryStore) -> Self {
        Self {
            store,
            classifier: NavigationClassifier::new(),
            viewport,
            previous_path: None,
            pending: None,
            generation: 0,
        }
    }

    pub fn store(&self) -> &ScrollHistoryStore {
        &self.store
    }

    /// Releases the store so a remounted instance can resume with the same
    /// history.
    pub fn into_store(self) -> ScrollHistoryStore {
        self.store
    }

    pub fn previous_path(&self) -> Option<&str> {
        self.previous_path.as_deref()
    }

    /// The deferred action awaiting application, if any.
    pub fn pending(&self) -> Option<&PendingScroll> {
        self.pending.as_ref()
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }
}

impl<V: Viewport> ScrollRestorerTrait for ScrollRestorer<V> {
    /// Records a native back/forward signal; the next path change becomes a
    /// restore.
    fn history_traversal(&mut self) {
        self.classifier.note_history_traversal();
    }

    /// Handles a path change to `new_path`.
    ///
    /// Capture of the previous path's offset happens-before classification
    /// and scheduling. The classifier flag is consumed on every pass, even
    /// when the path did not actually change. Scheduling supersedes any
    /// outstanding pending action from a prior pass.
    fn route_changed(&mut self, new_path: &str) -> NavigationKind {
        if let Some(prev) = self.previous_path.as_deref() {
            if prev != new_path {
                let offset = self.viewport.scroll_offset();
                self.store.record(prev, offset);
            }
        }

        let kind = self.classifier.classify_next();
        let target = match kind {
            NavigationKind::Restore => self.store.most_recent(new_path).unwrap_or(0),
            NavigationKind::Fresh => 0,
        };

        if let Some(stale) = self.pending.take() {
            trace!(generation = stale.generation, "superseding pending scroll");
        }
        self.generation += 1;
        self.pending = Some(PendingScroll {
            target,
            generation: self.generation,
        });
        debug!(path = new_path, kind = ?kind, target_offset = target, "scheduled scroll");

        self.previous_path = Some(new_path.to_string());
        kind
    }

    /// Applies the outstanding deferred action, if any. Host calls this on
    /// the next turn of its event loop after a path change.
    fn apply_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.viewport.set_scroll_offset(pending.target);
        }
    }

    fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// Final capture at unmount: the current path's position is recorded so
    /// it is not lost, and any outstanding deferred action is cancelled.
    fn teardown(&mut self) {
        self.pending = None;
        if let Some(prev) = self.previous_path.take() {
            let offset = self.viewport.scroll_offset();
            self.store.record(&prev, offset);
            debug!(path = %prev, offset, "captured final position");
        }
    }
}
