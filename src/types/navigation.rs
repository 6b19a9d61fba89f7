use serde::{Deserialize, Serialize};

/// Classification of a single path change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationKind {
    /// Forward navigation to a new page; scroll resets to the origin.
    Fresh,
    /// Back/forward history traversal; a stored offset is reapplied if one exists.
    Restore,
}

/// Events consumed by the restore service's serial handler.
///
/// The router notification and the native back/forward signal are kept as
/// two distinct events; a `HistoryTraversal` with no subsequent path change
/// is legal and is absorbed by the next path-change pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    /// The active path changed to `path`.
    RouteChanged { path: String },
    /// The user performed a native back/forward action.
    HistoryTraversal,
    /// Final unmount: capture the current position, then stop.
    Teardown,
}
