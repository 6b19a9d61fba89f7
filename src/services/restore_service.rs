//! Restore Service for navscroll.
//!
//! Runs the `ScrollRestorer` behind a single serial event loop: the router's
//! path-change notifications and the host's back/forward signals both
//! enqueue `NavigationEvent`s into one channel, so the two event sources
//! never race on shared state. The loop applies a scheduled scroll only when
//! no further event is already queued, which realizes the "next turn"
//! deferral and supersedes stale actions under rapid navigation.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::host::viewport::Viewport;
use crate::managers::scroll_history::ScrollHistoryStore;
use crate::managers::scroll_restorer::{ScrollRestorer, ScrollRestorerTrait};
use crate::types::errors::DispatchError;
use crate::types::navigation::NavigationEvent;

/// Clonable producer side of the service's event channel.
///
/// The route-change listener and the back/forward listener each hold their
/// own clone; both feed the same serial handler.
#[derive(Clone)]
pub struct NavigationEventSender {
    tx: UnboundedSender<NavigationEvent>,
}

impl NavigationEventSender {
    /// Reports that the active path changed to `path`.
    pub fn route_changed(&self, path: &str) -> Result<(), DispatchError> {
        self.tx
            .send(NavigationEvent::RouteChanged {
                path: path.to_string(),
            })
            .map_err(|_| DispatchError::ChannelClosed)
    }

    /// Reports a native back/forward action.
    pub fn history_traversal(&self) -> Result<(), DispatchError> {
        self.tx
            .send(NavigationEvent::HistoryTraversal)
            .map_err(|_| DispatchError::ChannelClosed)
    }
}

/// Handle to a spawned restore service.
pub struct RestoreServiceHandle {
    sender: NavigationEventSender,
    join: JoinHandle<ScrollHistoryStore>,
}

impl RestoreServiceHandle {
    /// Reports that the active path changed to `path`.
    pub fn route_changed(&self, path: &str) -> Result<(), DispatchError> {
        self.sender.route_changed(path)
    }

    /// Reports a native back/forward action.
    pub fn history_traversal(&self) -> Result<(), DispatchError> {
        self.sender.history_traversal()
    }

    /// A clonable sender for wiring separate host listeners.
    pub fn sender(&self) -> NavigationEventSender {
        self.sender.clone()
    }

    /// Stops the service: the loop captures the final position for the
    /// current path, then hands the store back for a later remount.
    pub async fn shutdown(self) -> Result<ScrollHistoryStore, DispatchError> {
        // Ignore a closed channel: the loop may already be draining.
        let _ = self.sender.tx.send(NavigationEvent::Teardown);
        self.join
            .await
            .map_err(|e| DispatchError::JoinFailed(e.to_string()))
    }
}

/// Factory for the serial restore loop.
pub struct RestoreService;

impl RestoreService {
    /// Spawns the service with a fresh store at the default capacity.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<V>(viewport: V) -> RestoreServiceHandle
    where
        V: Viewport + Send + 'static,
    {
        Self::spawn_with_store(viewport, ScrollHistoryStore::new())
    }

    /// Spawns the service over an existing store, e.g. one returned by a
    /// previous handle's [`shutdown`](RestoreServiceHandle::shutdown).
    pub fn spawn_with_store<V>(viewport: V, store: ScrollHistoryStore) -> RestoreServiceHandle
    where
        V: Viewport + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let restorer = ScrollRestorer::with_store(viewport, store);
        let join = tokio::spawn(run(restorer, rx));
        RestoreServiceHandle {
            sender: NavigationEventSender { tx },
            join,
        }
    }
}

/// The serial handler. Resolves to the store once torn down.
///
/// The select is biased toward the channel: a queued event always wins over
/// an outstanding pending scroll, so rapid sequential navigations supersede
/// the stale action before it can touch the viewport. With the channel idle,
/// the ready second branch applies the pending scroll on this turn.
async fn run<V: Viewport>(
    mut restorer: ScrollRestorer<V>,
    mut rx: UnboundedReceiver<NavigationEvent>,
) -> ScrollHistoryStore {
    loop {
        tokio::select! {
            biased;
            event = rx.recv() => match event {
                Some(NavigationEvent::RouteChanged { path }) => {
                    restorer.route_changed(&path);
                }
                Some(NavigationEvent::HistoryTraversal) => {
                    restorer.history_traversal();
                }
                // A dropped handle counts as unmount: same final capture.
                Some(NavigationEvent::Teardown) | None => {
                    restorer.teardown();
                    debug!("restore service stopped");
                    return restorer.into_store();
                }
            },
            _ = std::future::ready(()), if restorer.pending().is_some() => {
                restorer.apply_pending();
            }
        }
    }
}
