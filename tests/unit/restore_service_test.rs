use std::sync::{Arc, Mutex};

use navscroll::host::router::MemoryRouter;
use navscroll::host::viewport::Viewport;
use navscroll::managers::scroll_history::ScrollHistoryTrait;
use navscroll::services::restore_service::RestoreService;

/// Viewport that logs every write the service performs, so tests can tell a
/// superseded action from an applied one. `user_scroll` moves the offset the
/// way a user would, without touching the log.
#[derive(Clone, Default)]
struct LoggingViewport {
    inner: Arc<Mutex<ViewportState>>,
}

#[derive(Default)]
struct ViewportState {
    offset: u32,
    writes: Vec<u32>,
}

impl LoggingViewport {
    fn new() -> Self {
        Self::default()
    }

    fn user_scroll(&self, offset: u32) {
        self.inner.lock().unwrap().offset = offset;
    }

    fn writes(&self) -> Vec<u32> {
        self.inner.lock().unwrap().writes.clone()
    }
}

impl Viewport for LoggingViewport {
    fn scroll_offset(&self) -> u32 {
        self.inner.lock().unwrap().offset
    }

    fn set_scroll_offset(&mut self, offset: u32) {
        let mut state = self.inner.lock().unwrap();
        state.offset = offset;
        state.writes.push(offset);
    }
}

/// Lets the service task drain its queue and apply deferred scrolls.
async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn test_fresh_navigation_applies_scroll_to_top() {
    let viewport = LoggingViewport::new();
    let handle = RestoreService::spawn(viewport.clone());

    handle.route_changed("/inbox").unwrap();
    settle().await;
    assert_eq!(viewport.scroll_offset(), 0);
    assert_eq!(viewport.writes(), vec![0]);

    let _ = handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_back_navigation_restores_through_router() {
    let viewport = LoggingViewport::new();
    let mut router = MemoryRouter::new();
    let handle = RestoreService::spawn(viewport.clone());

    router.push("/list");
    handle.route_changed("/list").unwrap();
    settle().await;
    viewport.user_scroll(400);

    router.push("/detail");
    handle.route_changed("/detail").unwrap();
    settle().await;
    assert_eq!(viewport.scroll_offset(), 0);

    let back = router.back().map(str::to_string).unwrap();
    handle.history_traversal().unwrap();
    handle.route_changed(&back).unwrap();
    settle().await;
    assert_eq!(viewport.scroll_offset(), 400);

    let _ = handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rapid_navigation_applies_only_latest_target() {
    let viewport = LoggingViewport::new();
    let handle = RestoreService::spawn(viewport.clone());

    handle.route_changed("/a").unwrap();
    settle().await;
    viewport.user_scroll(100);
    handle.route_changed("/b").unwrap();
    settle().await;
    viewport.user_scroll(200);
    handle.route_changed("/c").unwrap();
    settle().await;
    assert_eq!(viewport.writes(), vec![0, 0, 0]);

    // Two back navigations land before the loop gets a turn: the /b restore
    // is superseded and only the /a restore may touch the viewport.
    handle.history_traversal().unwrap();
    handle.route_changed("/b").unwrap();
    handle.history_traversal().unwrap();
    handle.route_changed("/a").unwrap();
    settle().await;

    assert_eq!(viewport.writes(), vec![0, 0, 0, 100]);
    assert_eq!(viewport.scroll_offset(), 100);

    let _ = handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_shutdown_captures_final_position() {
    let viewport = LoggingViewport::new();
    let handle = RestoreService::spawn(viewport.clone());

    handle.route_changed("/current").unwrap();
    settle().await;
    viewport.user_scroll(250);

    let store = handle.shutdown().await.unwrap();
    assert_eq!(store.most_recent("/current"), Some(250));
}

#[tokio::test]
async fn test_remount_restores_from_recovered_store() {
    let viewport = LoggingViewport::new();
    let handle = RestoreService::spawn(viewport.clone());
    handle.route_changed("/dashboard").unwrap();
    settle().await;
    viewport.user_scroll(640);
    let store = handle.shutdown().await.unwrap();

    let viewport = LoggingViewport::new();
    let handle = RestoreService::spawn_with_store(viewport.clone(), store);
    handle.history_traversal().unwrap();
    handle.route_changed("/dashboard").unwrap();
    settle().await;
    assert_eq!(viewport.scroll_offset(), 640);

    let _ = handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_dispatch_after_shutdown_fails() {
    let viewport = LoggingViewport::new();
    let handle = RestoreService::spawn(viewport);
    let sender = handle.sender();

    let _ = handle.shutdown().await.unwrap();
    settle().await;

    assert!(sender.route_changed("/anywhere").is_err());
    assert!(sender.history_traversal().is_err());
}

#[tokio::test]
async fn test_traversal_signal_without_path_change_is_absorbed() {
    let viewport = LoggingViewport::new();
    let handle = RestoreService::spawn(viewport.clone());

    handle.route_changed("/list").unwrap();
    settle().await;
    viewport.user_scroll(300);
    handle.route_changed("/detail").unwrap();
    settle().await;

    // The host reports a traversal that its router swallows: no path change
    // follows. The next real forward navigation must still reset.
    handle.history_traversal().unwrap();
    handle.route_changed("/detail").unwrap();
    settle().await;

    handle.route_changed("/elsewhere").unwrap();
    settle().await;
    assert_eq!(viewport.scroll_offset(), 0);

    let store = handle.shutdown().await.unwrap();
    assert_eq!(store.most_recent("/list"), Some(300));
}
