//! navscroll — demo mode.
//!
//! Drives a scripted navigation session against the in-memory router and a
//! shared viewport, printing the offsets the mechanism applies at each step.

use navscroll::host::router::MemoryRouter;
use navscroll::host::viewport::{MemoryViewport, SharedViewport, Viewport};
use navscroll::managers::navigation_classifier::{NavigationClassifier, NavigationClassifierTrait};
use navscroll::managers::scroll_history::{ScrollHistoryStore, ScrollHistoryTrait};
use navscroll::managers::scroll_restorer::{ScrollRestorer, ScrollRestorerTrait};
use navscroll::services::restore_service::RestoreService;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("navscroll=debug")),
        )
        .init();

    println!();
    println!("navscroll v{} — demo mode", env!("CARGO_PKG_VERSION"));
    println!("navigation-aware scroll position restoration");
    println!();

    demo_store();
    demo_classifier();
    demo_restorer();
    demo_service().await;
}

fn demo_store() {
    println!("--- scroll history store ---");
    let mut store = ScrollHistoryStore::with_capacity(3);
    store.record("/newsletters", 120);
    store.record("/analytics", 900);
    store.record("/newsletters", 340);
    store.record("/moderation", 55);
    println!(
        "  recorded 4 captures into a 3-slot store, retained {}",
        store.len()
    );
    println!(
        "  most_recent(/newsletters) = {:?} (oldest capture evicted)",
        store.most_recent("/newsletters")
    );
    println!(
        "  snapshot: {}",
        serde_json::to_string_pretty(&store.entries()).unwrap_or_default()
    );
    println!();
}

fn demo_classifier() {
    println!("--- navigation classifier ---");
    let mut classifier = NavigationClassifier::new();
    println!("  no signal      -> {:?}", classifier.classify_next());
    classifier.note_history_traversal();
    classifier.note_history_traversal();
    println!("  two signals    -> {:?}", classifier.classify_next());
    println!("  flag consumed  -> {:?}", classifier.classify_next());
    println!();
}

fn demo_restorer() {
    println!("--- scroll restorer ---");
    let mut restorer = ScrollRestorer::new(MemoryViewport::new());

    restorer.route_changed("/list");
    restorer.apply_pending();
    restorer.viewport_mut().set_scroll_offset(400);
    println!("  on /list, user scrolls to 400");

    restorer.route_changed("/detail");
    restorer.apply_pending();
    println!(
        "  fresh navigation to /detail -> offset {}",
        restorer.viewport().scroll_offset()
    );

    restorer.history_traversal();
    restorer.route_changed("/list");
    restorer.apply_pending();
    println!(
        "  back to /list -> offset {} restored",
        restorer.viewport().scroll_offset()
    );
    println!();
}

async fn demo_service() {
    println!("--- restore service ---");
    let mut viewport = SharedViewport::new();
    let mut router = MemoryRouter::new();
    let handle = RestoreService::spawn(viewport.clone());

    router.push("/newsletters");
    handle.route_changed("/newsletters").unwrap();
    settle().await;
    viewport.set_scroll_offset(640);
    println!("  on /newsletters, user scrolls to 640");

    router.push("/analytics");
    handle.route_changed("/analytics").unwrap();
    settle().await;
    println!(
        "  fresh navigation to /analytics -> offset {}",
        viewport.scroll_offset()
    );

    if let Some(path) = router.back().map(str::to_string) {
        handle.history_traversal().unwrap();
        handle.route_changed(&path).unwrap();
    }
    settle().await;
    println!(
        "  browser back to /newsletters -> offset {}",
        viewport.scroll_offset()
    );

    let store = handle.shutdown().await.unwrap();
    println!(
        "  shut down; store retained {} captures for a future mount",
        store.len()
    );
    println!();
}

/// Lets the service task drain its queue and apply deferred scrolls.
async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}
