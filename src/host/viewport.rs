//! Viewport scroll accessors for navscroll.
//!
//! The host exposes the page's vertical scroll offset through the `Viewport`
//! trait; implementations here cover in-process use, sharing across the
//! service task boundary, and degraded hosts with no scrollable surface.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Synchronous, total access to the host's vertical scroll offset.
pub trait Viewport {
    /// Current vertical scroll offset in device pixels.
    fn scroll_offset(&self) -> u32;
    /// Sets the vertical scroll offset in device pixels.
    fn set_scroll_offset(&mut self, offset: u32);
}

/// Plain in-memory viewport.
#[derive(Debug, Default)]
pub struct MemoryViewport {
    offset: u32,
}

impl MemoryViewport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Viewport for MemoryViewport {
    fn scroll_offset(&self) -> u32 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: u32) {
        self.offset = offset;
    }
}

/// Viewport backed by an atomic cell; clones observe the same offset.
///
/// Lets the host keep a handle to the offset while the restore service owns
/// the other clone on its task.
#[derive(Debug, Clone, Default)]
pub struct SharedViewport {
    offset: Arc<AtomicU32>,
}

impl SharedViewport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Viewport for SharedViewport {
    fn scroll_offset(&self) -> u32 {
        self.offset.load(Ordering::SeqCst)
    }

    fn set_scroll_offset(&mut self, offset: u32) {
        self.offset.store(offset, Ordering::SeqCst);
    }
}

/// Degraded host with no scrollable surface: reads 0, ignores writes.
///
/// Scroll restoration is a UX nicety; with this viewport the mechanism
/// degrades to doing nothing rather than interrupting navigation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopViewport;

impl Viewport for NoopViewport {
    fn scroll_offset(&self) -> u32 {
        0
    }

    fn set_scroll_offset(&mut self, _offset: u32) {}
}
