//! Scroll History Store for navscroll.
//!
//! Implements `ScrollHistoryTrait` — a bounded, append-only log of
//! `(path, offset)` captures, newest-first lookup, FIFO eviction.

use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::scroll::ScrollPositionRecord;

/// Default bound on the number of retained records.
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// Trait defining scroll history operations.
pub trait ScrollHistoryTrait {
    fn record(&mut self, path: &str, offset: u32);
    fn most_recent(&self, path: &str) -> Option<u32>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
    fn capacity(&self) -> usize;
    fn clear(&mut self);
    fn entries(&self) -> Vec<&ScrollPositionRecord>;
}

/// In-memory bounded FIFO log of scroll position captures.
///
/// A log rather than a per-path map: revisits append fresh records, and the
/// capacity bound ages stale entries out of long sessions without a separate
/// LRU/TTL policy. Lookups scan newest-first, so they always resolve to the
/// most recent capture for a path.
pub struct ScrollHistoryStore {
    records: VecDeque<ScrollPositionRecord>,
    max_records: usize,
    last_stamp: u64,
}

impl ScrollHistoryStore {
    /// Creates a store with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_HISTORY)
    }

    /// Creates a store bounded to `max_records` entries (minimum 1).
    pub fn with_capacity(max_records: usize) -> Self {
        Self {
            records: VecDeque::new(),
            max_records: max_records.max(1),
            last_stamp: 0,
        }
    }

    /// Returns the current UNIX timestamp in milliseconds.
    fn now_millis() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }

    /// Next record stamp, clamped so stamps never decrease across captures.
    fn next_stamp(&mut self) -> u64 {
        let stamp = Self::now_millis().max(self.last_stamp);
        self.last_stamp = stamp;
        stamp
    }
}

impl Default for ScrollHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollHistoryTrait for ScrollHistoryStore {
    /// Appends a capture for `path`. If the bound is exceeded, the single
    /// oldest record is evicted. Never fails.
    fn record(&mut self, path: &str, offset: u32) {
        let recorded_at = self.next_stamp();
        self.records.push_back(ScrollPositionRecord {
            path: path.to_string(),
            offset,
            recorded_at,
        });
        if self.records.len() > self.max_records {
            self.records.pop_front();
        }
    }

    /// Returns the most recently recorded offset for `path`, regardless of
    /// how many other paths were visited in between.
    fn most_recent(&self, path: &str) -> Option<u32> {
        self.records
            .iter()
            .rev()
            .find(|r| r.path == path)
            .map(|r| r.offset)
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn capacity(&self) -> usize {
        self.max_records
    }

    fn clear(&mut self) {
        self.records.clear();
    }

    /// Retained records in insertion order (oldest first).
    fn entries(&self) -> Vec<&ScrollPositionRecord> {
        self.records.iter().collect()
    }
}
