//! navscroll — navigation-aware scroll position restoration.
//!
//! On every client-side route change, decides between "fresh navigation"
//! (reset scroll to the top) and "back/forward restore" (reapply the offset
//! last seen on that path), using only two ambient host signals: a
//! path-change notification and a native back/forward notification. Scroll
//! history is held in a bounded in-memory log for the lifetime of the
//! process; nothing is persisted.

pub mod host;
pub mod managers;
pub mod services;
pub mod types;
