use serde::{Deserialize, Serialize};

/// A captured scroll offset for a visited path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScrollPositionRecord {
    /// Opaque identifier of a navigable location, as produced by the router.
    pub path: String,
    /// Vertical scroll distance in device pixels at the moment of capture.
    pub offset: u32,
    /// Millisecond timestamp; the store clamps these to be non-decreasing.
    pub recorded_at: u64,
}
