use std::fmt;

// === DispatchError ===

/// Errors related to dispatching navigation events to the restore service.
///
/// The core state machine itself is total and never fails; the only fallible
/// surface is the boundary between the host and the service's event loop.
#[derive(Debug)]
pub enum DispatchError {
    /// The restore service's event loop is no longer running.
    ChannelClosed,
    /// The restore service task terminated without handing its store back.
    JoinFailed(String),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::ChannelClosed => write!(f, "Restore service stopped"),
            DispatchError::JoinFailed(msg) => write!(f, "Restore service join failed: {}", msg),
        }
    }
}

impl std::error::Error for DispatchError {}
