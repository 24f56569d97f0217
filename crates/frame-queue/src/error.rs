//! Frame Queue Error Types

use byte_ring::RingError;
use thiserror::Error;

/// Errors reported by queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// Rejected configuration at construction
    #[error("Invalid config: capacity {capacity} bytes, {max_slots} slots")]
    InvalidConfig { capacity: usize, max_slots: usize },

    /// Frame can never fit, even in an empty queue
    #[error("Frame of {len} bytes plus header exceeds capacity {capacity}")]
    FrameTooLarge { len: usize, capacity: usize },

    /// No frame is buffered
    #[error("Queue is empty")]
    Empty,

    /// Byte-level ring failure
    #[error(transparent)]
    Ring(#[from] RingError),
}
