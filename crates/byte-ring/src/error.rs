//! Byte Ring Error Types

use thiserror::Error;

/// Errors reported by ring operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RingError {
    /// Write attempted with insufficient free space
    #[error("Write of {requested} bytes exceeds {free} free bytes")]
    Overflow { requested: usize, free: usize },

    /// Read attempted with insufficient buffered data
    #[error("Read of {requested} bytes exceeds {used} buffered bytes")]
    Underflow { requested: usize, used: usize },
}
