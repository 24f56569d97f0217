//! Length-Framed Message Queue
//!
//! Buffers variable-length frames in a bounded byte region. Each frame is
//! stored as a 2-byte little-endian length prefix followed by its payload.
//! When a new frame does not fit, the oldest buffered frames are evicted to
//! make room: producers are never blocked, at the cost of history.

mod error;
mod queue;

pub use error::QueueError;
pub use queue::{FrameQueue, QueueConfig, FRAME_HEADER_LEN};
