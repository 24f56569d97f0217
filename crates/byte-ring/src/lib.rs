//! Fixed-Capacity Circular Byte Buffer
//!
//! Provides a bounded byte store with independent read/write cursors for
//! buffering variable-length data without dynamic allocation after setup.

mod error;
mod ring;

pub use error::RingError;
pub use ring::ByteRing;
