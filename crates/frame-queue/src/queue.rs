//! Frame Queue Implementation

use byte_ring::ByteRing;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::QueueError;

/// Bytes of length prefix preceding each buffered payload
pub const FRAME_HEADER_LEN: usize = 2;

/// Queue configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Byte capacity of the backing ring (default: 1024)
    pub capacity: usize,
    /// Maximum number of concurrently buffered frames (default: 16)
    pub max_slots: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: 1024,
            max_slots: 16,
        }
    }
}

/// Length-framed message queue over a circular byte buffer
///
/// Each buffered frame occupies one slot and one contiguous ring region: a
/// 2-byte little-endian length prefix followed by the payload. Occupied
/// slots never reach `max_slots` — one slot stays reserved so that
/// `front == rear` always means empty, never full.
pub struct FrameQueue {
    /// Backing byte store, exclusively owned
    ring: ByteRing,
    /// Slot index of the oldest frame
    front: usize,
    /// Slot index one past the newest frame
    rear: usize,
    /// Slot count, immutable after construction
    max_slots: usize,
    /// Free slots remaining
    free_slots: usize,
}

impl FrameQueue {
    /// Create a queue from a validated configuration
    ///
    /// The capacity must hold at least a length prefix plus one payload
    /// byte, and `max_slots` must be at least 2 so the reserved slot can
    /// coexist with one buffered frame.
    pub fn new(config: QueueConfig) -> Result<Self, QueueError> {
        if config.capacity <= FRAME_HEADER_LEN || config.max_slots < 2 {
            return Err(QueueError::InvalidConfig {
                capacity: config.capacity,
                max_slots: config.max_slots,
            });
        }

        debug!(
            "Creating frame queue: {} bytes, {} slots",
            config.capacity, config.max_slots
        );
        Ok(Self {
            ring: ByteRing::new(config.capacity),
            front: 0,
            rear: 0,
            max_slots: config.max_slots,
            free_slots: config.max_slots,
        })
    }

    /// Check whether a frame of `pending_len` payload bytes cannot be
    /// accepted without eviction
    ///
    /// True when the framed size exceeds free byte space, or when taking
    /// one more slot would violate the reserved-slot rule.
    pub fn is_full(&self, pending_len: usize) -> bool {
        if pending_len + FRAME_HEADER_LEN > self.ring.free() {
            return true;
        }
        (self.rear + 1) % self.max_slots == self.front
    }

    /// Check whether no frame is buffered
    pub fn is_empty(&self) -> bool {
        self.ring.used() == 0 || self.front == self.rear
    }

    /// Buffer a frame, evicting the oldest frames if needed
    ///
    /// Never blocks: when space is short, oldest frames are discarded until
    /// the new one fits. Fails with [`QueueError::FrameTooLarge`] when the
    /// frame could not fit even in an empty queue; the queue is unchanged
    /// by the rejection.
    pub fn enqueue(&mut self, payload: &[u8]) -> Result<(), QueueError> {
        if payload.len() + FRAME_HEADER_LEN > self.ring.capacity()
            || payload.len() > u16::MAX as usize
        {
            return Err(QueueError::FrameTooLarge {
                len: payload.len(),
                capacity: self.ring.capacity(),
            });
        }

        // Each discard frees one slot and at least a header's worth of
        // bytes, so this terminates within max_slots iterations.
        while self.is_full(payload.len()) {
            warn!(
                "Evicting oldest frame: {} bytes pending, {} bytes free, {} slots free",
                payload.len() + FRAME_HEADER_LEN,
                self.ring.free(),
                self.free_slots
            );
            self.discard()?;
        }

        let header = (payload.len() as u16).to_le_bytes();
        self.ring.write_bulk(&header)?;
        self.ring.write_bulk(payload)?;

        self.rear = (self.rear + 1) % self.max_slots;
        self.free_slots -= 1;
        debug!(
            "Enqueued {} byte frame, {} slots occupied",
            payload.len(),
            self.len()
        );
        Ok(())
    }

    /// Read the oldest frame without removing it
    ///
    /// Repeated calls return the same frame until [`discard`] releases it.
    /// Callers inspect a frame this way before committing to remove it.
    ///
    /// [`discard`]: FrameQueue::discard
    pub fn dequeue(&self) -> Result<Vec<u8>, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }

        let header = self.ring.peek(0, FRAME_HEADER_LEN)?;
        let len = u16::from_le_bytes([header[0], header[1]]) as usize;
        Ok(self.ring.peek(FRAME_HEADER_LEN, len)?)
    }

    /// Remove the oldest frame, discarding its payload
    ///
    /// This is the sole eviction primitive: the victim is always the frame
    /// at `front`.
    pub fn discard(&mut self) -> Result<(), QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }

        let header = self.ring.read_bulk(FRAME_HEADER_LEN)?;
        let len = u16::from_le_bytes([header[0], header[1]]) as usize;
        self.ring.read_bulk(len)?;

        self.front = (self.front + 1) % self.max_slots;
        self.free_slots += 1;
        debug!("Discarded {} byte frame, {} slots occupied", len, self.len());
        Ok(())
    }

    /// Number of buffered frames
    pub fn len(&self) -> usize {
        self.max_slots - self.free_slots
    }

    /// Slot index of the oldest frame (diagnostic)
    pub fn front_slot(&self) -> usize {
        self.front
    }

    /// Slot index one past the newest frame (diagnostic)
    pub fn rear_slot(&self) -> usize {
        self.rear
    }

    /// Free slots remaining
    pub fn free_slots(&self) -> usize {
        self.free_slots
    }

    /// Maximum number of concurrently buffered frames
    pub fn max_slots(&self) -> usize {
        self.max_slots
    }

    /// Buffered bytes, headers included
    pub fn used_bytes(&self) -> usize {
        self.ring.used()
    }

    /// Free bytes remaining in the backing ring
    pub fn free_bytes(&self) -> usize {
        self.ring.free()
    }

    /// Byte capacity of the backing ring
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }
}
