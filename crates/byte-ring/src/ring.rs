//! Circular Byte Buffer Implementation

use crate::RingError;

/// Fixed-capacity circular byte store
///
/// Maintains independent read and write cursors plus an explicit free-byte
/// counter, so `free() + used() == capacity()` holds at all times. Storage is
/// bound once at construction and never resized.
pub struct ByteRing {
    /// Pre-allocated storage, exclusively owned
    storage: Box<[u8]>,
    /// Capacity in bytes
    capacity: usize,
    /// Write position (next byte stored here)
    write_cursor: usize,
    /// Read position (next byte consumed from here)
    read_cursor: usize,
    /// Free bytes remaining
    free: usize,
}

impl ByteRing {
    /// Create a new ring with zeroed storage of the given capacity
    pub fn new(capacity: usize) -> Self {
        Self::from_storage(vec![0u8; capacity].into_boxed_slice())
    }

    /// Create a ring bound to caller-supplied storage
    pub fn from_storage(storage: Box<[u8]>) -> Self {
        let capacity = storage.len();
        Self {
            storage,
            capacity,
            write_cursor: 0,
            read_cursor: 0,
            free: capacity,
        }
    }

    /// Store one byte at the write cursor
    pub fn write_byte(&mut self, byte: u8) -> Result<(), RingError> {
        if self.free == 0 {
            return Err(RingError::Overflow {
                requested: 1,
                free: 0,
            });
        }

        self.storage[self.write_cursor] = byte;
        self.write_cursor = (self.write_cursor + 1) % self.capacity;
        self.free -= 1;
        Ok(())
    }

    /// Consume one byte from the read cursor
    pub fn read_byte(&mut self) -> Result<u8, RingError> {
        if self.used() == 0 {
            return Err(RingError::Underflow {
                requested: 1,
                used: 0,
            });
        }

        let byte = self.storage[self.read_cursor];
        self.read_cursor = (self.read_cursor + 1) % self.capacity;
        self.free += 1;
        Ok(byte)
    }

    /// Store a slice of bytes, all or nothing
    ///
    /// Fails without writing anything when the slice exceeds free space.
    pub fn write_bulk(&mut self, bytes: &[u8]) -> Result<(), RingError> {
        if bytes.len() > self.free {
            return Err(RingError::Overflow {
                requested: bytes.len(),
                free: self.free,
            });
        }

        for &byte in bytes {
            self.storage[self.write_cursor] = byte;
            self.write_cursor = (self.write_cursor + 1) % self.capacity;
        }
        self.free -= bytes.len();
        Ok(())
    }

    /// Consume `len` bytes, all or nothing
    ///
    /// Fails without consuming anything when fewer than `len` bytes are
    /// buffered.
    pub fn read_bulk(&mut self, len: usize) -> Result<Vec<u8>, RingError> {
        if len > self.used() {
            return Err(RingError::Underflow {
                requested: len,
                used: self.used(),
            });
        }

        let mut out = Vec::with_capacity(len);
        for _ in 0..len {
            out.push(self.storage[self.read_cursor]);
            self.read_cursor = (self.read_cursor + 1) % self.capacity;
        }
        self.free += len;
        Ok(out)
    }

    /// Copy `len` bytes starting `offset` positions ahead of the read cursor
    ///
    /// Does not move the read cursor or change the free count. Fails when
    /// `offset + len` exceeds the buffered byte count.
    pub fn peek(&self, offset: usize, len: usize) -> Result<Vec<u8>, RingError> {
        if offset + len > self.used() {
            return Err(RingError::Underflow {
                requested: offset + len,
                used: self.used(),
            });
        }

        let mut cursor = (self.read_cursor + offset) % self.capacity;
        let mut out = Vec::with_capacity(len);
        for _ in 0..len {
            out.push(self.storage[cursor]);
            cursor = (cursor + 1) % self.capacity;
        }
        Ok(out)
    }

    /// Number of buffered bytes
    pub fn used(&self) -> usize {
        self.capacity - self.free
    }

    /// Number of free bytes
    pub fn free(&self) -> usize {
        self.free
    }

    /// Total byte capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check if no bytes are buffered
    pub fn is_empty(&self) -> bool {
        self.free == self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_write_then_read_single_bytes() {
        let mut ring = ByteRing::new(4);

        ring.write_byte(0xAA).unwrap();
        ring.write_byte(0xBB).unwrap();
        assert_eq!(ring.used(), 2);
        assert_eq!(ring.free(), 2);

        assert_eq!(ring.read_byte().unwrap(), 0xAA);
        assert_eq!(ring.read_byte().unwrap(), 0xBB);
        assert!(ring.is_empty());
    }

    #[test]
    fn test_overflow_when_full() {
        let mut ring = ByteRing::new(2);
        ring.write_byte(1).unwrap();
        ring.write_byte(2).unwrap();

        assert_eq!(
            ring.write_byte(3),
            Err(RingError::Overflow {
                requested: 1,
                free: 0
            })
        );
        // Contents untouched by the failed write
        assert_eq!(ring.peek(0, 2).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_underflow_when_empty() {
        let mut ring = ByteRing::new(2);
        assert_eq!(
            ring.read_byte(),
            Err(RingError::Underflow {
                requested: 1,
                used: 0
            })
        );
    }

    #[test]
    fn test_bulk_write_is_atomic() {
        let mut ring = ByteRing::new(4);
        ring.write_bulk(&[1, 2, 3]).unwrap();

        let err = ring.write_bulk(&[4, 5]).unwrap_err();
        assert_eq!(
            err,
            RingError::Overflow {
                requested: 2,
                free: 1
            }
        );
        // Nothing was written by the failed call
        assert_eq!(ring.used(), 3);
        assert_eq!(ring.read_bulk(3).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_bulk_read_is_atomic() {
        let mut ring = ByteRing::new(4);
        ring.write_bulk(&[1, 2]).unwrap();

        let err = ring.read_bulk(3).unwrap_err();
        assert_eq!(
            err,
            RingError::Underflow {
                requested: 3,
                used: 2
            }
        );
        assert_eq!(ring.used(), 2);
    }

    #[test]
    fn test_wraparound_preserves_logical_order() {
        // Cursors land on index 8 after 8 writes and 8 reads, so the next
        // 6 bytes occupy indices 8, 9, 0, 1, 2, 3.
        let mut ring = ByteRing::new(10);
        ring.write_bulk(&[0, 1, 2, 3, 4, 5, 6, 7]).unwrap();
        assert_eq!(ring.read_bulk(8).unwrap(), vec![0, 1, 2, 3, 4, 5, 6, 7]);

        ring.write_bulk(&[10, 11, 12, 13, 14, 15]).unwrap();
        assert_eq!(ring.used(), 6);

        // Peek sees the logical order across the physical wrap
        assert_eq!(ring.peek(0, 6).unwrap(), vec![10, 11, 12, 13, 14, 15]);
        assert_eq!(ring.peek(2, 4).unwrap(), vec![12, 13, 14, 15]);

        // Destructive read agrees
        assert_eq!(ring.read_bulk(6).unwrap(), vec![10, 11, 12, 13, 14, 15]);
        assert!(ring.is_empty());
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut ring = ByteRing::new(8);
        ring.write_bulk(&[9, 8, 7]).unwrap();

        assert_eq!(ring.peek(0, 3).unwrap(), vec![9, 8, 7]);
        assert_eq!(ring.peek(0, 3).unwrap(), vec![9, 8, 7]);
        assert_eq!(ring.used(), 3);
        assert_eq!(ring.free(), 5);
    }

    #[test]
    fn test_peek_out_of_range() {
        let mut ring = ByteRing::new(8);
        ring.write_bulk(&[1, 2]).unwrap();

        assert!(ring.peek(0, 3).is_err());
        assert!(ring.peek(2, 1).is_err());
        assert!(ring.peek(1, 1).is_ok());
    }

    proptest! {
        #[test]
        fn prop_free_plus_used_equals_capacity(
            capacity in 1usize..64,
            ops in proptest::collection::vec((any::<bool>(), any::<u8>()), 0..256),
        ) {
            let mut ring = ByteRing::new(capacity);
            for (is_write, byte) in ops {
                if is_write {
                    let _ = ring.write_byte(byte);
                } else {
                    let _ = ring.read_byte();
                }
                prop_assert_eq!(ring.free() + ring.used(), ring.capacity());
            }
        }

        #[test]
        fn prop_fifo_order_preserved(
            data in proptest::collection::vec(any::<u8>(), 1..32),
        ) {
            let mut ring = ByteRing::new(data.len());
            ring.write_bulk(&data).unwrap();
            prop_assert_eq!(ring.read_bulk(data.len()).unwrap(), data);
        }
    }
}
