//! Frame Queue Demonstration Driver
//!
//! Fills a small queue past capacity to show oldest-first eviction, then
//! walks the two-phase consumption protocol (peek, then release).

use frame_queue::{FrameQueue, QueueConfig};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

const DEMO_CAPACITY: usize = 70;
const DEMO_SLOTS: usize = 5;
const DEMO_MESSAGE: &[u8] = b"Test Fifo Message!";

/// Initialize logging
fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Log a queue state snapshot
fn log_state(q: &FrameQueue) {
    info!(
        "queue state: {}/{} bytes used, {} free slots, front={} rear={}",
        q.used_bytes(),
        q.capacity(),
        q.free_slots(),
        q.front_slot(),
        q.rear_slot()
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!("=== Frame Queue Demo v{} ===", env!("CARGO_PKG_VERSION"));
    info!(
        "Creating queue: {} bytes, {} slots",
        DEMO_CAPACITY, DEMO_SLOTS
    );

    let mut queue = FrameQueue::new(QueueConfig {
        capacity: DEMO_CAPACITY,
        max_slots: DEMO_SLOTS,
    })?;
    log_state(&queue);

    // Each framed entry is 20 bytes, so a 70-byte ring holds three. The
    // fourth enqueue onward evicts the oldest frame.
    for round in 1..=6 {
        info!("Enqueue {}: {:?}", round, String::from_utf8_lossy(DEMO_MESSAGE));
        queue.enqueue(DEMO_MESSAGE)?;
        log_state(&queue);
    }

    info!("Peeking oldest frame (non-destructive)...");
    let frame = queue.dequeue()?;
    info!(
        "Dequeued {} bytes: {:?}",
        frame.len(),
        String::from_utf8_lossy(&frame)
    );
    log_state(&queue);

    info!("Discarding oldest frame...");
    queue.discard()?;
    log_state(&queue);

    info!(
        "Done: front={} rear={}, {} frames remain",
        queue.front_slot(),
        queue.rear_slot(),
        queue.len()
    );

    Ok(())
}
