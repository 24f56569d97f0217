//! Frame Queue Throughput Benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use frame_queue::{FrameQueue, QueueConfig};

fn bench_enqueue_with_eviction(c: &mut Criterion) {
    let payload = [0x5Au8; 48];

    c.bench_function("enqueue_48b_evicting", |b| {
        let mut q = FrameQueue::new(QueueConfig {
            capacity: 512,
            max_slots: 8,
        })
        .unwrap();
        b.iter(|| q.enqueue(black_box(&payload)).unwrap());
    });
}

fn bench_dequeue_discard(c: &mut Criterion) {
    let payload = [0xA5u8; 48];

    c.bench_function("dequeue_then_discard_48b", |b| {
        let mut q = FrameQueue::new(QueueConfig {
            capacity: 512,
            max_slots: 8,
        })
        .unwrap();
        b.iter(|| {
            q.enqueue(black_box(&payload)).unwrap();
            let frame = q.dequeue().unwrap();
            q.discard().unwrap();
            black_box(frame)
        });
    });
}

criterion_group!(benches, bench_enqueue_with_eviction, bench_dequeue_discard);
criterion_main!(benches);
