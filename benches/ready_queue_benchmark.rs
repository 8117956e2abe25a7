/*!
 * Ready Queue Benchmarks
 *
 * Insert and delete cost as the queue grows (both are linear scans)
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ready_queue::core::ProgramName;
use ready_queue::{ProcessSpec, ReadyQueue};

fn filled(len: i32) -> ReadyQueue {
    let mut queue = ReadyQueue::with_capacity(len as usize);
    for id in 0..len {
        let spec = ProcessSpec::new(id, ProgramName::new("bench").unwrap(), 0, id % 16, 1);
        queue.insert(spec.arrive(0)).unwrap();
    }
    queue
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for len in [16, 256, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                || filled(len),
                |mut queue| {
                    let spec = ProcessSpec::new(len, ProgramName::new("new").unwrap(), 0, 8, 1);
                    queue.insert(black_box(spec.arrive(0))).unwrap();
                    queue
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete");

    for len in [16, 256, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                || filled(len),
                |mut queue| {
                    queue.delete(black_box(len / 2)).unwrap();
                    queue
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_find_missing(c: &mut Criterion) {
    let queue = filled(4096);
    c.bench_function("find_missing_4096", |b| {
        b.iter(|| black_box(queue.find(black_box(-1))))
    });
}

criterion_group!(benches, bench_insert, bench_delete, bench_find_missing);
criterion_main!(benches);
