use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mola_linked::{List, Queue, Stack};
use rand::prelude::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

const SAMPLE_SIZE: usize = 10_000;

fn queue_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue");
    group.throughput(Throughput::Elements(SAMPLE_SIZE as u64));

    group.bench_function(BenchmarkId::new("enqueue_dequeue", SAMPLE_SIZE), |b| {
        b.iter(|| {
            let mut queue = Queue::new();
            for i in 0..SAMPLE_SIZE {
                queue.enqueue(i).unwrap();
            }
            while let Some(v) = queue.dequeue() {
                black_box(v);
            }
        });
    });

    group.bench_function(BenchmarkId::new("interleaved", SAMPLE_SIZE), |b| {
        b.iter_with_setup(
            || StdRng::seed_from_u64(42),
            |mut rng| {
                let mut queue = Queue::new();
                for i in 0..SAMPLE_SIZE {
                    if rng.random_bool(0.6) {
                        queue.enqueue(i).unwrap();
                    } else {
                        black_box(queue.dequeue());
                    }
                }
            },
        );
    });

    group.finish();
}

fn stack_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack");
    group.throughput(Throughput::Elements(SAMPLE_SIZE as u64));

    group.bench_function(BenchmarkId::new("push_pop", SAMPLE_SIZE), |b| {
        b.iter(|| {
            let mut stack = Stack::new();
            for i in 0..SAMPLE_SIZE {
                stack.push(i).unwrap();
            }
            while let Some(v) = stack.pop() {
                black_box(v);
            }
        });
    });

    group.finish();
}

fn list_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("list");

    for size in [100usize, 1_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("find", size), |b| {
            let mut list = List::new();
            for i in 0..size {
                list.add_tail(i).unwrap();
            }
            let mut rng = StdRng::seed_from_u64(7);
            b.iter(|| {
                let key = rng.random_range(0..size);
                black_box(list.find(|v, k| v == k, &key).map(|n| *n));
            });
        });

        group.bench_function(BenchmarkId::new("delete_shuffled", size), |b| {
            b.iter_with_setup(
                || {
                    let mut list = List::new();
                    let mut handles: Vec<_> =
                        (0..size).map(|i| list.add_tail(i).unwrap()).collect();
                    handles.shuffle(&mut StdRng::seed_from_u64(size as u64));
                    (list, handles)
                },
                |(mut list, handles)| {
                    for handle in handles {
                        list.delete(handle).unwrap();
                    }
                    black_box(list.is_empty());
                },
            );
        });
    }

    group.finish();
}

criterion_group!(benches, queue_benchmark, stack_benchmark, list_benchmark);
criterion_main!(benches);
