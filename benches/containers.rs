//! Container benchmarks
//!
//! Compares the two hash table collision strategies, heap construction by
//! repeated insertion against bottom-up heapify, and AVL tree operations.
//!
//! ```bash
//! cargo bench --bench containers
//! ```

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::hint::black_box;

use classic_algos::{AvlTree, BinaryHeap, CollisionMethod, HashTable, HeapKind};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn shuffled(n: usize, seed: u64) -> Vec<u64> {
    let mut keys: Vec<u64> = (0..n as u64).collect();
    keys.shuffle(&mut StdRng::seed_from_u64(seed));
    keys
}

fn bench_hash_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_table");

    for &n in &SIZES {
        let keys = shuffled(n, 1);

        for (label, method) in [
            ("chaining", CollisionMethod::Chaining),
            ("linear_probing", CollisionMethod::LinearProbing),
        ] {
            group.bench_with_input(BenchmarkId::new(format!("insert_{label}"), n), &keys, |b, keys| {
                b.iter(|| {
                    let mut table = HashTable::with_method(method);
                    for &k in keys {
                        table.insert(k, k).unwrap();
                    }
                    black_box(table.len())
                });
            });

            let mut filled = HashTable::with_method(method);
            for &k in &keys {
                filled.insert(k, k).unwrap();
            }

            group.bench_with_input(BenchmarkId::new(format!("get_{label}"), n), &keys, |b, keys| {
                b.iter(|| keys.iter().filter(|k| filled.get(*k).is_some()).count());
            });

            group.bench_with_input(BenchmarkId::new(format!("delete_{label}"), n), &keys, |b, keys| {
                b.iter_batched(
                    || filled.clone(),
                    |mut table| {
                        for k in keys.iter().step_by(4) {
                            table.delete(k).unwrap();
                        }
                        table
                    },
                    BatchSize::LargeInput,
                );
            });
        }
    }

    group.finish();
}

fn bench_heap_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_heap");

    for &n in &SIZES {
        let values = shuffled(n, 2);

        group.bench_with_input(BenchmarkId::new("repeated_insert", n), &values, |b, values| {
            b.iter(|| {
                let mut heap = BinaryHeap::new(HeapKind::Min);
                for &v in values {
                    heap.insert(v);
                }
                black_box(heap.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("heapify", n), &values, |b, values| {
            b.iter_batched(
                || values.clone(),
                |values| BinaryHeap::from_vec(HeapKind::Min, values),
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("drain", n), &values, |b, values| {
            b.iter_batched(
                || BinaryHeap::from_vec(HeapKind::Max, values.clone()),
                |heap| heap.into_sorted_vec(),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_avl_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("avl_tree");

    for &n in &SIZES {
        let keys = shuffled(n, 3);

        group.bench_with_input(BenchmarkId::new("insert_random", n), &keys, |b, keys| {
            b.iter(|| keys.iter().copied().collect::<AvlTree<u64>>());
        });

        group.bench_with_input(BenchmarkId::new("insert_sorted", n), &n, |b, &n| {
            b.iter(|| (0..n as u64).collect::<AvlTree<u64>>());
        });

        let tree: AvlTree<u64> = keys.iter().copied().collect();
        group.bench_with_input(BenchmarkId::new("search", n), &keys, |b, keys| {
            b.iter(|| keys.iter().filter(|k| tree.search(*k)).count());
        });

        group.bench_with_input(BenchmarkId::new("delete_half", n), &keys, |b, keys| {
            b.iter_batched(
                || tree.clone(),
                |mut tree| {
                    for k in keys.iter().step_by(2) {
                        tree.delete(k);
                    }
                    tree
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hash_tables, bench_heap_construction, bench_avl_tree);
criterion_main!(benches);
