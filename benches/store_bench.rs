//! Benchmarks for append and scan paths

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use shardkv::{Record, Store};

fn bench_encode(c: &mut Criterion) {
    let record = Record::insert("benchmark-key", 42);
    c.bench_function("record_encode", |b| {
        b.iter(|| record.encode().unwrap());
    });
}

fn bench_insert(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open_path(dir.path()).unwrap();

    let mut i = 0i32;
    c.bench_function("store_insert", |b| {
        b.iter(|| {
            store.insert(b"bench", i).unwrap();
            i = i.wrapping_add(1);
        });
    });
}

fn bench_find(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open_path(dir.path()).unwrap();

    // a query replays the whole bucket, so preload realistic history
    for i in 0..10_000 {
        let key = format!("key-{}", i % 100);
        store.insert(key.as_bytes(), i).unwrap();
    }

    c.bench_function("store_find_10k_records", |b| {
        b.iter_batched(
            || (),
            |_| store.find(b"key-42").unwrap(),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_encode, bench_insert, bench_find);
criterion_main!(benches);
