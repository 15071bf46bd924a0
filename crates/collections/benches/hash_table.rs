use collections::{HashTable, Sip};
use criterion::{Criterion, criterion_group, criterion_main};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn hash_table_benches(c: &mut Criterion) {
    let keys: Vec<String> = (0..ITEMS_AMOUNT).map(|i| format!("key-{i}")).collect();

    let mut group = c.benchmark_group("Chained hash table");
    group.sample_size(SAMPLE_SIZE);

    group.bench_function("djb2 insert", |b| {
        b.iter(|| {
            let mut table = HashTable::new(64).unwrap();
            for (i, key) in keys.iter().enumerate() {
                table.insert(key, i);
            }
            table
        });
    });

    let mut table = HashTable::new(64).unwrap();
    let mut sip_table = HashTable::with_hasher(64, Sip).unwrap();
    for (i, key) in keys.iter().enumerate() {
        table.insert(key, i);
        sip_table.insert(key, i);
    }

    group.bench_function("djb2 retrieve", |b| {
        b.iter(|| {
            for key in &keys {
                let _ = table.retrieve(key);
            }
        });
    });
    group.bench_function("sip retrieve", |b| {
        b.iter(|| {
            for key in &keys {
                let _ = sip_table.retrieve(key);
            }
        });
    });
    group.bench_function("resize", |b| {
        b.iter_batched(
            || {
                let mut t = HashTable::new(64).unwrap();
                for (i, key) in keys.iter().enumerate() {
                    t.insert(key, i);
                }
                t
            },
            |mut t| {
                t.resize();
                t
            },
            criterion::BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, hash_table_benches);

criterion_main!(benches);
