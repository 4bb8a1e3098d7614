#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashSet;

use chainset::ChainedHashSet;
use criterion::{criterion_group, criterion_main, Criterion};
use proptest::{prelude::any, strategy::{Strategy, ValueTree}, test_runner::TestRunner};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn hash_set_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = proptest::collection::vec(any::<String>(), ITEMS_AMOUNT)
        .new_tree(&mut runner)
        .unwrap()
        .current();

    let mut group = c.benchmark_group("Hash set comparison benchmark");
    group.sample_size(SAMPLE_SIZE);
    group.bench_function("chainset add", |b| {
        b.iter(|| {
            let mut chained_set = ChainedHashSet::new();
            for item in items.clone() {
                chained_set.add(item);
            }
            chained_set
        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            let mut rust_set = HashSet::new();
            for item in items.clone() {
                rust_set.insert(item);
            }
            rust_set
        });
    });

    let chained_set: ChainedHashSet<String> = items.iter().cloned().collect();
    let rust_set: HashSet<String> = items.iter().cloned().collect();
    group.bench_function("chainset contains", |b| {
        b.iter(|| items.iter().filter(|item| chained_set.contains(item)).count());
    });
    group.bench_function("rust std contains", |b| {
        b.iter(|| items.iter().filter(|item| rust_set.contains(*item)).count());
    });
    group.finish();
}

criterion_group!(benches, hash_set_benches);

criterion_main!(benches);
