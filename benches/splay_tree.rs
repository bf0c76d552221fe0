use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use splay_collections::SplayTree;
use std::collections::BTreeMap;

const NUM_OF_OPERATIONS: usize = 100;

fn bench_btreemap_insert(c: &mut Criterion) {
    c.bench_function("bench btreemap insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut map = BTreeMap::new();
            for _ in 0..NUM_OF_OPERATIONS {
                let key = rng.next_u32();
                let val = rng.next_u32();

                map.insert(key, val);
            }
        })
    });
}

fn bench_btreemap_get(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = BTreeMap::new();
    let mut values = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        let val = rng.next_u32();

        map.insert(key, val);
        values.push(key);
    }

    c.bench_function("bench btreemap get", move |b| {
        b.iter(|| {
            for key in &values {
                black_box(map.get(key));
            }
        })
    });
}

fn bench_splay_tree_insert(c: &mut Criterion) {
    c.bench_function("bench splay_tree insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut tree: SplayTree<u32, u32> = SplayTree::natural();
            for _ in 0..NUM_OF_OPERATIONS {
                tree.insert(rng.next_u32());
            }
        })
    });
}

fn bench_splay_tree_find(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree: SplayTree<u32, u32> = SplayTree::natural();
    let mut values = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();

        tree.insert(key);
        values.push(key);
    }

    c.bench_function("bench splay_tree find", move |b| {
        b.iter(|| {
            for key in &values {
                black_box(tree.contains_key(key));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_btreemap_get,
    bench_btreemap_insert,
    bench_splay_tree_find,
    bench_splay_tree_insert,
);
criterion_main!(benches);
