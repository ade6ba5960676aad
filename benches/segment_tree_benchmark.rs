use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::Rng;
use rangelift::SegmentTree;

mod common;

fn bench_segment_tree(b: &mut Criterion) {
    let mut rng = rand::thread_rng();

    let mut group = b.benchmark_group("Segment Tree: Randomized Input");
    group.plot_config(common::plot_config());

    for l in common::SIZES {
        let mut tree = SegmentTree::new(0, l as i64 - 1, 0u64, |a: &u64, b: &u64| *a.max(b))
            .expect("non-empty interval");
        for (i, v) in common::fill_random_vec(&mut rng, l).into_iter().enumerate() {
            tree.update(i as i64, v).expect("index in bounds");
        }
        let capacity = tree.len() as i64;

        group.bench_with_input(BenchmarkId::new("query", l), &l, |b, _| {
            b.iter_batched(
                || {
                    let from = rng.gen_range(0..capacity);
                    let to = rng.gen_range(from..capacity);
                    (from, to)
                },
                |e| black_box(tree.query(e.0, e.1)),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("update", l), &l, |b, _| {
            b.iter_batched(
                || (rng.gen_range(0..capacity), rng.gen::<u64>()),
                |e| black_box(tree.update(e.0, e.1)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_segment_tree);
criterion_main!(benches);
