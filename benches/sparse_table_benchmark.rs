use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::Rng;
use rangelift::SparseTable;

mod common;

fn bench_sparse_table(b: &mut Criterion) {
    let mut rng = rand::thread_rng();

    let mut group = b.benchmark_group("Sparse Table: Randomized Input");
    group.plot_config(common::plot_config());

    for l in common::SIZES {
        let table =
            SparseTable::new(common::fill_random_vec(&mut rng, l)).expect("non-empty input");

        group.bench_with_input(BenchmarkId::new("query", l), &l, |b, _| {
            b.iter_batched(
                || {
                    let begin = rng.gen_range(1..=table.len());
                    let end = rng.gen_range(begin..=table.len());
                    (begin, end)
                },
                |e| black_box(table.query(e.0, e.1)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sparse_table);
criterion_main!(benches);
