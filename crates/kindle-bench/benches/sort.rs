use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use kindle_bench::{quicksort, random_data, XorShift32};

fn bench_sorts(c: &mut Criterion) {
    let mut rng = XorShift32::new(0xC0FFEE);
    let data = random_data(10_000, &mut rng);

    let mut group = c.benchmark_group("sort 10k");

    group.bench_function("quicksort", |b| {
        b.iter_batched(
            || data.clone(),
            |mut v| {
                quicksort(&mut v);
                black_box(v)
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("sort_unstable", |b| {
        b.iter_batched(
            || data.clone(),
            |mut v| {
                v.sort_unstable();
                black_box(v)
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_sorts);
criterion_main!(benches);
