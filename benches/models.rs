use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use undecidable::machine;
use undecidable::model::Model;

fn bench_models(c: &mut Criterion) {
    c.bench_function("qn_tan2_sin", |b| {
        b.iter(|| Model::QnTan2Sin.eval_at(black_box(0.25)))
    });

    c.bench_function("machine_run_default", |b| {
        b.iter(|| machine::run(black_box(&[-1.0, 0.0, 1.0]), 3))
    });
}

criterion_group!(benches, bench_models);
criterion_main!(benches);
