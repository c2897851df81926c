use criterion::{criterion_group, criterion_main, Criterion};
use nucleus_core::random::create_rng;
use nucleus_core::WoodsSaxonNucleus;
use rand_distr::Distribution;
use std::hint::black_box;

fn bench_table_construction(c: &mut Criterion) {
    c.bench_function("woods_saxon_table_pb", |b| {
        b.iter(|| black_box(WoodsSaxonNucleus::new(208, 6.62, 0.546).radius()))
    });
}

fn bench_radial_draw(c: &mut Criterion) {
    let nucleus = WoodsSaxonNucleus::new(208, 6.62, 0.546);
    let mut rng = create_rng(7);

    c.bench_function("woods_saxon_radial_draw", |b| {
        b.iter(|| black_box(nucleus.sampler().sample(&mut rng)))
    });
}

criterion_group!(benches, bench_table_construction, bench_radial_draw);
criterion_main!(benches);
