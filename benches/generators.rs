use criterion::{criterion_group, criterion_main, Criterion};
use cpgen::random::seeded;
use cpgen::{gen_array, gen_connected_directed_graph, gen_tree, get_leaves};

fn bench_generators(c: &mut Criterion) {
    let mut rng = seeded(1);

    c.bench_function("gen_array_10k", |b| {
        b.iter(|| gen_array(&mut rng, 10_000, 1i64, 1_000_000_000, 3))
    });

    c.bench_function("gen_tree_10k", |b| b.iter(|| gen_tree(&mut rng, 10_000, 0)));

    c.bench_function("gen_tree_10k_chain", |b| {
        b.iter(|| gen_tree(&mut rng, 10_000, 1_000_000))
    });

    c.bench_function("gen_connected_directed_graph_10k", |b| {
        b.iter(|| gen_connected_directed_graph(&mut rng, 10_000, 30_000, 0))
    });

    let edges = gen_tree(&mut rng, 10_000, 0);
    c.bench_function("get_leaves_10k", |b| b.iter(|| get_leaves(&edges)));
}

criterion_group!(benches, bench_generators);
criterion_main!(benches);
