use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rainbow_core::rng::RngHandle;
use rainbow_graph::{build_random_graph, get_bridges, get_diameter};

fn bridges_bench(c: &mut Criterion) {
    let mut rng = RngHandle::from_seed(7);
    let graph = build_random_graph(40, 0.1, &mut rng).unwrap();
    c.bench_function("bridges_gnp40", |b| {
        b.iter(|| black_box(get_bridges(&graph).unwrap()));
    });
    c.bench_function("diameter_gnp40", |b| {
        b.iter(|| black_box(get_diameter(&graph).unwrap()));
    });
}

criterion_group!(benches, bridges_bench);
criterion_main!(benches);
