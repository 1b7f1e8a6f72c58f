use criterion::{criterion_group, criterion_main, Criterion};
use fichat_core::prelude::*;
use std::hint::black_box;
use std::sync::Arc;

fn bench_resolve(c: &mut Criterion) {
    let table = FiTable::load().expect("bundled dataset");
    let router = Router::with_defaults(Arc::new(table.clone()));

    c.bench_function("resolve_city_ratio", |b| {
        b.iter(|| {
            table.resolve(
                EntityKind::City,
                black_box("quezn city"),
                MatchPolicy::new(Scorer::Ratio, 80),
            )
        })
    });

    c.bench_function("resolve_city_partial_ratio", |b| {
        b.iter(|| {
            table.resolve(
                EntityKind::City,
                black_box("tell me about cebu city"),
                MatchPolicy::new(Scorer::PartialRatio, 90),
            )
        })
    });

    c.bench_function("route_unrecognized", |b| {
        b.iter(|| router.route(black_box("what is the weather like")))
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
