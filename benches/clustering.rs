use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dbscan1d::cluster::{ClusterItem, Dbscan1d};
use rand::prelude::*;

fn bench_dbscan(c: &mut Criterion) {
    let mut group = c.benchmark_group("dbscan1d");

    // Generate synthetic data: a few dense bands plus uniform background.
    let mut rng = StdRng::seed_from_u64(42);
    let n = 2000;
    let centers = [0.0, 25.0, 60.0, 90.0];

    let values: Vec<f64> = (0..n)
        .map(|i| {
            if i % 5 == 0 {
                rng.random::<f64>() * 100.0
            } else {
                centers[i % centers.len()] + rng.random::<f64>() * 2.0
            }
        })
        .collect();

    group.bench_function("run_n2000_eps0.5_min5", |b| {
        b.iter(|| {
            let mut items: Vec<ClusterItem> =
                values.iter().map(|&v| ClusterItem::from_value(v)).collect();
            let mut engine = Dbscan1d::new(0.5, 5).engine(black_box(&mut items));
            engine.run();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_dbscan);
criterion_main!(benches);
