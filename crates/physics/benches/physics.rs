use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use physics::{resolve_sphere_collision, Body, PhysicsSim, SimConfig, Vec3};

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");
    for per_axis in [2_usize, 4, 6] {
        let config = SimConfig {
            spheres_per_axis: per_axis,
            radius: 0.05,
            seed: Some(1),
            ..SimConfig::default()
        };
        let mut sim = PhysicsSim::from_config(&config).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(config.total_spheres()),
            &per_axis,
            |b, _| b.iter(|| sim.advance(1.0 / 60.0)),
        );
    }
    group.finish();
}

fn bench_resolver(c: &mut Criterion) {
    let a = Body::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.5, 0.0, 0.0), 0.2, 1.0);
    let b = Body::new(Vec3::new(1.0, 0.15, -0.1), Vec3::new(-1.0, 0.2, 0.3), 0.2, 1.0);
    c.bench_function("resolve_sphere_collision", |bench| {
        bench.iter(|| resolve_sphere_collision(0.95, &a, &b))
    });
}

criterion_group!(benches, bench_advance, bench_resolver);
criterion_main!(benches);
