use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use lockstep::zip;

const SMALL: usize = 1 << 5;
const LARGE: usize = 1 << 16;

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");
    for n in [SMALL, LARGE] {
        let pos = vec![0.0f64; n];
        let vel = vec![0.0f64; n];
        group.bench_with_input(BenchmarkId::new("index", n), &n, |b, &n| {
            b.iter(|| {
                for i in 0..n {
                    black_box(pos[i]);
                    black_box(vel[i]);
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("zip", n), &n, |b, _| {
            b.iter(|| {
                for (p, v) in zip((&pos, &vel)) {
                    black_box(*p);
                    black_box(*v);
                }
            })
        });
    }
    group.finish();
}

fn bench_initialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("initialize");
    for n in [SMALL, LARGE] {
        let mut pos = vec![1.0f64; n];
        let mut vel = vec![1.0f64; n];
        group.bench_with_input(BenchmarkId::new("index", n), &n, |b, &n| {
            b.iter(|| {
                for i in 0..n {
                    pos[i] = black_box(0.0);
                    vel[i] = black_box(0.0);
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("zip", n), &n, |b, _| {
            b.iter(|| {
                for (p, v) in zip((&mut pos, &mut vel)) {
                    *p = black_box(0.0);
                    *v = black_box(0.0);
                }
            })
        });
    }
    group.finish();
}

fn bench_integrate(c: &mut Criterion) {
    let mut group = c.benchmark_group("pos_vel");
    let mut rng = rand::thread_rng();
    let dt = 0.06125;
    for n in [SMALL, LARGE] {
        let mut pos: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let vel: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
        group.bench_with_input(BenchmarkId::new("index", n), &n, |b, &n| {
            b.iter(|| {
                for i in 0..n {
                    pos[i] += black_box(vel[i] * dt);
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("zip", n), &n, |b, _| {
            b.iter(|| {
                for (p, v) in zip((&mut pos, &vel)) {
                    *p += black_box(*v * dt);
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_iterate, bench_initialize, bench_integrate);
criterion_main!(benches);
