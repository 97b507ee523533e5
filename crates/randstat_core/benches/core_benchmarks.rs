//! Criterion benchmarks for randstat_core numerical kernels.
//!
//! Measures performance of the special-function kernels and the
//! Gauss–Legendre engine across representative orders to characterise
//! scaling behaviour.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use randstat_core::math::quadrature::GaussLegendre;
use randstat_core::math::special::{incomplete_beta, inverse_incomplete_beta, ln_gamma};

/// Benchmark log-gamma across the reflection and asymptotic branches.
fn bench_ln_gamma(c: &mut Criterion) {
    let mut group = c.benchmark_group("ln_gamma");

    for x in [0.3, 2.5, 50.0] {
        group.bench_with_input(BenchmarkId::from_parameter(x), &x, |b, &x| {
            b.iter(|| ln_gamma(black_box(x)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the incomplete beta continued fraction and its inverse.
fn bench_incomplete_beta(c: &mut Criterion) {
    let mut group = c.benchmark_group("incomplete_beta");

    for (x, a, b_param) in [(0.2, 2.0, 5.0), (0.5, 0.5, 0.5), (0.9, 8.0, 3.0)] {
        group.bench_with_input(
            BenchmarkId::new("forward", format!("x{}_a{}_b{}", x, a, b_param)),
            &(x, a, b_param),
            |bench, &(x, a, b_param)| {
                bench.iter(|| incomplete_beta(black_box(x), black_box(a), black_box(b_param)));
            },
        );
    }

    group.bench_function("inverse", |bench| {
        bench.iter(|| inverse_incomplete_beta(black_box(0.3), black_box(2.0), black_box(5.0)));
    });

    group.finish();
}

/// Benchmark Gauss–Legendre table construction and integration.
fn bench_gauss_legendre(c: &mut Criterion) {
    let mut group = c.benchmark_group("gauss_legendre");

    for n in [5, 20, 64] {
        group.bench_with_input(BenchmarkId::new("construction", n), &n, |b, &n| {
            b.iter(|| GaussLegendre::new(black_box(n)).unwrap());
        });

        let table = GaussLegendre::new(n).unwrap();
        group.bench_with_input(BenchmarkId::new("integrate", n), &table, |b, table| {
            let pdf = |x: f64| (-x * x / 2.0).exp() / (2.0 * std::f64::consts::PI).sqrt();
            b.iter(|| table.integrate(pdf, black_box(-10.0), black_box(10.0)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_ln_gamma,
    bench_incomplete_beta,
    bench_gauss_legendre
);
criterion_main!(benches);
