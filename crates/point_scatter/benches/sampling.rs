mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use point_scatter::sampling::{
    Dimensions, JitterDistribution, PointSampling, PoissonDiskConfig, PoissonDiskSampling,
    UniformRandomSampling,
};

const DOMAIN: Dimensions = Dimensions::new(512, 512);
const MIN_DISTANCES: [f64; 5] = [32.0, 16.0, 8.0, 4.0, 2.0];
const PROBABILITIES: [f64; 3] = [0.01, 0.05, 0.25];

fn sampling_poisson_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling/poisson_disk");

    for &min_distance in &MIN_DISTANCES {
        let strategy =
            PoissonDiskSampling::try_new(PoissonDiskConfig::new(DOMAIN, min_distance)).unwrap();
        let mut rng_est = common::rng_for(0xBEEF, min_distance);
        let expected = strategy.sample(&mut rng_est).len();
        group.throughput(common::points_throughput(expected));

        let mut rng = common::rng_for(0xC0FFEE, min_distance);

        group.bench_with_input(
            BenchmarkId::from_parameter(min_distance),
            &min_distance,
            |b, _| {
                b.iter(|| {
                    let pts = strategy.sample(&mut rng);
                    black_box(pts.len());
                });
            },
        );
    }

    group.finish();
}

fn sampling_poisson_jitter_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling/poisson_disk_jitter");
    let jitter = JitterDistribution::try_new(1.0, 2.0)
        .unwrap()
        .with_clamp(-3.0, 3.0);

    for &min_distance in &MIN_DISTANCES[..3] {
        let strategy = PoissonDiskSampling::try_new(
            PoissonDiskConfig::new(DOMAIN, min_distance).with_jitter(jitter),
        )
        .unwrap();
        let mut rng = common::rng_for(0x7177E4, min_distance);

        group.bench_with_input(
            BenchmarkId::from_parameter(min_distance),
            &min_distance,
            |b, _| {
                b.iter(|| {
                    let pts = strategy.sample(&mut rng);
                    black_box(pts.len());
                });
            },
        );
    }

    group.finish();
}

fn sampling_uniform_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling/uniform_random");
    group.throughput(common::points_throughput(DOMAIN.area() as usize));

    for &probability in &PROBABILITIES {
        let strategy = UniformRandomSampling::try_new(DOMAIN, probability).unwrap();
        let mut rng = common::rng_for(0xA11CE, probability);

        group.bench_with_input(
            BenchmarkId::from_parameter(probability),
            &probability,
            |b, _| {
                b.iter(|| {
                    let pts = strategy.sample(&mut rng);
                    black_box(pts.len());
                });
            },
        );
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = sampling_poisson_benches, sampling_poisson_jitter_benches, sampling_uniform_benches
}
criterion_main!(benches);
