use std::time::Duration;

use criterion::{Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(3);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

/// Throughput in produced points; never zero so criterion can report a rate.
pub fn points_throughput(points: usize) -> Throughput {
    Throughput::Elements(points.max(1) as u64)
}

/// Seeded RNG distinct per bench group and parameter.
pub fn rng_for(group_tag: u64, parameter: f64) -> StdRng {
    StdRng::seed_from_u64(group_tag ^ parameter.to_bits().rotate_left(17))
}
