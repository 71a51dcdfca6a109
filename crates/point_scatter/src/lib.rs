#![forbid(unsafe_code)]
//! point_scatter: Blue-noise and uniform point sampling over integer domains.
//!
//! Modules:
//! - sampling: strategies (Poisson disk, uniform random) and their building blocks
//! - spawn: data-driven spawn rules answering "place an object here?"
//! - schedule: tick counter and periodic resampling driver
//!
//! All randomness is injected by the caller, so seeded generators give reproducible output.
pub mod error;
pub mod sampling;
pub mod schedule;
pub mod spawn;

/// Convenient re-exports for common types. Import with `use point_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::sampling::{
        sample_frames, Dimensions, JitterClamp, JitterDistribution, PointSampling,
        PoissonDiskConfig, PoissonDiskSampling, Sampler, UniformRandomSampling,
        DEFAULT_MAX_TRIES,
    };
    pub use crate::schedule::{Resampler, TickCounter};
    pub use crate::spawn::{ObjectSpawner, SpawnMode, SpawnRule};
}
