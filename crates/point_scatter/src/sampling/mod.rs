//! Sampling strategies for generating point sets over an integer domain.
//!
//! Every strategy implements [`PointSampling`]: given the [`Dimensions`] it was built
//! for and a caller-supplied RNG, it produces an unordered set of integer points inside
//! `[0, width) x [0, height)`. The building blocks of the blue-noise sampler
//! ([`RandomQueue`], [`SpatialGrid`], [`JitterDistribution`]) are public so they can be
//! reused and tested on their own.
use glam::{DVec2, IVec2};
use mint::Vector2;
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub mod jitter;
pub mod poisson_disk;
pub mod random_queue;
pub mod spatial_grid;
pub mod uniform_random;

pub use jitter::{JitterClamp, JitterDistribution};
pub use poisson_disk::{PoissonDiskConfig, PoissonDiskSampling, DEFAULT_MAX_TRIES};
pub use random_queue::RandomQueue;
pub use spatial_grid::{CellSlot, GridCell, SpatialGrid};
pub use uniform_random::UniformRandomSampling;

/// Trait for point sampling over a fixed integer domain.
pub trait PointSampling: Send + Sync {
    /// Domain this strategy samples from.
    fn dimensions(&self) -> Dimensions;

    /// Produce a fresh, unordered set of points. No state is kept between calls.
    fn sample(&self, rng: &mut dyn RngCore) -> Vec<IVec2>;
}

/// Integer extent of a sampling domain, covering `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions {
    /// Number of cells along X.
    pub width: i32,
    /// Number of cells along Y.
    pub height: i32,
}

impl Dimensions {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Validates the dimensions, rejecting negative extents.
    pub fn validate(&self) -> Result<()> {
        if self.width < 0 || self.height < 0 {
            return Err(Error::invalid_config(format!(
                "dimensions must be >= 0, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// True when no point can be placed inside the domain.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Number of integer cells in the domain.
    pub fn area(&self) -> u64 {
        if self.is_empty() {
            return 0;
        }
        self.width as u64 * self.height as u64
    }

    /// Whether an integer point lies inside the domain.
    pub fn contains(&self, point: IVec2) -> bool {
        point.x >= 0 && point.x < self.width && point.y >= 0 && point.y < self.height
    }

    /// Whether a continuous point lies inside the half-open domain rectangle.
    pub fn contains_continuous(&self, point: DVec2) -> bool {
        point.x >= 0.0
            && point.x < self.width as f64
            && point.y >= 0.0
            && point.y < self.height as f64
    }

    /// Domain size as a continuous vector.
    pub fn extent(&self) -> DVec2 {
        DVec2::new(self.width as f64, self.height as f64)
    }
}

impl From<IVec2> for Dimensions {
    fn from(value: IVec2) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Vector2<i32>> for Dimensions {
    fn from(value: Vector2<i32>) -> Self {
        Self::new(value.x, value.y)
    }
}

/// Statically dispatched choice between the available strategies.
#[derive(Debug, Clone)]
pub enum Sampler {
    Uniform(UniformRandomSampling),
    PoissonDisk(PoissonDiskSampling),
}

impl PointSampling for Sampler {
    fn dimensions(&self) -> Dimensions {
        match self {
            Sampler::Uniform(s) => s.dimensions(),
            Sampler::PoissonDisk(s) => s.dimensions(),
        }
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Vec<IVec2> {
        match self {
            Sampler::Uniform(s) => s.sample(rng),
            Sampler::PoissonDisk(s) => s.sample(rng),
        }
    }
}

impl From<UniformRandomSampling> for Sampler {
    fn from(value: UniformRandomSampling) -> Self {
        Sampler::Uniform(value)
    }
}

impl From<PoissonDiskSampling> for Sampler {
    fn from(value: PoissonDiskSampling) -> Self {
        Sampler::PoissonDisk(value)
    }
}

/// Sample `count` independent point sets, e.g. pre-baked animation frames.
pub fn sample_frames<S: PointSampling + ?Sized>(
    strategy: &S,
    count: usize,
    rng: &mut dyn RngCore,
) -> Vec<Vec<IVec2>> {
    (0..count).map(|_| strategy.sample(rng)).collect()
}

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    // 53 random mantissa bits.
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Generate a random index in `0..len`. `len` must be non-zero.
#[inline]
pub(crate) fn rand_index(rng: &mut dyn RngCore, len: usize) -> usize {
    debug_assert!(len > 0, "rand_index called with empty range");
    ((rng.next_u64() as u128 * len as u128) >> 64) as usize
}

/// Draw a standard normal value using the Box-Muller transform.
pub(crate) fn standard_normal(rng: &mut dyn RngCore) -> f64 {
    let u1 = (1.0 - rand01(rng)).clamp(f64::MIN_POSITIVE, 1.0);
    let u2 = rand01(rng);

    let r = (-2.0 * u1.ln()).sqrt();
    r * (std::f64::consts::TAU * u2).cos()
}
