//! Poisson disk (blue-noise) point sampling strategy.
//!
//! Implements Bridson's algorithm: a seed point grows the set by proposing candidates
//! in the annulus `[d, 2d)` around a randomly chosen active point, accepting the first
//! candidate that keeps its distance to every stored point. A [`SpatialGrid`] with cell
//! size `floor(d / sqrt(2))` turns the distance test into a constant-size neighbourhood
//! scan, and a [`RandomQueue`] picks the next active point without directional bias.
use std::f64::consts::{SQRT_2, TAU};

use glam::{DVec2, IVec2};
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::sampling::{
    rand01, CellSlot, Dimensions, JitterDistribution, PointSampling, RandomQueue, SpatialGrid,
};

/// Candidate attempts per active point when not configured otherwise.
pub const DEFAULT_MAX_TRIES: u32 = 30;

#[cfg(feature = "serde")]
fn default_max_tries() -> u32 {
    DEFAULT_MAX_TRIES
}

/// Parameters of a [`PoissonDiskSampling`] strategy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoissonDiskConfig {
    /// Domain to sample from.
    pub dimensions: Dimensions,
    /// Minimum distance between accepted points.
    pub min_distance: f64,
    /// Candidates tried around an active point before it is dropped.
    #[cfg_attr(feature = "serde", serde(default = "default_max_tries"))]
    pub max_tries: u32,
    /// Per-round perturbation of the minimum distance.
    #[cfg_attr(feature = "serde", serde(default))]
    pub jitter: JitterDistribution,
}

impl PoissonDiskConfig {
    /// Creates a configuration with default tries and no jitter.
    pub fn new(dimensions: Dimensions, min_distance: f64) -> Self {
        Self {
            dimensions,
            min_distance,
            max_tries: DEFAULT_MAX_TRIES,
            jitter: JitterDistribution::inactive(),
        }
    }

    /// Sets the number of candidate attempts per active point.
    pub fn with_max_tries(mut self, max_tries: u32) -> Self {
        self.max_tries = max_tries;
        self
    }

    /// Sets the minimum distance jitter.
    pub fn with_jitter(mut self, jitter: JitterDistribution) -> Self {
        self.jitter = jitter;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        self.dimensions.validate()?;
        if !self.min_distance.is_finite() || self.min_distance <= 0.0 {
            return Err(Error::invalid_config(format!(
                "min_distance must be finite and > 0, got {}",
                self.min_distance
            )));
        }
        if self.max_tries < 1 {
            return Err(Error::invalid_config("max_tries must be >= 1"));
        }
        self.jitter.validate()
    }
}

/// Poisson disk sampling strategy.
///
/// Grid layout is derived once at construction; every [`PointSampling::sample`] call
/// builds fresh scratch state, so one instance can be reused indefinitely.
#[derive(Debug, Clone)]
pub struct PoissonDiskSampling {
    config: PoissonDiskConfig,
    cell_size: f64,
    grid_width: usize,
    grid_height: usize,
}

impl PoissonDiskSampling {
    pub fn try_new(config: PoissonDiskConfig) -> Result<Self> {
        config.validate()?;

        let cell_size = cell_size_for(config.min_distance);
        let grid_width = grid_cells_along(config.dimensions.width, cell_size);
        let grid_height = grid_cells_along(config.dimensions.height, cell_size);

        let (Some(grid_width), Some(grid_height)) = (grid_width, grid_height) else {
            return Err(too_fine(&config));
        };
        let addressable = grid_width
            .checked_mul(grid_height)
            .and_then(|cells| cells.checked_mul(std::mem::size_of::<CellSlot>()))
            .is_some_and(|bytes| bytes <= isize::MAX as usize);
        if !addressable {
            return Err(too_fine(&config));
        }

        Ok(Self {
            config,
            cell_size,
            grid_width,
            grid_height,
        })
    }

    pub fn config(&self) -> &PoissonDiskConfig {
        &self.config
    }

    pub fn min_distance(&self) -> f64 {
        self.config.min_distance
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Acceleration grid size `(width, height)` in cells.
    pub fn grid_dimensions(&self) -> (usize, usize) {
        (self.grid_width, self.grid_height)
    }

    /// Samples without flooring to integers.
    pub fn sample_continuous(&self, rng: &mut dyn RngCore) -> Vec<DVec2> {
        if self.config.dimensions.is_empty() {
            return Vec::new();
        }
        let mut run = PoissonDiskRun::new(self);
        run.run(rng);
        run.points
    }
}

impl PointSampling for PoissonDiskSampling {
    fn dimensions(&self) -> Dimensions {
        self.config.dimensions
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Vec<IVec2> {
        self.sample_continuous(rng)
            .into_iter()
            .map(|p| IVec2::new(p.x.floor() as i32, p.y.floor() as i32))
            .collect()
    }
}

/// `ceil(extent / cell_size) + 1`, or `None` if that does not fit a `usize`.
fn grid_cells_along(extent: i32, cell_size: f64) -> Option<usize> {
    // Float-to-int casts saturate, so an oversized count ends up at `usize::MAX`.
    ((extent as f64 / cell_size).ceil() as usize).checked_add(1)
}

fn too_fine(config: &PoissonDiskConfig) -> Error {
    Error::invalid_config(format!(
        "min_distance {} is too small for a {}x{} domain: acceleration grid does not fit in memory",
        config.min_distance, config.dimensions.width, config.dimensions.height
    ))
}

/// `floor(d / sqrt(2))`, falling back to the exact diagonal bound when flooring
/// would yield an empty cell.
fn cell_size_for(min_distance: f64) -> f64 {
    let exact = min_distance / SQRT_2;
    let floored = exact.floor();
    if floored >= 1.0 {
        floored
    } else {
        exact
    }
}

/// Scratch state of a single sampling run.
struct PoissonDiskRun<'a> {
    sampling: &'a PoissonDiskSampling,
    grid: SpatialGrid,
    active: RandomQueue<DVec2>,
    points: Vec<DVec2>,
    rounds: usize,
    rejected: usize,
    exhausted: usize,
}

impl<'a> PoissonDiskRun<'a> {
    fn new(sampling: &'a PoissonDiskSampling) -> Self {
        Self {
            sampling,
            grid: SpatialGrid::new(
                sampling.grid_width,
                sampling.grid_height,
                sampling.cell_size,
            ),
            active: RandomQueue::new(),
            points: Vec::new(),
            rounds: 0,
            rejected: 0,
            exhausted: 0,
        }
    }

    fn insert(&mut self, point: DVec2) {
        let cell = self.grid.cell_for(point);
        self.grid.set_point(cell, point);
        self.points.push(point);
        self.active.push(point);
    }

    fn is_valid_point(&self, candidate: DVec2, min_distance: f64) -> bool {
        if !self.sampling.config.dimensions.contains_continuous(candidate) {
            return false;
        }

        // Negative jitter can shrink the distance below the cell diagonal.
        let cell = self.grid.cell_for(candidate);
        if self.grid.has_point(cell) {
            return false;
        }

        let max_reach = self.grid.width().max(self.grid.height());
        let reach = ((min_distance / self.grid.cell_size()).ceil() as usize).clamp(1, max_reach);
        !self
            .grid
            .has_neighbor_within(cell, reach, candidate, min_distance)
    }

    fn generate_around_point(
        &mut self,
        rng: &mut dyn RngCore,
        origin: DVec2,
        min_distance: f64,
    ) -> Option<DVec2> {
        let radius = self.sampling.config.min_distance;

        for _ in 0..self.sampling.config.max_tries {
            let angle = rand01(rng) * TAU;
            let distance = radius + rand01(rng) * radius;
            let candidate = origin + DVec2::from_angle(angle) * distance;

            if self.is_valid_point(candidate, min_distance) {
                return Some(candidate);
            }
            self.rejected += 1;
        }

        None
    }

    fn run(&mut self, rng: &mut dyn RngCore) {
        let sampling = self.sampling;
        let config = &sampling.config;
        let extent = config.dimensions.extent();

        let initial = DVec2::new(
            (rand01(rng) * extent.x).min(extent.x.next_down()),
            (rand01(rng) * extent.y).min(extent.y.next_down()),
        );
        self.insert(initial);

        while self.active.is_not_empty() {
            let active = self.active.pop(rng);
            self.rounds += 1;

            // One jitter draw per popped point, shared by all of its tries.
            let offset = config.jitter.sample_offset(rng);
            let min_distance = (config.min_distance + offset).max(0.0);

            match self.generate_around_point(rng, active, min_distance) {
                Some(candidate) => {
                    self.insert(candidate);
                    self.active.push(active);
                }
                None => self.exhausted += 1,
            }
        }

        debug!(
            "Poisson disk sampling on {}x{}: {} points in {} rounds, {} candidates rejected, {} active points exhausted.",
            config.dimensions.width,
            config.dimensions.height,
            self.points.len(),
            self.rounds,
            self.rejected,
            self.exhausted,
        );
    }
}
