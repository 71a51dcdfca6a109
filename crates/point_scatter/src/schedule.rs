//! Periodic resampling for tick-driven callers.
//!
//! [`TickCounter`] converts elapsed ticks into completed periods. [`Resampler`] owns a
//! strategy, an RNG and a counter, and swaps in a fresh point set whenever a period
//! completes, e.g. to refresh decoration markers every few frames.
use glam::IVec2;
use rand::RngCore;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::sampling::PointSampling;

/// Counts ticks and reports how many fixed-length periods have elapsed.
#[derive(Debug, Clone)]
pub struct TickCounter {
    period: u32,
    counter: u32,
    total_periods: u64,
}

impl TickCounter {
    pub fn try_new(period: u32) -> Result<Self> {
        if period == 0 {
            return Err(Error::invalid_config("tick period must be >= 1"));
        }
        Ok(Self {
            period,
            counter: 0,
            total_periods: 0,
        })
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    /// Starts the period count at `initial`, offsetting the phase of animations that
    /// key off [`Self::total_periods`].
    pub fn with_initial_periods(mut self, initial: u64) -> Self {
        self.total_periods = initial;
        self
    }

    /// Periods completed since creation, plus the initial offset.
    pub fn total_periods(&self) -> u64 {
        self.total_periods
    }

    /// Progress towards the next period in `[0, 1)`.
    pub fn percentage(&self) -> f64 {
        self.counter as f64 / self.period as f64
    }

    /// Advance by `elapsed` ticks, returning the number of periods completed.
    pub fn update(&mut self, elapsed: u32) -> u32 {
        let ticks = self.counter as u64 + elapsed as u64;
        let fired = ticks / self.period as u64;
        self.counter = (ticks % self.period as u64) as u32;
        self.total_periods += fired;
        fired as u32
    }
}

/// Keeps a point set fresh by resampling once per completed tick period.
pub struct Resampler<S, R> {
    strategy: S,
    rng: R,
    counter: TickCounter,
    points: Vec<IVec2>,
}

impl<S: PointSampling, R: RngCore> Resampler<S, R> {
    /// Creates the driver and takes the first sample immediately.
    pub fn try_new(strategy: S, rng: R, period: u32) -> Result<Self> {
        let counter = TickCounter::try_new(period)?;
        let mut resampler = Self {
            strategy,
            rng,
            counter,
            points: Vec::new(),
        };
        resampler.regenerate();
        Ok(resampler)
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn points(&self) -> &[IVec2] {
        &self.points
    }

    /// Periods completed so far.
    pub fn generation(&self) -> u64 {
        self.counter.total_periods()
    }

    /// Advance by `elapsed` ticks. Returns `true` if the points were regenerated.
    ///
    /// Several periods completing in one update still resample only once.
    pub fn update(&mut self, elapsed: u32) -> bool {
        if self.counter.update(elapsed) == 0 {
            return false;
        }
        self.regenerate();
        true
    }

    /// Replace the current points with a fresh sample.
    pub fn regenerate(&mut self) {
        self.points = self.strategy.sample(&mut self.rng);

        let dims = self.strategy.dimensions();
        if self.points.is_empty() && !dims.is_empty() {
            warn!(
                "Resampling produced no points for {}x{} domain.",
                dims.width, dims.height
            );
        }
        debug!(
            "Resampled {} points (generation {}).",
            self.points.len(),
            self.counter.total_periods()
        );
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::sampling::{Dimensions, PoissonDiskConfig, PoissonDiskSampling};

    fn poisson(width: i32, height: i32) -> PoissonDiskSampling {
        PoissonDiskSampling::try_new(PoissonDiskConfig::new(Dimensions::new(width, height), 6.15))
            .unwrap()
    }

    #[test]
    fn tick_counter_rejects_zero_period() {
        assert!(TickCounter::try_new(0).is_err());
    }

    #[test]
    fn tick_counter_carries_remainder() {
        let mut counter = TickCounter::try_new(15).unwrap();
        assert_eq!(counter.period(), 15);
        assert_eq!(counter.update(10), 0);
        assert_eq!(counter.update(10), 1);
        assert_eq!(counter.update(4), 0);
        assert_eq!(counter.update(6), 1);
        assert_eq!(counter.update(45), 3);
        assert_eq!(counter.total_periods(), 5);
        assert_eq!(counter.update(1), 0);
        assert_eq!(counter.total_periods(), 5);
    }

    #[test]
    fn tick_counter_initial_offset_and_progress() {
        let mut counter = TickCounter::try_new(100).unwrap().with_initial_periods(7);
        assert_eq!(counter.total_periods(), 7);
        assert_eq!(counter.percentage(), 0.0);

        assert_eq!(counter.update(50), 0);
        assert_eq!(counter.percentage(), 0.5);

        assert_eq!(counter.update(75), 1);
        assert_eq!(counter.total_periods(), 8);
        assert_eq!(counter.percentage(), 0.25);
    }

    #[test]
    fn resampler_samples_on_construction() {
        let resampler = Resampler::try_new(poisson(80, 40), StdRng::seed_from_u64(1), 15).unwrap();
        assert!(!resampler.points().is_empty());
        assert_eq!(resampler.generation(), 0);
        assert_eq!(resampler.strategy().dimensions(), Dimensions::new(80, 40));
    }

    #[test]
    fn resampler_refreshes_only_on_completed_period() {
        let mut resampler =
            Resampler::try_new(poisson(80, 40), StdRng::seed_from_u64(2), 15).unwrap();
        let first = resampler.points().to_vec();

        assert!(!resampler.update(14));
        assert_eq!(resampler.points(), first.as_slice());

        assert!(resampler.update(1));
        assert_ne!(resampler.points(), first.as_slice());
        assert_eq!(resampler.generation(), 1);

        assert!(resampler.update(60));
        assert_eq!(resampler.generation(), 5);
    }

    #[test]
    fn resampler_rejects_zero_period() {
        assert!(Resampler::try_new(poisson(10, 10), StdRng::seed_from_u64(3), 0).is_err());
    }

    #[test]
    fn same_seed_drives_same_sequence() {
        let mut a = Resampler::try_new(poisson(60, 60), StdRng::seed_from_u64(9), 1).unwrap();
        let mut b = Resampler::try_new(poisson(60, 60), StdRng::seed_from_u64(9), 1).unwrap();
        for _ in 0..3 {
            a.update(1);
            b.update(1);
            assert_eq!(a.points(), b.points());
        }
    }
}
