//! Spawn rules deciding where decoration objects appear on a layer.
//!
//! A [`SpawnRule`] names one of three [`SpawnMode`]s. [`ObjectSpawner`] turns a rule into
//! a per-position query: `Place` marks every position, `Density` rolls an independent
//! chance per query, and `Poisson` precomputes a blue-noise set once.
use std::collections::HashSet;

use glam::IVec2;
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::sampling::{
    rand01, Dimensions, JitterDistribution, PointSampling, PoissonDiskConfig,
    PoissonDiskSampling, DEFAULT_MAX_TRIES,
};

/// How a spawn rule selects positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpawnMode {
    /// Spawn on every queried position.
    Place,
    /// Every position has the same chance, given by the rule density.
    #[default]
    Density,
    /// Positions come from a Poisson disk sample.
    Poisson,
}

/// Data-driven spawn configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpawnRule {
    pub mode: SpawnMode,
    /// Per-position chance for [`SpawnMode::Density`].
    pub density: f64,
    /// Minimum distance for [`SpawnMode::Poisson`].
    pub min_distance: f64,
    /// Candidate attempts for [`SpawnMode::Poisson`].
    pub max_tries: u32,
    /// Minimum distance jitter for [`SpawnMode::Poisson`].
    pub jitter: JitterDistribution,
}

impl Default for SpawnRule {
    fn default() -> Self {
        Self {
            mode: SpawnMode::Density,
            density: 0.05,
            min_distance: 6.0,
            max_tries: DEFAULT_MAX_TRIES,
            jitter: JitterDistribution::inactive(),
        }
    }
}

impl SpawnRule {
    pub fn place() -> Self {
        Self {
            mode: SpawnMode::Place,
            ..Default::default()
        }
    }

    pub fn density(density: f64) -> Self {
        Self {
            mode: SpawnMode::Density,
            density,
            ..Default::default()
        }
    }

    pub fn poisson(min_distance: f64) -> Self {
        Self {
            mode: SpawnMode::Poisson,
            min_distance,
            ..Default::default()
        }
    }

    pub fn with_max_tries(mut self, max_tries: u32) -> Self {
        self.max_tries = max_tries;
        self
    }

    pub fn with_jitter(mut self, jitter: JitterDistribution) -> Self {
        self.jitter = jitter;
        self
    }

    /// Poisson disk parameters of this rule for the given domain.
    pub fn poisson_config(&self, dimensions: Dimensions) -> PoissonDiskConfig {
        PoissonDiskConfig::new(dimensions, self.min_distance)
            .with_max_tries(self.max_tries)
            .with_jitter(self.jitter)
    }

    /// Validates the fields used by the selected mode.
    pub fn validate(&self, dimensions: Dimensions) -> Result<()> {
        dimensions.validate()?;
        match self.mode {
            SpawnMode::Place => Ok(()),
            SpawnMode::Density => {
                if !(0.0..=1.0).contains(&self.density) {
                    return Err(Error::invalid_config(format!(
                        "spawn density must be in [0, 1], got {}",
                        self.density
                    )));
                }
                Ok(())
            }
            SpawnMode::Poisson => self.poisson_config(dimensions).validate(),
        }
    }
}

/// Answers whether an object should spawn at a position, per [`SpawnRule`].
#[derive(Debug, Clone)]
pub enum ObjectSpawner {
    Place,
    Density { density: f64 },
    Poisson { samples: HashSet<IVec2> },
}

impl ObjectSpawner {
    /// Builds a spawner. Poisson rules sample their positions here, once.
    pub fn try_new(
        dimensions: Dimensions,
        rule: &SpawnRule,
        rng: &mut dyn RngCore,
    ) -> Result<Self> {
        rule.validate(dimensions)?;

        let spawner = match rule.mode {
            SpawnMode::Place => ObjectSpawner::Place,
            SpawnMode::Density => ObjectSpawner::Density {
                density: rule.density,
            },
            SpawnMode::Poisson => {
                let sampler = PoissonDiskSampling::try_new(rule.poisson_config(dimensions))?;
                let samples: HashSet<IVec2> = sampler.sample(rng).into_iter().collect();
                if samples.is_empty() && !dimensions.is_empty() {
                    warn!(
                        "Poisson spawner produced no positions for {}x{} domain.",
                        dimensions.width, dimensions.height
                    );
                }
                debug!("Poisson spawner precomputed {} positions.", samples.len());
                ObjectSpawner::Poisson { samples }
            }
        };

        Ok(spawner)
    }

    pub fn mode(&self) -> SpawnMode {
        match self {
            ObjectSpawner::Place => SpawnMode::Place,
            ObjectSpawner::Density { .. } => SpawnMode::Density,
            ObjectSpawner::Poisson { .. } => SpawnMode::Poisson,
        }
    }

    /// Whether an object should spawn at `position`.
    ///
    /// Density spawners consume randomness on every call; the others ignore `rng`.
    pub fn should_place(&self, position: IVec2, rng: &mut dyn RngCore) -> bool {
        match self {
            ObjectSpawner::Place => true,
            ObjectSpawner::Density { density } => rand01(rng) < *density,
            ObjectSpawner::Poisson { samples } => samples.contains(&position),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn place_spawner_accepts_everything() {
        let mut rng = StdRng::seed_from_u64(1);
        let spawner =
            ObjectSpawner::try_new(Dimensions::new(4, 4), &SpawnRule::place(), &mut rng).unwrap();
        assert_eq!(spawner.mode(), SpawnMode::Place);
        assert!(spawner.should_place(IVec2::new(0, 0), &mut rng));
        assert!(spawner.should_place(IVec2::new(3, 3), &mut rng));
    }

    #[test]
    fn density_spawner_matches_rate() {
        let mut rng = StdRng::seed_from_u64(2);
        let spawner =
            ObjectSpawner::try_new(Dimensions::new(100, 100), &SpawnRule::density(0.25), &mut rng)
                .unwrap();

        let hits = (0..100)
            .flat_map(|x| (0..100).map(move |y| IVec2::new(x, y)))
            .filter(|p| spawner.should_place(*p, &mut rng))
            .count();
        assert!((2_200..2_800).contains(&hits), "hits = {hits}");
    }

    #[test]
    fn poisson_spawner_answers_from_precomputed_set() {
        let dims = Dimensions::new(60, 40);
        let mut rng = StdRng::seed_from_u64(3);
        let spawner = ObjectSpawner::try_new(dims, &SpawnRule::poisson(5.0), &mut rng).unwrap();

        let ObjectSpawner::Poisson { samples } = &spawner else {
            panic!("expected Poisson spawner");
        };
        assert!(!samples.is_empty());

        let placed: HashSet<IVec2> = (0..dims.width)
            .flat_map(|x| (0..dims.height).map(move |y| IVec2::new(x, y)))
            .filter(|p| spawner.should_place(*p, &mut rng))
            .collect();
        assert_eq!(&placed, samples);
    }

    #[test]
    fn invalid_rules_are_rejected() {
        let dims = Dimensions::new(10, 10);
        let mut rng = StdRng::seed_from_u64(4);
        assert!(ObjectSpawner::try_new(dims, &SpawnRule::density(1.5), &mut rng).is_err());
        assert!(ObjectSpawner::try_new(dims, &SpawnRule::poisson(0.0), &mut rng).is_err());
        assert!(ObjectSpawner::try_new(
            dims,
            &SpawnRule::poisson(3.0).with_max_tries(0),
            &mut rng
        )
        .is_err());
        assert!(
            ObjectSpawner::try_new(Dimensions::new(-1, 2), &SpawnRule::place(), &mut rng).is_err()
        );
    }

    #[test]
    fn poisson_rule_ignores_density_field() {
        let rule = SpawnRule {
            density: 7.0,
            ..SpawnRule::poisson(4.0)
        };
        assert!(rule.validate(Dimensions::new(20, 20)).is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn rule_deserializes_from_ron() {
        let rule: SpawnRule = ron::from_str(
            "(mode: Poisson, min_distance: 18.5, jitter: (probability: 1.0, variance: 2.0, mean: 1.0))",
        )
        .unwrap();
        assert_eq!(rule.mode, SpawnMode::Poisson);
        assert_eq!(rule.max_tries, DEFAULT_MAX_TRIES);
        assert_eq!(rule.jitter.mean, 1.0);
        assert!(rule.validate(Dimensions::new(200, 100)).is_ok());
    }
}
