//! Uniform random point sampling strategy.
use glam::IVec2;
use rand::RngCore;

use crate::error::{Error, Result};
use crate::sampling::{rand01, Dimensions, PointSampling};

/// Independent Bernoulli trial per integer cell of the domain.
///
/// Produces white noise with no spatial correlation. Mostly useful as a baseline to
/// compare the Poisson disk output against.
#[derive(Debug, Clone)]
pub struct UniformRandomSampling {
    dimensions: Dimensions,
    probability: f64,
}

impl UniformRandomSampling {
    /// Create a sampler selecting each cell with `probability` in [0, 1].
    pub fn try_new(dimensions: Dimensions, probability: f64) -> Result<Self> {
        dimensions.validate()?;
        if !(0.0..=1.0).contains(&probability) {
            return Err(Error::invalid_config(format!(
                "probability must be in [0, 1], got {probability}"
            )));
        }
        Ok(Self {
            dimensions,
            probability,
        })
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl PointSampling for UniformRandomSampling {
    fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Vec<IVec2> {
        if self.dimensions.is_empty() || self.probability <= 0.0 {
            return Vec::new();
        }

        let expected = (self.dimensions.area() as f64 * self.probability).ceil() as usize;
        let mut out = Vec::with_capacity(expected);

        for x in 0..self.dimensions.width {
            for y in 0..self.dimensions.height {
                if rand01(rng) < self.probability {
                    out.push(IVec2::new(x, y));
                }
            }
        }

        out
    }
}
