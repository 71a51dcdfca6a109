//! Random perturbation of the Poisson-disk minimum distance.
//!
//! A [`JitterDistribution`] first decides whether it fires at all
//! ([`JitterDistribution::should_generate`]) and, if so, draws a Gaussian offset
//! ([`JitterDistribution::next_value`]). The sampler combines both through
//! [`JitterDistribution::sample_offset`] once per popped active point.
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sampling::{rand01, standard_normal};

/// Inclusive interval generated offsets are clamped to.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JitterClamp {
    pub min: f64,
    pub max: f64,
}

/// Gaussian offset generator with an activation probability.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct JitterDistribution {
    /// Chance in [0, 1] that an offset is generated at all.
    pub probability: f64,
    /// Variance of the Gaussian offset.
    pub variance: f64,
    /// Mean of the Gaussian offset.
    pub mean: f64,
    /// Optional clamp applied to generated offsets.
    pub clamp: Option<JitterClamp>,
}

impl Default for JitterDistribution {
    fn default() -> Self {
        Self::inactive()
    }
}

impl JitterDistribution {
    /// A distribution that never fires. Offsets are always zero.
    pub const fn inactive() -> Self {
        Self {
            probability: 0.0,
            variance: 1.0,
            mean: 0.0,
            clamp: None,
        }
    }

    /// Zero-mean distribution with the given activation probability and variance.
    pub fn try_new(probability: f64, variance: f64) -> Result<Self> {
        let jitter = Self {
            probability,
            variance,
            ..Self::inactive()
        };
        jitter.validate()?;
        Ok(jitter)
    }

    /// Shifts the mean of generated offsets.
    pub fn with_mean(mut self, mean: f64) -> Self {
        self.mean = mean;
        self
    }

    /// Clamps generated offsets to `[min, max]`.
    pub fn with_clamp(mut self, min: f64, max: f64) -> Self {
        self.clamp = Some(JitterClamp { min, max });
        self
    }

    /// Validates the distribution parameters.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(Error::invalid_config(format!(
                "jitter probability must be in [0, 1], got {}",
                self.probability
            )));
        }
        if !self.variance.is_finite() || self.variance < 0.0 {
            return Err(Error::invalid_config(format!(
                "jitter variance must be finite and >= 0, got {}",
                self.variance
            )));
        }
        if !self.mean.is_finite() {
            return Err(Error::invalid_config("jitter mean must be finite"));
        }
        if let Some(JitterClamp { min, max }) = self.clamp {
            if min.is_nan() || max.is_nan() || min >= max {
                return Err(Error::invalid_config(format!(
                    "jitter clamp interval invalid: [{min}, {max}]"
                )));
            }
        }
        Ok(())
    }

    /// Whether this distribution can ever produce a non-zero offset.
    pub fn is_active(&self) -> bool {
        self.probability > 0.0
    }

    /// Roll the activation probability.
    pub fn should_generate(&self, rng: &mut dyn RngCore) -> bool {
        if self.probability >= 1.0 {
            return true;
        }
        if self.probability <= 0.0 {
            return false;
        }
        rand01(rng) < self.probability
    }

    /// Draw one offset from the Gaussian, clamped if configured.
    pub fn next_value(&self, rng: &mut dyn RngCore) -> f64 {
        let value = self.mean + self.variance.sqrt() * standard_normal(rng);
        match self.clamp {
            Some(JitterClamp { min, max }) => value.clamp(min, max),
            None => value,
        }
    }

    /// Offset for one round: [`Self::next_value`] when activated, zero otherwise.
    pub fn sample_offset(&self, rng: &mut dyn RngCore) -> f64 {
        if self.should_generate(rng) {
            self.next_value(rng)
        } else {
            0.0
        }
    }
}
