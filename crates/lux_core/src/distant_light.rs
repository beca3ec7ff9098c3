use crate::color::Color;
use crate::error::{ensure_positive, ensure_unit_range, SceneError, SceneResult};
use lux_math::{gen_f64, Vec3};
use rand::RngCore;

/// Light arriving from one direction everywhere, like the sun.
///
/// A non-zero `direction_variation` jitters each component of the direction
/// per shadow sample, which widens the source and softens shadow edges.
#[derive(Debug, Clone, PartialEq)]
pub struct DistantLight {
    direction: Vec3,
    color: Color,
    intensity: f64,
    direction_variation: f64,
    sample_count: usize,
}

impl DistantLight {
    pub fn new(
        direction: Vec3,
        color: Color,
        intensity: f64,
        direction_variation: f64,
    ) -> SceneResult<Self> {
        ensure_positive("intensity", intensity)?;
        ensure_unit_range("direction variation", direction_variation)?;
        Ok(Self {
            direction: direction.normalize_or_zero(),
            color,
            intensity,
            direction_variation,
            sample_count: 1,
        })
    }

    /// Number of shadow samples to take when supersampling.
    pub fn with_sample_count(mut self, sample_count: usize) -> SceneResult<Self> {
        if sample_count < 1 {
            return Err(SceneError::TooFewSamples("number of samples"));
        }
        self.sample_count = sample_count;
        Ok(self)
    }

    /// Direction of travel of the light reaching `_point`.
    pub fn direction(
        &self,
        _point: Vec3,
        _sample_index: usize,
        sample_count: usize,
        rng: &mut dyn RngCore,
    ) -> Vec3 {
        if self.direction_variation == 0.0 || sample_count <= 1 {
            return self.direction;
        }
        let mut jitter = || (2.0 * gen_f64(rng) - 1.0) * self.direction_variation;
        (self.direction + Vec3::new(jitter(), jitter(), jitter())).normalize_or_zero()
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }
}
