//! Light sources.

use crate::color::Color;
use crate::distant_light::DistantLight;
use crate::point_light::PointLight;
use lux_math::{Intersection, Vec3};
use rand::RngCore;

/// Closed set of light sources.
#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    Distant(DistantLight),
    Point(PointLight),
}

impl Light {
    /// Direction the light travels to reach `point`, for shadow sample
    /// `sample_index` out of `sample_count`. May be randomly perturbed when
    /// more than one sample is requested.
    pub fn direction(
        &self,
        point: Vec3,
        sample_index: usize,
        sample_count: usize,
        rng: &mut dyn RngCore,
    ) -> Vec3 {
        match self {
            Light::Distant(light) => light.direction(point, sample_index, sample_count, rng),
            Light::Point(light) => light.direction(point, sample_index, sample_count, rng),
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Light::Distant(light) => light.color(),
            Light::Point(light) => light.color(),
        }
    }

    /// Intensity of the light arriving at `point`.
    pub fn intensity(&self, point: Vec3) -> f64 {
        match self {
            Light::Distant(light) => light.intensity(),
            Light::Point(light) => light.intensity(point),
        }
    }

    /// Shadow samples to take when a pixel is supersampled.
    pub fn sample_count(&self) -> usize {
        match self {
            Light::Distant(light) => light.sample_count(),
            Light::Point(light) => light.sample_count(),
        }
    }

    /// Whether a surface hit by the shadow ray from `point` stands between
    /// the point and this light.
    pub fn is_blocked_by(&self, point: Vec3, intersection: &Intersection) -> bool {
        match self {
            // Infinitely far away, so every forward hit is in the way
            Light::Distant(_) => true,
            Light::Point(light) => light.is_blocked_by(point, intersection.distance),
        }
    }
}

impl From<DistantLight> for Light {
    fn from(light: DistantLight) -> Self {
        Light::Distant(light)
    }
}

impl From<PointLight> for Light {
    fn from(light: PointLight) -> Self {
        Light::Point(light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distant_light_always_blocked() {
        let light: Light = DistantLight::new(Vec3::NEG_Z, Color::ONE, 1.0, 0.0)
            .unwrap()
            .into();
        let far = Intersection::new(Vec3::Z * 1e6, 1e6, Vec3::NEG_Z);
        assert!(light.is_blocked_by(Vec3::ZERO, &far));
        assert_eq!(light.intensity(Vec3::new(5.0, -3.0, 100.0)), 1.0);
    }

    #[test]
    fn test_point_light_blocked_only_before_light() {
        let light: Light = PointLight::new(Vec3::new(0.0, 0.0, 3.0), Color::ONE, 1.0, 0.0, 1)
            .unwrap()
            .into();
        let near = Intersection::new(Vec3::new(0.0, 0.0, 1.0), 1.0, Vec3::NEG_Z);
        let beyond = Intersection::new(Vec3::new(0.0, 0.0, 4.0), 4.0, Vec3::NEG_Z);
        assert!(light.is_blocked_by(Vec3::ZERO, &near));
        assert!(!light.is_blocked_by(Vec3::ZERO, &beyond));
    }
}
