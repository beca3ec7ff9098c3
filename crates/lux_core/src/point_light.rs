use crate::color::Color;
use crate::error::{ensure_non_negative, ensure_positive, SceneError, SceneResult};
use lux_math::{disk_offset, Vec3};
use rand::RngCore;
use std::f64::consts::PI;

/// Light radiating in all directions from a point, falling off with the
/// square of the distance.
///
/// With a non-zero radius, shadow samples are spread over a disk of that
/// radius facing the illuminated point.
#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    point: Vec3,
    color: Color,
    intensity: f64,
    radius: f64,
    sample_count: usize,
}

impl PointLight {
    pub fn new(
        point: Vec3,
        color: Color,
        intensity: f64,
        radius: f64,
        sample_count: usize,
    ) -> SceneResult<Self> {
        ensure_positive("intensity", intensity)?;
        ensure_non_negative("radius", radius)?;
        if sample_count < 1 {
            return Err(SceneError::TooFewSamples("number of samples"));
        }
        if radius == 0.0 && sample_count > 1 {
            return Err(SceneError::ZeroRadiusWithSamples);
        }
        Ok(Self {
            point,
            color,
            intensity,
            radius,
            sample_count,
        })
    }

    pub fn point(&self) -> Vec3 {
        self.point
    }

    /// Direction of travel from the light (or a sample on its disk) to `point`.
    ///
    /// Returns zero when the light and the point coincide.
    pub fn direction(
        &self,
        point: Vec3,
        sample_index: usize,
        sample_count: usize,
        rng: &mut dyn RngCore,
    ) -> Vec3 {
        let nominal = (point - self.point).normalize_or_zero();
        if sample_count <= 1 || nominal == Vec3::ZERO {
            return nominal;
        }

        let (u_axis, v_axis) = nominal.any_orthonormal_pair();
        let (du, dv) = disk_offset(self.radius, sample_index, sample_count, rng);
        let sample = self.point + u_axis * du + v_axis * dv;
        (point - sample).normalize_or_zero()
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Inverse-square falloff of the emitted intensity.
    pub fn intensity(&self, point: Vec3) -> f64 {
        let distance = self.point.distance(point);
        self.intensity / (4.0 * PI * distance * distance)
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Only surfaces nearer than the light itself cast a shadow.
    pub fn is_blocked_by(&self, point: Vec3, blocker_distance: f64) -> bool {
        self.point.distance(point) > blocker_distance
    }
}
