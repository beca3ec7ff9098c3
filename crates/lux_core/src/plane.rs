//! Bounded rectangular plane.

use crate::error::{ensure_positive, SceneError, SceneResult};
use crate::shading::ShadingProperties;
use lux_math::{Intersection, Interval, Ray, Vec3};

/// A rectangle spanned by two perpendicular edge vectors from a corner.
///
/// Texture coordinates are the distances from the corner along the width
/// and height edges, so (u, v) ranges over [0, |width|] x [0, |height|].
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    corner: Vec3,
    width: Vec3,
    height: Vec3,
    normal: Vec3,
    shading: ShadingProperties,
}

impl Plane {
    pub fn new(
        corner: Vec3,
        width: Vec3,
        height: Vec3,
        shading: ShadingProperties,
    ) -> SceneResult<Self> {
        shading.validate()?;
        ensure_positive("plane width", width.length())?;
        ensure_positive("plane height", height.length())?;
        if width.dot(height) != 0.0 {
            return Err(SceneError::NotPerpendicular("plane width and height"));
        }
        Ok(Self::from_edges(corner, width, height, shading))
    }

    /// Build a plane from edges already known to be valid and perpendicular.
    pub(crate) fn from_edges(
        corner: Vec3,
        width: Vec3,
        height: Vec3,
        shading: ShadingProperties,
    ) -> Self {
        Self {
            corner,
            width,
            height,
            normal: width.cross(height).normalize_or_zero(),
            shading,
        }
    }

    pub fn corner(&self) -> Vec3 {
        self.corner
    }

    pub fn width(&self) -> Vec3 {
        self.width
    }

    pub fn height(&self) -> Vec3 {
        self.height
    }

    /// Unit normal, `width x height`, before any flipping toward a ray.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn shading_properties(&self) -> &ShadingProperties {
        &self.shading
    }

    /// Intersection with the rectangle.
    pub fn intersection(&self, ray: &Ray) -> Option<Intersection> {
        let hit = self.unbounded_intersection(ray)?;
        let (u, v) = self.texture_coordinates(hit.point);
        let within = Interval::new(0.0, self.width.length()).contains(u)
            && Interval::new(0.0, self.height.length()).contains(v);
        within.then_some(hit)
    }

    /// Intersection with the infinite plane through the rectangle.
    ///
    /// Returns `None` for rays parallel to the plane or pointing away from it.
    pub(crate) fn unbounded_intersection(&self, ray: &Ray) -> Option<Intersection> {
        let direction = ray.unit_direction();
        let denominator = self.normal.dot(direction);
        if denominator == 0.0 {
            return None;
        }

        let distance = (self.corner - ray.origin).dot(self.normal) / denominator;
        if distance < 0.0 {
            return None;
        }

        let point = ray.origin + direction * distance;
        let normal = if denominator > 0.0 {
            -self.normal
        } else {
            self.normal
        };
        Some(Intersection::new(point, distance, normal))
    }

    pub fn texture_coordinates(&self, point: Vec3) -> (f64, f64) {
        let offset = point - self.corner;
        (
            offset.dot(self.width.normalize_or_zero()),
            offset.dot(self.height.normalize_or_zero()),
        )
    }
}
