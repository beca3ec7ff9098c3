use crate::error::{ensure_positive, SceneError, SceneResult};
use crate::plane::Plane;
use crate::shading::ShadingProperties;
use lux_math::{Intersection, Ray, Vec3};

/// A flat circular disc.
///
/// Defined by its center and two perpendicular radius vectors of equal
/// length. Texture coordinates are polar: (distance from center, angle
/// from the width vector).
#[derive(Debug, Clone, PartialEq)]
pub struct Disc {
    plane: Plane,
    radius: f64,
}

impl Disc {
    pub fn new(
        center: Vec3,
        width: Vec3,
        height: Vec3,
        shading: ShadingProperties,
    ) -> SceneResult<Self> {
        if width.dot(height) != 0.0 {
            return Err(SceneError::NotPerpendicular("disc width and height"));
        }
        if width.length() != height.length() {
            return Err(SceneError::UnequalDiscAxes);
        }
        let radius = width.length();
        ensure_positive("disc radius", radius)?;
        let plane = Plane::new(center, width, height, shading)?;
        Ok(Self { plane, radius })
    }

    pub fn center(&self) -> Vec3 {
        self.plane.corner()
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn shading_properties(&self) -> &ShadingProperties {
        self.plane.shading_properties()
    }

    pub fn intersection(&self, ray: &Ray) -> Option<Intersection> {
        let hit = self.plane.unbounded_intersection(ray)?;
        let (u, v) = self.plane.texture_coordinates(hit.point);
        (u.hypot(v) <= self.radius).then_some(hit)
    }

    pub fn texture_coordinates(&self, point: Vec3) -> (f64, f64) {
        let (u, v) = self.plane.texture_coordinates(point);
        (u.hypot(v), v.atan2(u))
    }
}
