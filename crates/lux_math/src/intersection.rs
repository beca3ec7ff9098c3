use crate::Vec3;

/// Where a ray meets a surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Intersection {
    /// Point of intersection
    pub point: Vec3,
    /// Distance from the ray origin, never negative
    pub distance: f64,
    /// Unit surface normal, pointing against the incoming ray
    pub normal: Vec3,
}

impl Intersection {
    pub fn new(point: Vec3, distance: f64, normal: Vec3) -> Self {
        Self {
            point,
            distance,
            normal,
        }
    }
}
