//! Surfaces rays can hit.

use crate::disc::Disc;
use crate::plane::Plane;
use crate::shading::ShadingProperties;
use crate::sphere::Sphere;
use lux_math::{Intersection, Ray, Vec3};

/// Closed set of surface primitives. Boxes are built from planes with
/// [`crate::cuboid`].
#[derive(Debug, Clone, PartialEq)]
pub enum Surface {
    Plane(Plane),
    Sphere(Sphere),
    Disc(Disc),
}

impl Surface {
    /// Nearest intersection of the ray with this surface, if any.
    pub fn intersection(&self, ray: &Ray) -> Option<Intersection> {
        match self {
            Surface::Plane(plane) => plane.intersection(ray),
            Surface::Sphere(sphere) => sphere.intersection(ray),
            Surface::Disc(disc) => disc.intersection(ray),
        }
    }

    /// Map a point on the surface to texture coordinates (u, v).
    pub fn texture_coordinates(&self, point: Vec3) -> (f64, f64) {
        match self {
            Surface::Plane(plane) => plane.texture_coordinates(point),
            Surface::Sphere(sphere) => sphere.texture_coordinates(point),
            Surface::Disc(disc) => disc.texture_coordinates(point),
        }
    }

    pub fn shading_properties(&self) -> &ShadingProperties {
        match self {
            Surface::Plane(plane) => plane.shading_properties(),
            Surface::Sphere(sphere) => sphere.shading_properties(),
            Surface::Disc(disc) => disc.shading_properties(),
        }
    }
}

impl From<Plane> for Surface {
    fn from(plane: Plane) -> Self {
        Surface::Plane(plane)
    }
}

impl From<Sphere> for Surface {
    fn from(sphere: Sphere) -> Self {
        Surface::Sphere(sphere)
    }
}

impl From<Disc> for Surface {
    fn from(disc: Disc) -> Self {
        Surface::Disc(disc)
    }
}
