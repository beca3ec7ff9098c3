use crate::error::{ensure_positive, SceneError, SceneResult};
use crate::shading::ShadingProperties;
use lux_math::{Intersection, Ray, Vec3};

/// A sphere with a reference frame for texture mapping.
///
/// `zenith` is the polar axis and `azimuth` marks longitude zero. Texture
/// coordinates are (longitude in (-pi, pi], colatitude in [0, pi]).
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    zenith: Vec3,
    azimuth: Vec3,
    shading: ShadingProperties,
}

impl Sphere {
    pub fn new(
        center: Vec3,
        radius: f64,
        zenith: Vec3,
        azimuth: Vec3,
        shading: ShadingProperties,
    ) -> SceneResult<Self> {
        shading.validate()?;
        ensure_positive("radius", radius)?;
        if zenith.dot(azimuth) != 0.0 {
            return Err(SceneError::NotPerpendicular("zenith and azimuth references"));
        }
        Ok(Self {
            center,
            radius,
            zenith,
            azimuth,
            shading,
        })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn shading_properties(&self) -> &ShadingProperties {
        &self.shading
    }

    pub fn intersection(&self, ray: &Ray) -> Option<Intersection> {
        let direction = ray.unit_direction();
        let to_center = self.center - ray.origin;

        // Distance along the ray to the point closest to the center
        let midpoint = direction.dot(to_center);
        if midpoint < 0.0 {
            return None;
        }

        let radius_squared = self.radius * self.radius;
        let miss_squared = to_center.length_squared() - midpoint * midpoint;
        if miss_squared > radius_squared {
            return None;
        }

        let half_chord = (radius_squared - miss_squared).sqrt();
        let mut distance = midpoint - half_chord;
        if distance < 0.0 {
            // Origin is inside the sphere
            distance = midpoint + half_chord;
        }

        let point = ray.origin + direction * distance;
        let outward = (point - self.center).normalize_or_zero();
        let normal = if outward.dot(direction) > 0.0 {
            -outward
        } else {
            outward
        };
        Some(Intersection::new(point, distance, normal))
    }

    pub fn texture_coordinates(&self, point: Vec3) -> (f64, f64) {
        let offset = point - self.center;
        let u_axis = self.azimuth.normalize_or_zero();
        let w_axis = self.zenith.normalize_or_zero();
        let v_axis = w_axis.cross(u_axis);

        let u = offset.dot(u_axis);
        let v = offset.dot(v_axis);
        let w = offset.dot(w_axis);
        let r = offset.length();
        if r == 0.0 {
            return (0.0, 0.0);
        }
        (v.atan2(u), (w / r).clamp(-1.0, 1.0).acos())
    }
}
