//! Geometry kernel for the lux ray tracer.
//!
//! Everything is double precision. Points and vectors share the same
//! `Vec3` type (glam's `DVec3`): `b - a` is the vector between two
//! points and `p + v` translates a point.

// Re-export glam so downstream crates agree on one version
pub use glam;
pub use glam::DVec3 as Vec3;

mod intersection;
mod interval;
mod ray;
pub mod sampling;

pub use intersection::Intersection;
pub use interval::Interval;
pub use ray::Ray;
pub use sampling::{disk_offset, gen_f64};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    }

    #[test]
    fn test_unit_of_zero_vector_is_zero() {
        assert_eq!(Vec3::ZERO.normalize_or_zero(), Vec3::ZERO);
        let v = Vec3::new(3.0, 0.0, 4.0).normalize_or_zero();
        assert!((v.length() - 1.0).abs() < 1e-12);
    }
}
