//! Camera for ray generation.

use lux_core::{SceneError, SceneResult};
use lux_math::{disk_offset, Ray, Vec3};
use rand::RngCore;

/// Which sub-sample of a pixel a camera ray belongs to.
///
/// A supersampled pixel is covered by an `aa_grid x aa_grid` grid of
/// sub-pixel positions, each shot `dof_count` times through different
/// points of the aperture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelSample {
    pub dof_index: usize,
    pub dof_count: usize,
    pub aa_x: u32,
    pub aa_y: u32,
    pub aa_grid: u32,
}

impl PixelSample {
    /// One ray through the pixel center with no aperture jitter.
    pub const CENTER: PixelSample = PixelSample {
        dof_index: 0,
        dof_count: 1,
        aa_x: 0,
        aa_y: 0,
        aa_grid: 1,
    };
}

/// Pinhole or thin-lens camera.
///
/// The basis is U (right), V (forward) and W (up). With a non-zero aperture
/// every ray starts from a random point of the lens disk and is aimed at the
/// point the central ray would reach at the focal distance, so only objects
/// on the focal plane stay sharp.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    origin: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    horizontal_fov_deg: f64,
    aperture_radius: f64,
    focal_distance: f64,
    depth_of_field_samples: usize,
    antialias_samples: u32,
}

impl Camera {
    /// Build a camera looking along `view` with `up` pointing up.
    ///
    /// `view.direction` and `up` must be exactly perpendicular.
    pub fn new(
        view: Ray,
        up: Vec3,
        horizontal_fov_deg: f64,
        aperture_radius: f64,
        focal_distance: f64,
        depth_of_field_samples: usize,
        antialias_samples: u32,
    ) -> SceneResult<Self> {
        if view.direction.dot(up) != 0.0 {
            return Err(SceneError::NotPerpendicular(
                "camera view and up direction vectors",
            ));
        }
        if !(horizontal_fov_deg > 0.0) {
            return Err(SceneError::NotPositive {
                name: "field of view",
                value: horizontal_fov_deg,
            });
        }
        if !(aperture_radius >= 0.0) {
            return Err(SceneError::Negative {
                name: "aperture radius",
                value: aperture_radius,
            });
        }
        if !(focal_distance > 0.0) {
            return Err(SceneError::NotPositive {
                name: "focal distance",
                value: focal_distance,
            });
        }
        if depth_of_field_samples < 1 {
            return Err(SceneError::TooFewSamples("depth of field samples"));
        }
        if antialias_samples < 1 {
            return Err(SceneError::TooFewSamples("antialias samples"));
        }

        Ok(Self {
            origin: view.origin,
            u: view.direction.cross(up).normalize_or_zero(),
            v: view.direction.normalize_or_zero(),
            w: up.normalize_or_zero(),
            horizontal_fov_deg,
            aperture_radius,
            focal_distance,
            depth_of_field_samples,
            antialias_samples,
        })
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn focal_distance(&self) -> f64 {
        self.focal_distance
    }

    /// Aperture samples per sub-pixel when supersampling.
    pub fn depth_of_field_samples(&self) -> usize {
        self.depth_of_field_samples
    }

    /// Width of the sub-pixel grid when supersampling.
    pub fn antialias_samples(&self) -> u32 {
        self.antialias_samples
    }

    /// Generate the ray for `sample` of pixel (x, y) in a `width x height`
    /// image. Row 0 is the top of the image.
    pub fn get_ray(
        &self,
        width: u32,
        height: u32,
        x: u32,
        y: u32,
        sample: PixelSample,
        rng: &mut dyn RngCore,
    ) -> Ray {
        let grid = f64::from(sample.aa_grid.max(1));
        let pixel_size = 2.0 * (self.horizontal_fov_deg.to_radians() / 2.0).tan() / f64::from(width);

        let u = (f64::from(x) * grid + f64::from(sample.aa_x) - f64::from(width) * grid / 2.0 + 0.5)
            * pixel_size
            / grid;
        let w = (f64::from(height) * grid / 2.0 - (f64::from(y) * grid + f64::from(sample.aa_y) + 1.0)
            + 0.5)
            * pixel_size
            / grid;

        let nominal = (self.u * u + self.w * w + self.v).normalize_or_zero();
        let focal_point = self.origin + nominal * self.focal_distance;

        let aperture = if sample.dof_count <= 1 {
            0.0
        } else {
            self.aperture_radius
        };
        let (du, dw) = disk_offset(aperture, sample.dof_index, sample.dof_count, rng);
        let origin = self.origin + self.u * du + self.w * dw;

        Ray::new(origin, (focal_point - origin).normalize_or_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPS: f64 = 1e-9;

    fn camera(view: Vec3, up: Vec3) -> Camera {
        Camera::new(Ray::new(Vec3::new(-3.0, 2.0, -1.0), view), up, 90.0, 0.0, 1.0, 1, 1).unwrap()
    }

    #[test]
    fn test_construction_errors() {
        let view = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let err = Camera::new(view, Vec3::new(0.0, 1.0, 1.0), 90.0, 0.0, 1.0, 1, 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "camera view and up direction vectors must be perpendicular"
        );
        assert!(Camera::new(view, Vec3::Y, 0.0, 0.0, 1.0, 1, 1).is_err());
        assert!(Camera::new(view, Vec3::Y, 90.0, -0.1, 1.0, 1, 1).is_err());
        assert!(Camera::new(view, Vec3::Y, 90.0, 0.0, 0.0, 1, 1).is_err());
        assert_eq!(
            Camera::new(view, Vec3::Y, 90.0, 0.0, 1.0, 0, 1).unwrap_err(),
            SceneError::TooFewSamples("depth of field samples")
        );
        assert_eq!(
            Camera::new(view, Vec3::Y, 90.0, 0.0, 1.0, 1, 0).unwrap_err(),
            SceneError::TooFewSamples("antialias samples")
        );
    }

    #[test]
    fn test_corner_ray_direction() {
        let mut rng = StdRng::seed_from_u64(42);
        let cam = camera(Vec3::NEG_Z, Vec3::Y);
        let ray = cam.get_ray(2, 2, 0, 0, PixelSample::CENTER, &mut rng);

        assert_eq!(ray.origin, Vec3::new(-3.0, 2.0, -1.0));
        let expected = Vec3::new(-0.5, 0.5, -1.0).normalize();
        assert!((ray.direction - expected).length() < EPS);
    }

    #[test]
    fn test_rotated_camera() {
        let mut rng = StdRng::seed_from_u64(42);
        let cam = camera(Vec3::X, Vec3::NEG_Y);
        let ray = cam.get_ray(2, 2, 0, 0, PixelSample::CENTER, &mut rng);

        let expected = Vec3::new(1.0, -0.5, 0.5).normalize();
        assert!((ray.direction - expected).length() < EPS);
    }

    #[test]
    fn test_antialias_grid_subdivides_pixel() {
        let mut rng = StdRng::seed_from_u64(42);
        let cam = camera(Vec3::NEG_Z, Vec3::Y);
        let sample = PixelSample {
            aa_grid: 2,
            ..PixelSample::CENTER
        };
        let ray = cam.get_ray(2, 2, 0, 0, sample, &mut rng);

        // Top-left quarter of the top-left pixel
        let expected = Vec3::new(-0.75, 0.75, -1.0).normalize();
        assert!((ray.direction - expected).length() < EPS);
    }

    #[test]
    fn test_depth_of_field_rays_share_focal_point() {
        let mut rng = StdRng::seed_from_u64(42);
        let origin = Vec3::new(0.0, 0.0, 3.0);
        let cam = Camera::new(Ray::new(origin, Vec3::NEG_Z), Vec3::Y, 90.0, 0.5, 5.0, 8, 1).unwrap();
        let focal_point = origin + Vec3::NEG_Z * 5.0;

        for i in 0..8 {
            let sample = PixelSample {
                dof_index: i,
                dof_count: 8,
                ..PixelSample::CENTER
            };
            // Center of a 1x1 image is straight ahead
            let ray = cam.get_ray(1, 1, 0, 0, sample, &mut rng);
            assert!((ray.origin - origin).length() <= 0.5 + EPS);
            assert!((ray.origin.z - origin.z).abs() < EPS);
            let t = (focal_point - ray.origin).length();
            assert!((ray.at(t) - focal_point).length() < 1e-6);
        }
    }

    #[test]
    fn test_single_dof_sample_has_no_jitter() {
        let mut rng = StdRng::seed_from_u64(42);
        let origin = Vec3::new(0.0, 0.0, 3.0);
        let cam = Camera::new(Ray::new(origin, Vec3::NEG_Z), Vec3::Y, 90.0, 0.5, 5.0, 8, 1).unwrap();
        let ray = cam.get_ray(1, 1, 0, 0, PixelSample::CENTER, &mut rng);
        assert_eq!(ray.origin, origin);
    }
}
