//! Scene container.

use crate::camera::Camera;
use crate::renderer::{render, ImageBuffer, RenderConfig, RenderMode, RenderResult};
use lux_core::{Color, Light, Surface};
use lux_math::{Intersection, Interval, Ray};

/// Everything needed to render one view.
///
/// Surfaces are tested in a linear scan, in insertion order.
#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: Camera,
    /// Color returned for rays that hit nothing
    pub background: Color,
    pub surfaces: Vec<Surface>,
    pub lights: Vec<Light>,
}

impl Scene {
    pub fn new(camera: Camera, background: Color) -> Self {
        Self {
            camera,
            background,
            surfaces: Vec::new(),
            lights: Vec::new(),
        }
    }

    pub fn add_surface(&mut self, surface: impl Into<Surface>) {
        self.surfaces.push(surface.into());
    }

    /// Add several surfaces at once, e.g. the faces of a cuboid.
    pub fn add_surfaces<S: Into<Surface>>(&mut self, surfaces: impl IntoIterator<Item = S>) {
        self.surfaces.extend(surfaces.into_iter().map(Into::into));
    }

    pub fn add_light(&mut self, light: impl Into<Light>) {
        self.lights.push(light.into());
    }

    /// Closest surface hit by the ray, with the hit itself.
    pub fn nearest_intersection(&self, ray: &Ray) -> Option<(&Surface, Intersection)> {
        let mut nearest: Option<(&Surface, Intersection)> = None;
        for surface in &self.surfaces {
            if let Some(hit) = surface.intersection(ray) {
                let closer = nearest
                    .as_ref()
                    .map_or(true, |(_, best)| hit.distance < best.distance);
                if closer {
                    nearest = Some((surface, hit));
                }
            }
        }
        nearest
    }

    /// Fraction of light that makes it along `shadow_ray` to `light`.
    ///
    /// Every blocker further than `bias` that the light considers in the way
    /// multiplies the result by its transparency (`1 - opacity`).
    pub fn transparency_towards(&self, light: &Light, shadow_ray: &Ray, bias: f64) -> f64 {
        let beyond_bias = Interval::new(bias, f64::INFINITY);
        let mut transparency = 1.0;
        for surface in &self.surfaces {
            if let Some(hit) = surface.intersection(shadow_ray) {
                if beyond_bias.surrounds(hit.distance) && light.is_blocked_by(shadow_ray.origin, &hit) {
                    transparency *= 1.0 - surface.shading_properties().opacity;
                }
            }
        }
        transparency
    }

    /// Render with the default configuration.
    pub fn render(&self, mode: RenderMode, width: u32, height: u32) -> RenderResult<ImageBuffer> {
        render(self, mode, width, height, &RenderConfig::default())
    }

    pub fn render_with_config(
        &self,
        mode: RenderMode,
        width: u32,
        height: u32,
        config: &RenderConfig,
    ) -> RenderResult<ImageBuffer> {
        render(self, mode, width, height, config)
    }
}
