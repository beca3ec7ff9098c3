//! Recursive ray tracer.
//!
//! Implements Whitted-style ray tracing with:
//! - Fresnel-weighted refraction and mirror reflection, recursing to a fixed depth
//! - Lambertian diffuse and Phong specular terms from every light
//! - Soft shadows through translucent occluders
//! - Depth of field and antialiasing by supersampling the camera

use crate::camera::PixelSample;
use crate::rows::{render_pass, Pass};
use crate::Scene;
use lux_core::{Color, Surface};
use lux_math::{Intersection, Interval, Ray, Vec3};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::time::Instant;
use thiserror::Error;

/// Errors that can occur while rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("width and height must be positive numbers (got {width}x{height})")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("failed to start render threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// How much work a render does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// One ray per pixel, one shadow sample per light
    Draft,
    /// A draft pass, then full supersampling wherever the draft shows detail
    Finish,
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Recursion depth at which rays return the background color
    pub max_depth: u32,
    /// Offset applied to reflected and refracted ray origins
    pub ray_bias: f64,
    /// Minimum distance for a shadow ray hit to count as an occluder
    pub shadow_bias: f64,
    /// Per-channel difference above which two draft pixels are distinct
    pub color_threshold: f64,
    /// Radius of the square neighborhood compared against the draft
    pub adjacent_pixels: u32,
    /// Worker thread count; `None` uses every available core
    pub worker_threads: Option<usize>,
    /// Seed for every random choice; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 20,
            ray_bias: 0.001,
            shadow_bias: 0.001,
            color_threshold: 0.01,
            adjacent_pixels: 4,
            worker_threads: None,
            seed: None,
        }
    }
}

/// Counters gathered while tracing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceStats {
    /// Calls to [`Tracer::trace`], camera rays and secondary rays alike
    pub rays: u64,
    /// Deepest recursion level reached
    pub max_depth: u32,
}

impl TraceStats {
    fn record(&mut self, depth: u32) {
        self.rays += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    pub fn merge(self, other: TraceStats) -> TraceStats {
        TraceStats {
            rays: self.rays + other.rays,
            max_depth: self.max_depth.max(other.max_depth),
        }
    }
}

/// Shades rays against one scene.
///
/// `supersample` selects how many shadow samples each light gets: one in a
/// draft, the light's full count for pixels flagged in the finish pass.
pub struct Tracer<'a> {
    scene: &'a Scene,
    config: &'a RenderConfig,
    supersample: bool,
    stats: TraceStats,
}

impl<'a> Tracer<'a> {
    pub fn new(scene: &'a Scene, config: &'a RenderConfig, supersample: bool) -> Self {
        Self {
            scene,
            config,
            supersample,
            stats: TraceStats::default(),
        }
    }

    pub fn stats(&self) -> TraceStats {
        self.stats
    }

    /// Color seen along `ray`.
    ///
    /// `ambient_index` is the refractive index of the medium the ray is
    /// travelling through: 1 outside every object.
    pub fn trace(
        &mut self,
        ray: &Ray,
        depth: u32,
        ambient_index: f64,
        rng: &mut dyn RngCore,
    ) -> Color {
        self.stats.record(depth);
        let scene = self.scene;
        if depth >= self.config.max_depth {
            return scene.background;
        }

        let Some((surface, hit)) = scene.nearest_intersection(ray) else {
            return scene.background;
        };
        let props = surface.shading_properties();
        let direction = ray.unit_direction();

        let mut k_refraction = 1.0 - props.opacity;
        let mut k_reflection = props.reflectivity * props.opacity;
        let k_diffuse = 1.0 - k_refraction - k_reflection;
        let k_specular = props.specular_intensity;

        let mut refracted = Color::ZERO;
        if k_refraction > 0.0 {
            let entering = ambient_index <= 1.0;
            let (eta_in, eta_out) = if entering {
                (ambient_index, props.refractive_index)
            } else {
                (props.refractive_index, 1.0)
            };
            let cos_in = -hit.normal.dot(direction);

            match refract(direction, hit.normal, cos_in, eta_in, eta_out) {
                Some(refraction) => {
                    let shifted = refraction.reflectance * k_refraction;
                    k_refraction -= shifted;
                    k_reflection += shifted;

                    let origin = hit.point - hit.normal * self.config.ray_bias;
                    let next_index = if entering { props.refractive_index } else { 1.0 };
                    refracted = self.trace(
                        &Ray::new(origin, refraction.direction),
                        depth + 1,
                        next_index,
                        rng,
                    );
                }
                None => {
                    // Total internal reflection
                    k_reflection += k_refraction;
                    k_refraction = 0.0;
                }
            }
        }

        let reflected_direction = reflect(direction, hit.normal);
        let mut reflected = Color::ZERO;
        if k_reflection > 0.0 {
            let origin = hit.point + hit.normal * self.config.ray_bias;
            reflected = self.trace(
                &Ray::new(origin, reflected_direction),
                depth + 1,
                ambient_index,
                rng,
            );
        }

        let (diffuse, specular) = if k_diffuse > 0.0 || k_specular > 0.0 {
            self.direct_light(surface, &hit, reflected_direction, rng)
        } else {
            (Color::ZERO, Color::ZERO)
        };

        refracted * k_refraction + reflected * k_reflection + diffuse * k_diffuse + specular * k_specular
    }

    /// Diffuse and specular light arriving straight from the lights.
    fn direct_light(
        &self,
        surface: &Surface,
        hit: &Intersection,
        reflected_direction: Vec3,
        rng: &mut dyn RngCore,
    ) -> (Color, Color) {
        let props = surface.shading_properties();
        let (u, v) = if props.texture.needs_texture_coordinates() {
            surface.texture_coordinates(hit.point)
        } else {
            (0.0, 0.0)
        };
        let albedo = props.texture.albedo_at(u, v, rng);

        let mut diffuse = Color::ZERO;
        let mut specular = Color::ZERO;
        for light in &self.scene.lights {
            let samples = if self.supersample {
                light.sample_count().max(1)
            } else {
                1
            };
            let weight = 1.0 / samples as f64;

            for i in 0..samples {
                let to_light = -light.direction(hit.point, i, samples, rng);
                let shadow_ray = Ray::new(hit.point, to_light);
                let transparency =
                    self.scene
                        .transparency_towards(light, &shadow_ray, self.config.shadow_bias);
                if transparency == 0.0 {
                    continue;
                }

                let incident = light.intensity(hit.point)
                    * to_light.dot(hit.normal).max(0.0)
                    * transparency
                    * weight;
                diffuse += albedo / PI * light.color() * incident;

                let highlight = reflected_direction
                    .dot(to_light)
                    .max(0.0)
                    .powf(props.specular_exponent);
                specular += light.color() * highlight * weight;
            }
        }
        (diffuse, specular)
    }
}

/// Mirror `direction` about `normal`.
fn reflect(direction: Vec3, normal: Vec3) -> Vec3 {
    (direction - normal * 2.0 * normal.dot(direction)).normalize_or_zero()
}

struct Refraction {
    direction: Vec3,
    /// Unpolarized Fresnel reflectance at the interface
    reflectance: f64,
}

/// Snell refraction from a medium of index `eta_in` into `eta_out`.
///
/// Returns `None` on total internal reflection.
fn refract(
    direction: Vec3,
    normal: Vec3,
    cos_in: f64,
    eta_in: f64,
    eta_out: f64,
) -> Option<Refraction> {
    let sin_in = (1.0 - cos_in * cos_in).max(0.0).sqrt();
    let sin_out = eta_in / eta_out * sin_in;
    if sin_out >= 1.0 {
        return None;
    }
    let cos_out = (1.0 - sin_out * sin_out).max(0.0).sqrt();

    let r_parallel =
        (eta_out * cos_in - eta_in * cos_out) / (eta_out * cos_in + eta_in * cos_out);
    let r_perpendicular =
        (eta_in * cos_in - eta_out * cos_out) / (eta_in * cos_in + eta_out * cos_out);
    let reflectance = (r_parallel * r_parallel + r_perpendicular * r_perpendicular) / 2.0;

    let eta = eta_in / eta_out;
    let direction = (direction * eta + normal * (eta * cos_in - cos_out)).normalize_or_zero();
    Some(Refraction {
        direction,
        reflectance,
    })
}

/// Average of every camera sample of pixel (x, y).
///
/// Without supersampling this is a single ray through the pixel center.
#[allow(clippy::too_many_arguments)]
pub fn render_pixel(
    scene: &Scene,
    config: &RenderConfig,
    width: u32,
    height: u32,
    x: u32,
    y: u32,
    supersample: bool,
    rng: &mut dyn RngCore,
) -> (Color, TraceStats) {
    let camera = &scene.camera;
    let (dof_count, aa_grid) = if supersample {
        (camera.depth_of_field_samples(), camera.antialias_samples())
    } else {
        (1, 1)
    };

    let mut tracer = Tracer::new(scene, config, supersample);
    let mut pixel_color = Color::ZERO;
    for dof_index in 0..dof_count {
        for aa_x in 0..aa_grid {
            for aa_y in 0..aa_grid {
                let sample = PixelSample {
                    dof_index,
                    dof_count,
                    aa_x,
                    aa_y,
                    aa_grid,
                };
                let ray = camera.get_ray(width, height, x, y, sample, rng);
                pixel_color += tracer.trace(&ray, 0, 1.0, rng);
            }
        }
    }

    let count = dof_count as f64 * f64::from(aa_grid * aa_grid);
    (pixel_color / count, tracer.stats())
}

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp_01(x: f64) -> f64 {
    Interval::UNIT.clamp(x)
}

/// Convert a color to 8-bit RGBA. Channels are clamped and truncated with
/// no gamma applied.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let r = (255.0 * clamp_01(color.x)) as u8;
    let g = (255.0 * clamp_01(color.y)) as u8;
    let b = (255.0 * clamp_01(color.z)) as u8;
    [r, g, b, 255]
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    /// Row-major, top row first
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    pub fn row(&self, y: u32) -> &[Color] {
        let start = self.index(0, y);
        &self.pixels[start..start + self.width as usize]
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }
}

/// Render the scene.
///
/// A draft pass always runs first. In [`RenderMode::Finish`] a second pass
/// then supersamples every pixel whose draft neighborhood shows detail.
pub fn render(
    scene: &Scene,
    mode: RenderMode,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> RenderResult<ImageBuffer> {
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidDimensions { width, height });
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.worker_threads.unwrap_or(0))
        .build()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!(
        "Rendering {}x{} {:?} on {} threads ({} surfaces, {} lights)",
        width,
        height,
        mode,
        pool.current_num_threads(),
        scene.surfaces.len(),
        scene.lights.len()
    );
    log::debug!("Render seed {}", seed);

    let start = Instant::now();
    let draft = pool.install(|| render_pass(scene, config, Pass::Draft, width, height, seed, None));
    let image = match mode {
        RenderMode::Draft => draft,
        RenderMode::Finish => pool.install(|| {
            render_pass(scene, config, Pass::Finish, width, height, seed, Some(&draft))
        }),
    };
    log::info!("Render finished in {:.2?}", start.elapsed());

    Ok(image)
}
