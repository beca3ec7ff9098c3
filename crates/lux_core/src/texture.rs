//! Diffuse textures.
//!
//! A texture maps surface texture coordinates (u, v) to an albedo. The
//! meaning of (u, v) depends on the surface: planar distance for planes,
//! polar coordinates for discs and spherical angles for spheres.

use crate::color::{dither, Color};
use rand::RngCore;

/// Default per-channel dither applied by checkerboard textures.
pub const CHECKERBOARD_DITHER: f64 = 0.005;

/// Closed set of diffuse textures.
#[derive(Debug, Clone, PartialEq)]
pub enum Texture {
    Solid(SolidTexture),
    Checkerboard(CheckerboardTexture),
}

impl Texture {
    /// Shorthand for a solid texture.
    pub fn solid(color: Color) -> Self {
        Texture::Solid(SolidTexture { color })
    }

    /// Diffuse color at the given texture coordinates.
    pub fn albedo_at(&self, u: f64, v: f64, rng: &mut dyn RngCore) -> Color {
        match self {
            Texture::Solid(solid) => solid.color,
            Texture::Checkerboard(checker) => checker.albedo_at(u, v, rng),
        }
    }

    /// Whether `albedo_at` depends on (u, v) at all.
    ///
    /// When it does not, the renderer skips the texture coordinate mapping
    /// and passes (0, 0).
    pub fn needs_texture_coordinates(&self) -> bool {
        match self {
            Texture::Solid(_) => false,
            Texture::Checkerboard(_) => true,
        }
    }
}

/// One uniform color everywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidTexture {
    pub color: Color,
}

/// Two colors alternating in a checkerboard pattern.
///
/// Along each axis the pattern repeats every `pitch`: the first half of
/// each period shows one color and the second half the other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckerboardTexture {
    pub color1: Color,
    pub color2: Color,
    pub u_pitch: f64,
    pub v_pitch: f64,
    /// Random per-channel variation applied to the chosen color
    pub dither: f64,
}

impl CheckerboardTexture {
    pub fn new(color1: Color, color2: Color, u_pitch: f64, v_pitch: f64) -> Self {
        Self {
            color1,
            color2,
            u_pitch,
            v_pitch,
            dither: CHECKERBOARD_DITHER,
        }
    }

    /// Set the dither amount (0 disables dithering).
    pub fn with_dither(mut self, dither: f64) -> Self {
        self.dither = dither;
        self
    }

    pub fn albedo_at(&self, u: f64, v: f64, rng: &mut dyn RngCore) -> Color {
        let color = if in_first_half(u, self.u_pitch) == in_first_half(v, self.v_pitch) {
            self.color1
        } else {
            self.color2
        };
        dither(color, self.dither, rng)
    }
}

impl From<SolidTexture> for Texture {
    fn from(texture: SolidTexture) -> Self {
        Texture::Solid(texture)
    }
}

impl From<CheckerboardTexture> for Texture {
    fn from(texture: CheckerboardTexture) -> Self {
        Texture::Checkerboard(texture)
    }
}

/// True if `position` falls in the first half of its period.
fn in_first_half(position: f64, pitch: f64) -> bool {
    let mut fraction = (position / pitch).fract();
    if fraction < 0.0 {
        fraction += 1.0;
    }
    fraction < 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPS: f64 = 0.01;

    fn close(a: Color, b: Color) -> bool {
        (a - b).abs().max_element() < EPS
    }

    #[test]
    fn test_checkerboard_pattern() {
        let c1 = Color::new(0.2, 0.4, 0.6);
        let c2 = Color::new(0.9, 0.8, 0.7);
        let texture = CheckerboardTexture::new(c1, c2, 1.0, 2.0);
        let mut rng = StdRng::seed_from_u64(42);

        assert!(close(texture.albedo_at(0.1, 0.1, &mut rng), c1));
        assert!(close(texture.albedo_at(0.6, 0.1, &mut rng), c2));
        assert!(close(texture.albedo_at(1.1, 0.1, &mut rng), c1));
        assert!(close(texture.albedo_at(-0.1, 0.1, &mut rng), c2));
        assert!(close(texture.albedo_at(-0.6, 0.1, &mut rng), c1));
        assert!(close(texture.albedo_at(0.1, 1.1, &mut rng), c2));
        assert!(close(texture.albedo_at(0.1, 2.1, &mut rng), c1));
    }

    #[test]
    fn test_checkerboard_without_dither_is_exact() {
        let c1 = Color::new(0.2, 0.4, 0.6);
        let c2 = Color::new(0.9, 0.8, 0.7);
        let texture = CheckerboardTexture::new(c1, c2, 1.0, 1.0).with_dither(0.0);
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(texture.albedo_at(0.25, 0.25, &mut rng), c1);
        assert_eq!(texture.albedo_at(0.75, 0.25, &mut rng), c2);
        assert_eq!(texture.albedo_at(0.75, 0.75, &mut rng), c1);
    }

    #[test]
    fn test_solid_texture() {
        let color = Color::new(0.3, 0.2, 0.1);
        let texture = Texture::solid(color);
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(texture.albedo_at(5.0, -3.0, &mut rng), color);
        assert!(!texture.needs_texture_coordinates());
        assert!(Texture::from(CheckerboardTexture::new(color, color, 1.0, 1.0))
            .needs_texture_coordinates());
    }
}
