use crate::color::Color;
use crate::error::{ensure_non_negative, ensure_positive, ensure_unit_range, SceneError, SceneResult};
use crate::texture::Texture;

/// Material response of a surface.
///
/// Opacity and reflectivity split incoming light three ways: `1 - opacity`
/// is refracted, `reflectivity * opacity` is mirror-reflected and the
/// remainder is diffuse. The specular highlight is added on top of that
/// split, scaled by `specular_intensity`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadingProperties {
    /// Diffuse albedo
    pub texture: Texture,
    /// Phong exponent for the specular highlight
    pub specular_exponent: f64,
    /// Weight of the specular highlight
    pub specular_intensity: f64,
    /// 1 is fully opaque, 0 fully transparent
    pub opacity: f64,
    /// Fraction of the opaque part that is mirror-reflected
    pub reflectivity: f64,
    /// Index of refraction, only used when `opacity < 1`
    pub refractive_index: f64,
}

impl Default for ShadingProperties {
    fn default() -> Self {
        Self {
            texture: Texture::solid(Color::splat(0.5)),
            specular_exponent: 0.0,
            specular_intensity: 0.0,
            opacity: 1.0,
            reflectivity: 0.0,
            refractive_index: 1.0,
        }
    }
}

impl ShadingProperties {
    /// Opaque, non-reflective material with the given texture.
    pub fn with_texture(texture: impl Into<Texture>) -> Self {
        Self {
            texture: texture.into(),
            ..Default::default()
        }
    }

    /// Check that every parameter is in range.
    pub fn validate(&self) -> SceneResult<()> {
        ensure_non_negative("specular exponent", self.specular_exponent)?;
        ensure_non_negative("specular intensity", self.specular_intensity)?;
        ensure_unit_range("opacity", self.opacity)?;
        ensure_unit_range("reflectivity", self.reflectivity)?;
        if self.opacity < 1.0 && (self.refractive_index.is_nan() || self.refractive_index < 1.0) {
            return Err(SceneError::RefractiveIndexBelowOne(self.refractive_index));
        }
        if let Texture::Checkerboard(checker) = &self.texture {
            ensure_positive("checkerboard u pitch", checker.u_pitch)?;
            ensure_positive("checkerboard v pitch", checker.v_pitch)?;
            ensure_non_negative("checkerboard dither", checker.dither)?;
        }
        Ok(())
    }
}
