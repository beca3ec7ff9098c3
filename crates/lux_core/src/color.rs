use lux_math::{gen_f64, Interval, Vec3};
use rand::RngCore;

/// Color type (RGB in x, y, z). Components are unbounded while light is
/// being accumulated and only clamped when a pixel is written out.
pub type Color = Vec3;

/// Vary each channel randomly by up to plus or minus `variation`,
/// clamping the result to [0, 1].
pub fn dither(color: Color, variation: f64, rng: &mut dyn RngCore) -> Color {
    if variation == 0.0 {
        return color;
    }
    let mut jitter = || (2.0 * gen_f64(rng) - 1.0) * variation;
    Color::new(
        Interval::UNIT.clamp(color.x + jitter()),
        Interval::UNIT.clamp(color.y + jitter()),
        Interval::UNIT.clamp(color.z + jitter()),
    )
}
