use crate::error::{SceneError, SceneResult};
use crate::plane::Plane;
use crate::shading::ShadingProperties;
use lux_math::Vec3;

/// Build a closed rectangular box out of six planes.
///
/// The front face is the plane spanned by `width` and `height` from
/// `corner`; the box extends `depth` along that face's normal (negative
/// depth extends behind it). Faces are returned as
/// `[front, bottom, left, back, top, right]`.
pub fn cuboid(
    corner: Vec3,
    width: Vec3,
    height: Vec3,
    depth: f64,
    shading: ShadingProperties,
) -> SceneResult<[Plane; 6]> {
    if depth == 0.0 {
        return Err(SceneError::ZeroDepth);
    }

    let front = Plane::new(corner, width, height, shading.clone())?;
    let depth_vector = front.normal() * depth;
    let far_corner = corner + width + height + depth_vector;

    // Perpendicular by construction, up to rounding in `depth_vector`
    let bottom = Plane::from_edges(corner, depth_vector, width, shading.clone());
    let left = Plane::from_edges(corner, depth_vector, height, shading.clone());
    let back = Plane::from_edges(far_corner, -width, -height, shading.clone());
    let top = Plane::from_edges(far_corner, -depth_vector, -width, shading.clone());
    let right = Plane::from_edges(far_corner, -depth_vector, -height, shading);

    Ok([front, bottom, left, back, top, right])
}
