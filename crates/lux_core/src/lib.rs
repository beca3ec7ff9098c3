//! Scene description types for lux.
//!
//! Surfaces, lights and the shading model they carry. Everything here is
//! validated on construction and immutable afterwards, so a built scene
//! can be shared freely between render threads.

mod color;
mod cuboid;
mod disc;
mod distant_light;
mod error;
mod light;
mod plane;
mod point_light;
mod shading;
mod sphere;
mod surface;
mod texture;

pub use color::{dither, Color};
pub use cuboid::cuboid;
pub use disc::Disc;
pub use distant_light::DistantLight;
pub use error::{SceneError, SceneResult};
pub use light::Light;
pub use plane::Plane;
pub use point_light::PointLight;
pub use shading::ShadingProperties;
pub use sphere::Sphere;
pub use surface::Surface;
pub use texture::{CheckerboardTexture, SolidTexture, Texture, CHECKERBOARD_DITHER};

/// Re-export math types from lux_math
pub use lux_math::{Intersection, Ray, Vec3};
