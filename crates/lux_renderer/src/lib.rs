//! Lux renderer - recursive CPU ray tracing
//!
//! Shades camera rays through a [`Scene`] with reflection, refraction,
//! soft shadows and depth of field. Rendering runs in two passes: a cheap
//! one-ray-per-pixel draft, then a finish pass that spends full
//! supersampling only where the draft shows edges or fine detail.

mod adaptive;
mod camera;
mod renderer;
mod rows;
mod scene;

pub use adaptive::{needs_supersampling, pixels_similar, supersample_mask};
pub use camera::{Camera, PixelSample};
pub use renderer::{
    clamp_01, color_to_rgba, render, render_pixel, ImageBuffer, RenderConfig, RenderError,
    RenderMode, RenderResult, TraceStats, Tracer,
};
pub use scene::Scene;

/// Re-export the scene description and math types
pub use lux_core::*;
pub use lux_math::Interval;
