//! Deciding which pixels of the finish pass need supersampling.
//!
//! A pixel is supersampled when any draft pixel in the square window of
//! the given radius around it differs from it by more than the threshold
//! in some channel. Neighbors outside the image are ignored.

use crate::ImageBuffer;
use lux_core::Color;

/// True if every channel of `a` and `b` is within `threshold`.
pub fn pixels_similar(a: Color, b: Color, threshold: f64) -> bool {
    (a - b).abs().max_element() <= threshold
}

/// Whether pixel (x, y) differs from any draft neighbor within `radius`.
pub fn needs_supersampling(
    draft: &ImageBuffer,
    x: u32,
    y: u32,
    radius: u32,
    threshold: f64,
) -> bool {
    let center = draft.get(x, y);
    let x_range = x.saturating_sub(radius)..=x.saturating_add(radius).min(draft.width - 1);
    let y_range = y.saturating_sub(radius)..=y.saturating_add(radius).min(draft.height - 1);

    y_range.into_iter().any(|ny| {
        x_range
            .clone()
            .any(|nx| !pixels_similar(center, draft.get(nx, ny), threshold))
    })
}

/// Supersampling flag for every pixel of the draft, row-major.
pub fn supersample_mask(draft: &ImageBuffer, radius: u32, threshold: f64) -> Vec<bool> {
    let mut mask = Vec::with_capacity(draft.pixels.len());
    for y in 0..draft.height {
        for x in 0..draft.width {
            mask.push(needs_supersampling(draft, x, y, radius, threshold));
        }
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    const RADIUS: u32 = 4;
    const THRESHOLD: f64 = 0.01;

    fn uniform(width: u32, height: u32) -> ImageBuffer {
        let mut image = ImageBuffer::new(width, height);
        image.pixels.fill(Color::new(0.3, 0.5, 0.7));
        image
    }

    #[test]
    fn test_pixels_similar() {
        let a = Color::new(0.5, 0.5, 0.5);
        assert!(pixels_similar(a, a + Color::splat(0.005), THRESHOLD));
        assert!(!pixels_similar(a, a + Color::new(0.0, 0.0, 0.02), THRESHOLD));
    }

    #[test]
    fn test_uniform_draft_flags_nothing() {
        let draft = uniform(20, 15);
        assert!(supersample_mask(&draft, RADIUS, THRESHOLD).iter().all(|&f| !f));
    }

    #[test]
    fn test_single_outlier_flags_its_window() {
        let mut draft = uniform(20, 15);
        let (px, py) = (10, 7);
        draft.set(px, py, Color::new(0.3, 0.5, 0.9));

        let mask = supersample_mask(&draft, RADIUS, THRESHOLD);
        for y in 0..draft.height {
            for x in 0..draft.width {
                let inside = x.abs_diff(px) <= RADIUS && y.abs_diff(py) <= RADIUS;
                assert_eq!(mask[(y * draft.width + x) as usize], inside, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_outlier_near_edge() {
        let mut draft = uniform(6, 6);
        draft.set(0, 0, Color::ZERO);

        let mask = supersample_mask(&draft, RADIUS, THRESHOLD);
        assert_eq!(mask.iter().filter(|&&f| f).count(), 25);
        assert!(!mask[5]);
        assert!(mask[4 * 6 + 4]);
    }

    #[test]
    fn test_small_difference_is_ignored() {
        let mut draft = uniform(9, 9);
        draft.set(4, 4, Color::new(0.305, 0.5, 0.7));
        assert!(!needs_supersampling(&draft, 4, 4, RADIUS, THRESHOLD));
        assert!(!needs_supersampling(&draft, 0, 0, RADIUS, THRESHOLD));
    }
}
