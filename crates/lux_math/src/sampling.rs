//! Random sampling helpers shared by lights, the camera and textures.

use rand::{Rng, RngCore};
use std::f64::consts::TAU;

/// Uniform random number in [0, 1).
#[inline]
pub fn gen_f64(rng: &mut dyn RngCore) -> f64 {
    rng.gen::<f64>()
}

/// Random offset inside a disk of the given radius.
///
/// The radius is drawn as `radius * sqrt(u)` so samples are uniform over
/// the disk area, and the angle is stratified: sample `index` of `count`
/// lands in the `index`-th of `count` equal angular sectors. Returns the
/// offset along the two in-plane axes.
pub fn disk_offset(radius: f64, index: usize, count: usize, rng: &mut dyn RngCore) -> (f64, f64) {
    let count = count.max(1);
    let index = index % count;
    let r = radius * gen_f64(rng).sqrt();
    let phi = (index as f64 + gen_f64(rng)) * TAU / count as f64;
    (r * phi.cos(), r * phi.sin())
}
