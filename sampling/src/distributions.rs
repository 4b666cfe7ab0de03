use rand_distr::{Distribution, Normal};
use rand_core::RngCore;

use crate::source::Source;

/// 2^32 as f64: scale from a fraction of the torus to a `u32` residue.
pub const TORUS_SCALE: f64 = 4294967296.0;

/// Fills `res` with independent uniform torus elements.
pub fn fill_uniform_torus(res: &mut [u32], source: &mut Source) {
    res.iter_mut().for_each(|xi| *xi = source.next_u32())
}

/// Fills `res` with independent uniform bits in {0, 1}.
pub fn fill_binary(res: &mut [i32], source: &mut Source) {
    res.iter_mut().for_each(|xi| *xi = source.next_bool() as i32)
}

/// Samples a rounded centered Gaussian error with standard deviation `sigma`,
/// expressed as a fraction of the torus, rejecting samples above `bound`
/// standard deviations.
pub fn sample_normal_torus(sigma: f64, bound: f64, source: &mut Source) -> u32 {
    if sigma == 0.0 {
        return 0;
    }
    let normal: Normal<f64> = Normal::new(0.0, sigma * TORUS_SCALE).expect("sigma must be finite and non-negative");
    let bound: f64 = bound * sigma * TORUS_SCALE;
    let mut x: f64 = normal.sample(source);
    while x.abs() > bound {
        x = normal.sample(source)
    }
    (x.round() as i64) as u32
}

/// Adds independent Gaussian errors to every coefficient of `res`.
pub fn add_normal_torus(res: &mut [u32], sigma: f64, bound: f64, source: &mut Source) {
    res.iter_mut()
        .for_each(|xi| *xi = xi.wrapping_add(sample_normal_torus(sigma, bound, source)))
}
