use boolgate_sampling::TORUS_SCALE;

/// Element of the discretized torus `Z / 2^32 Z`.
pub type Torus = u32;

/// Plaintext magnitude of an encoded boolean: `1/8` of the torus.
pub const MU: Torus = 1 << 29;

/// Encodes `true` as `+1/8` and `false` as `-1/8`.
#[inline]
pub fn encode_bool(bit: bool) -> Torus {
    if bit { MU } else { MU.wrapping_neg() }
}

/// Decodes a phase by its sign: phases in `(0, 1/2)` are `true`.
#[inline]
pub fn decode_bool(phase: Torus) -> bool {
    (phase as i32) > 0
}

/// Rounds a real number to the nearest torus element (its fractional part).
pub fn f64_to_torus(x: f64) -> Torus {
    let frac: f64 = x - x.floor();
    (frac * TORUS_SCALE).round() as u64 as Torus
}

/// Centered real representative of a torus element, in `[-1/2, 1/2)`.
pub fn torus_to_f64(x: Torus) -> f64 {
    (x as i32) as f64 / TORUS_SCALE
}

/// Rounds `x` from `Z_{2^32}` to `Z_{2N}` where `2N = 2^log_2n`.
#[inline]
pub fn mod_switch_2n(x: Torus, log_2n: usize) -> usize {
    debug_assert!(log_2n > 0 && log_2n < 32);
    let shift: usize = 32 - log_2n;
    let rounded: u64 = (x as u64 + (1u64 << (shift - 1))) >> shift;
    (rounded as usize) & ((1usize << log_2n) - 1)
}
