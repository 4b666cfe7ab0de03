//! Blind rotation: homomorphic evaluation of a negacyclic lookup table on the
//! phase of an LWE sample.
//!
//! | Type | Role |
//! |------|------|
//! | [`LookupTable`] | Test vector rotated by the encrypted phase |
//! | [`BlindRotationKey`] | One GGSW per LWE secret coefficient |
//! | [`BlindRotationKeyLayout`] | Dimensions of a [`BlindRotationKey`] |
//!
//! The accumulator starts as `X^{-b} * LUT` and, for every mask coefficient
//! `a_i`, is updated with the CMux `acc += BRK_i x ((X^{-a_i} - 1) * acc)`.
//! After the last step the accumulator encrypts `X^{-phase} * LUT`, whose
//! constant coefficient is recovered with [`LWE::sample_extract`](crate::layouts::LWE::sample_extract).
mod algorithm;
mod key;
mod lut;

pub use key::*;
pub use lut::*;
