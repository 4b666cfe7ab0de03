//! Torus and negacyclic polynomial arithmetic.
//!
//! Everything above this crate works over the discretized torus
//! `T_q = Z / 2^32 Z`, stored as `u32` residues, and over the ring
//! `Z[X] / (X^N + 1)`. All torus arithmetic wraps; overflow is the
//! reduction modulo `2^32`, never an error.
//!
//! | Module | Content |
//! |---|---|
//! | [`layouts`] | `u32` newtypes for domain sizes ([`Degree`], [`Rank`], [`Base2K`], [`Dnum`]) |
//! | [`torus`] | Boolean encoding, phase decoding and modulus switching |
//! | [`poly`] | [`TorusPoly`], [`IntPoly`] and their ring operations |
//! | [`decomposition`] | Signed gadget decomposition |

pub mod decomposition;
pub mod layouts;
pub mod poly;
pub mod torus;

pub use decomposition::*;
pub use layouts::*;
pub use poly::*;
pub use torus::*;
