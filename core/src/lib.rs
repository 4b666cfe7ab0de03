//! Bit-wise homomorphic boolean gates over the torus (CGGI bootstrapping).
//!
//! `boolgate-core` encrypts single bits as LWE samples and evaluates boolean
//! gates on them. Every binary gate is a torus linear combination of its
//! inputs followed by a gate bootstrap, which resets the noise. NOT is a
//! negation and needs no evaluation key.
//!
//! **The shipped [`TOY_PARAMETERS`] offer no security.** They are sized to
//! exercise the pipeline in milliseconds.
//!
//! # Encoding
//!
//! A bit is encoded as `+1/8` (true) or `-1/8` (false) on `T = Z/2^32Z` and
//! decoded by the sign of the phase `b + <a, s>`.
//!
//! # Gate bootstrapping
//!
//! 1. Mod-switch the LWE sample to `Z_{2N}`.
//! 2. Blind-rotate the test vector `(1/8, ..., 1/8)` by the encrypted phase
//!    ([`BlindRotationKey`], one GGSW per LWE key coefficient).
//! 3. Sample-extract the constant coefficient.
//! 4. Key-switch back to the LWE key ([`LWESwitchingKey`](layouts::LWESwitchingKey)).
//!
//! # Module overview
//!
//! | Module | Responsibility |
//! |---|---|
//! | [`layouts`] | LWE, GLWE, GGSW, secrets and key-switching key layouts |
//! | encryption | Secret-key encryption with separate mask and error sources |
//! | decryption | Phase computation and bit decoding |
//! | external\_product | GGSW x GLWE product through gadget decomposition |
//! | [`blind_rotation`] | CGGI blind rotation, lookup tables and its key |
//! | sample\_extract | GLWE constant coefficient to LWE |
//! | keyswitching | LWE key switching |
//! | [`keys`] | Key pair generation and bootstrapping |
//! | [`ciphertext`] | Shaped ciphertexts, bit encryption and decryption |
//! | [`gates`] | AND, OR, XOR, NAND and NOT |
//!
//! # Example
//!
//! ```
//! use boolgate_core::{Ciphertext, TOY_PARAMETERS, decrypt, encrypt, gates, key_pair};
//! use boolgate_sampling::{DEFAULT_SEED, Source};
//!
//! let mut source = Source::new(DEFAULT_SEED);
//! let (sk, ck) = key_pair(&TOY_PARAMETERS, &mut source).unwrap();
//!
//! let a = encrypt(&mut source, &sk, &[true]);
//! let b = encrypt(&mut source, &sk, &[false]);
//! let mut out = Ciphertext::empty(ck.parameters(), a.shape());
//!
//! gates::or(&ck, &mut out, &a, &b).unwrap();
//! assert_eq!(decrypt(&sk, &out).unwrap(), vec![true]);
//! ```

mod decryption;
mod encryption;
mod external_product;
mod keyswitching;
mod sample_extract;

pub mod blind_rotation;
pub mod ciphertext;
pub mod error;
pub mod gates;
pub mod keys;
pub mod layouts;
pub mod parameters;

pub use blind_rotation::{BlindRotationKey, BlindRotationKeyLayout, LookupTable};
pub use ciphertext::{Ciphertext, decrypt, encrypt};
pub use error::GateError;
pub use keys::{CloudKey, SecretKey, key_pair};
pub use parameters::{GateParameters, MAX_GLWE_DEGREE, SIGMA_BOUND, TOY_PARAMETERS};
