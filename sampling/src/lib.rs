//! Seeded randomness for key generation and encryption.
//!
//! Every random draw made by the workspace goes through a [`Source`]: a
//! ChaCha8 stream built from an explicit 32-byte seed. There is no thread
//! local or global generator; callers thread a `&mut Source` through each
//! operation, so two runs started from the same seed consume identical
//! streams in identical order.

pub mod distributions;
pub mod source;

pub use distributions::*;
pub use rand_core::RngCore;
pub use source::*;
