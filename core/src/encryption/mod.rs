//! Secret-key encryption of ciphertexts and evaluation keys.
//!
//! Encryption methods follow a consistent pattern with PRNG sources:
//! - `source_xa`: source for mask sampling
//! - `source_xe`: source for error sampling
//!
//! Errors are rejection-sampled Gaussians bounded by
//! [`SIGMA_BOUND`](crate::parameters::SIGMA_BOUND) standard deviations.

mod ggsw;
mod glwe;
mod lwe;
mod lwe_ksk;
