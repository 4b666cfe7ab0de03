mod ggsw;
mod glwe;
mod glwe_sk;
mod lwe;
mod lwe_ksk;
mod lwe_sk;

pub use ggsw::*;
pub use glwe::*;
pub use glwe_sk::*;
pub use lwe::*;
pub use lwe_ksk::*;
pub use lwe_sk::*;
