use boolgate_backend::Torus;
use boolgate_sampling::{Source, sample_normal_torus};

use crate::{
    layouts::{LWE, LWEInfos, LWESecret},
    parameters::SIGMA_BOUND,
};

impl LWE {
    /// Encrypts the torus plaintext `pt`: `b = pt + e - <a, s>`.
    pub fn encrypt_sk(&mut self, pt: Torus, sk: &LWESecret, sigma: f64, source_xa: &mut Source, source_xe: &mut Source) {
        debug_assert_eq!(self.n(), sk.n());

        self.fill_mask_uniform(source_xa);

        let dot: Torus = self
            .mask
            .iter()
            .zip(sk.raw())
            .fold(0u32, |acc, (a, s)| acc.wrapping_add(a.wrapping_mul(*s as u32)));

        self.body = pt
            .wrapping_sub(dot)
            .wrapping_add(sample_normal_torus(sigma, SIGMA_BOUND, source_xe));
    }
}
