use boolgate_backend::GadgetDecomposer;
use boolgate_sampling::Source;

use crate::layouts::{LWEInfos, LWESecret, LWESwitchingKey, LWESwitchingKeyInfos};

impl LWESwitchingKey {
    pub fn encrypt_sk(
        &mut self,
        sk_in: &LWESecret,
        sk_out: &LWESecret,
        sigma: f64,
        source_xa: &mut Source,
        source_xe: &mut Source,
    ) {
        debug_assert_eq!(self.n_in(), sk_in.n());
        debug_assert_eq!(self.n_out(), sk_out.n());

        let decomposer: GadgetDecomposer = GadgetDecomposer::new(self.base2k(), self.dnum());

        sk_in.raw().iter().enumerate().for_each(|(i, &s)| {
            (0..self.dnum().as_usize()).for_each(|j| {
                let pt: u32 = (s as u32).wrapping_mul(decomposer.gadget(j));
                self.at_mut(i, j).encrypt_sk(pt, sk_out, sigma, source_xa, source_xe);
            });
        });
    }
}
