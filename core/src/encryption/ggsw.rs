use boolgate_backend::GadgetDecomposer;
use boolgate_sampling::Source;

use crate::layouts::{GGSW, GGSWInfos, GLWEInfos, GLWESecret};

impl GGSW {
    /// Encrypts the small integer `m` (a secret key bit in practice).
    pub fn encrypt_sk(&mut self, m: i32, sk: &GLWESecret, sigma: f64, source_xa: &mut Source, source_xe: &mut Source) {
        #[cfg(debug_assertions)]
        {
            assert_eq!(self.n(), sk.n());
            assert_eq!(self.rank(), sk.rank());
        }

        let decomposer: GadgetDecomposer = GadgetDecomposer::new(self.base2k(), self.dnum());
        let cols: usize = self.rank().as_usize() + 1;

        (0..self.dnum().as_usize()).for_each(|row| {
            let gm: u32 = (m as u32).wrapping_mul(decomposer.gadget(row));
            (0..cols).for_each(|col| {
                let glwe = self.at_mut(row, col);
                glwe.encrypt_zero_sk(sk, sigma, source_xa, source_xe);
                let c0: &mut u32 = &mut glwe.at_mut(col).raw_mut()[0];
                *c0 = c0.wrapping_add(gm);
            });
        });
    }
}
