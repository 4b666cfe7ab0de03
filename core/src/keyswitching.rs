use boolgate_backend::GadgetDecomposer;

use crate::layouts::{LWE, LWEInfos, LWESwitchingKey, LWESwitchingKeyInfos};

impl LWE {
    /// Sets `self` to `a` re-encrypted under the output key of `ksk`.
    pub fn keyswitch(&mut self, a: &LWE, ksk: &LWESwitchingKey) {
        debug_assert_eq!(a.n(), ksk.n_in());
        debug_assert_eq!(self.n(), ksk.n_out());

        let decomposer: GadgetDecomposer = GadgetDecomposer::new(ksk.base2k(), ksk.dnum());
        let mut digits: Vec<i32> = vec![0; ksk.dnum().as_usize()];

        self.zero();
        self.body = a.body;

        a.mask.iter().enumerate().for_each(|(i, &ai)| {
            decomposer.decompose(ai, &mut digits);
            digits
                .iter()
                .enumerate()
                .filter(|(_, d)| **d != 0)
                .for_each(|(j, &d)| self.add_scaled_inplace(d, ksk.at(i, j)));
        });
    }
}
