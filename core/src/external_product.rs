use boolgate_backend::{GadgetDecomposer, IntPoly};

use crate::layouts::{GGSW, GGSWInfos, GLWE, GLWEInfos};

impl GLWE {
    /// Sets `self` to the external product `ggsw x a`: every column of `a`
    /// is gadget-decomposed and the digits are multiplied with the matching
    /// GGSW rows. If `ggsw` encrypts `m`, the phase of the result is close to
    /// `m * phase(a)`.
    pub fn external_product(&mut self, a: &GLWE, ggsw: &GGSW) {
        #[cfg(debug_assertions)]
        {
            assert_eq!(self.glwe_layout(), a.glwe_layout());
            assert_eq!(self.n(), ggsw.n());
            assert_eq!(self.rank(), ggsw.rank());
        }

        let decomposer: GadgetDecomposer = GadgetDecomposer::new(ggsw.base2k(), ggsw.dnum());
        let cols: usize = self.rank().as_usize() + 1;
        let mut digits: Vec<IntPoly> = (0..ggsw.dnum().as_usize()).map(|_| IntPoly::alloc(self.n())).collect();

        self.zero();

        (0..cols).for_each(|col_in| {
            decomposer.decompose_poly(a.at(col_in), &mut digits);
            digits.iter().enumerate().for_each(|(row, d)| {
                let glwe: &GLWE = ggsw.at(row, col_in);
                (0..cols).for_each(|col_out| self.at_mut(col_out).add_mul_int(d, glwe.at(col_out)));
            });
        });
    }

    pub fn external_product_inplace(&mut self, ggsw: &GGSW) {
        let a: GLWE = self.clone();
        self.external_product(&a, ggsw);
    }
}
