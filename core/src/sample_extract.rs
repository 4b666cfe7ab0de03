use crate::layouts::{GLWE, GLWEInfos, LWE, LWEInfos};

impl LWE {
    /// Extracts the constant coefficient of `a` as an LWE sample of dimension
    /// `n * rank`, decryptable with [`GLWESecret::to_lwe`](crate::layouts::GLWESecret::to_lwe).
    pub fn sample_extract(&mut self, a: &GLWE) {
        debug_assert_eq!(self.n().as_usize(), a.n().as_usize() * a.rank().as_usize());

        let n: usize = a.n().as_usize();
        self.body = a.body().raw()[0];

        self.mask.chunks_exact_mut(n).enumerate().for_each(|(i, res)| {
            let mask: &[u32] = a.mask(i).raw();
            res[0] = mask[0];
            res[1..].iter_mut().enumerate().for_each(|(j, x)| *x = mask[n - 1 - j].wrapping_neg());
        });
    }
}
