use boolgate_backend::TorusPoly;
use boolgate_sampling::{Source, add_normal_torus, fill_uniform_torus};

use crate::{
    layouts::{GLWE, GLWEInfos, GLWESecret},
    parameters::SIGMA_BOUND,
};

impl GLWE {
    /// Encrypts `pt`: uniform masks `a_i` and body `pt + e - sum_i a_i * s_i`.
    pub fn encrypt_sk(&mut self, pt: &TorusPoly, sk: &GLWESecret, sigma: f64, source_xa: &mut Source, source_xe: &mut Source) {
        #[cfg(debug_assertions)]
        {
            assert_eq!(self.n(), sk.n());
            assert_eq!(self.rank(), sk.rank());
            assert_eq!(self.n().as_usize(), pt.n());
        }

        let (body, masks) = self.data.split_at_mut(1);
        let body: &mut TorusPoly = &mut body[0];

        body.copy_from(pt);
        add_normal_torus(body.raw_mut(), sigma, SIGMA_BOUND, source_xe);

        masks.iter_mut().enumerate().for_each(|(i, a)| {
            fill_uniform_torus(a.raw_mut(), source_xa);
            body.sub_mul_int(sk.at(i), a);
        });
    }

    pub fn encrypt_zero_sk(&mut self, sk: &GLWESecret, sigma: f64, source_xa: &mut Source, source_xe: &mut Source) {
        let zero: TorusPoly = TorusPoly::alloc(self.n());
        self.encrypt_sk(&zero, sk, sigma, source_xa, source_xe);
    }
}
