use boolgate_backend::{Torus, TorusPoly, decode_bool};

use crate::layouts::{GLWE, GLWEInfos, GLWESecret, LWE, LWEInfos, LWESecret};

impl LWE {
    /// Phase `b + <a, s>`: the plaintext plus noise.
    pub fn phase(&self, sk: &LWESecret) -> Torus {
        debug_assert_eq!(self.n(), sk.n());
        self.mask
            .iter()
            .zip(sk.raw())
            .fold(self.body, |acc, (a, s)| acc.wrapping_add(a.wrapping_mul(*s as u32)))
    }

    pub fn decrypt_bool(&self, sk: &LWESecret) -> bool {
        decode_bool(self.phase(sk))
    }
}

impl GLWE {
    /// Phase `body + sum_i a_i * s_i`.
    pub fn phase(&self, sk: &GLWESecret) -> TorusPoly {
        debug_assert_eq!(self.n(), sk.n());
        debug_assert_eq!(self.rank(), sk.rank());
        let mut res: TorusPoly = self.body().clone();
        (0..self.rank().as_usize()).for_each(|i| res.add_mul_int(sk.at(i), self.mask(i)));
        res
    }
}
