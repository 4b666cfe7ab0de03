use boolgate_backend::mod_switch_2n;

use crate::{
    blind_rotation::{BlindRotationKey, BlindRotationKeyInfos, LookupTable},
    layouts::{GLWE, GLWEInfos, LWE, LWEInfos},
};

impl GLWE {
    /// Sets `self` to an encryption of `X^{-phase(lwe)} * lut` where the phase
    /// is rounded to `Z_{2N}`.
    pub fn blind_rotate(&mut self, lwe: &LWE, lut: &LookupTable, brk: &BlindRotationKey) {
        debug_assert_eq!(self.n(), brk.n_glwe(), "res.n(): {} != brk.n_glwe(): {}", self.n(), brk.n_glwe());
        debug_assert_eq!(lut.n(), brk.n_glwe(), "lut.n(): {} != brk.n_glwe(): {}", lut.n(), brk.n_glwe());
        debug_assert_eq!(self.rank(), brk.rank());
        debug_assert_eq!(lwe.n(), brk.n_lwe(), "lwe.n(): {} != brk.n_lwe(): {}", lwe.n(), brk.n_lwe());

        let two_n: usize = 2 * self.n().as_usize();
        let log_2n: usize = self.n().log2() + 1;

        let b: usize = mod_switch_2n(lwe.body(), log_2n);

        // acc = X^{-b} * LUT
        self.zero();
        self.body_mut().rotate_from(two_n - b, lut.data());

        let mut acc_rot: GLWE = GLWE::alloc_from_infos(&self.glwe_layout());
        let mut acc_tmp: GLWE = GLWE::alloc_from_infos(&self.glwe_layout());

        lwe.mask().iter().enumerate().for_each(|(i, &a)| {
            let ai: usize = mod_switch_2n(a, log_2n);
            if ai == 0 {
                return;
            }
            // acc_rot = (X^{-a_i} - 1) * acc
            acc_rot.mul_xp_minus_one_from(two_n - ai, self);
            // acc += BRK_i x acc_rot
            acc_tmp.external_product(&acc_rot, brk.at(i));
            self.add_inplace(&acc_tmp);
        });
    }
}

#[cfg(test)]
mod tests {
    use boolgate_backend::{Base2K, Degree, Dnum, MU, Rank, Torus, encode_bool, mod_switch_2n, torus_to_f64};
    use boolgate_sampling::{RngCore, Source};

    use crate::{
        blind_rotation::{BlindRotationKey, BlindRotationKeyLayout, LookupTable},
        layouts::{GLWE, GLWESecret, LWE, LWESecret},
    };

    const SIGMA_GLWE: f64 = 2.9802322387695312e-8;

    #[test]
    fn rotation_matches_plaintext_lut() {
        let layout: BlindRotationKeyLayout = BlindRotationKeyLayout {
            n_glwe: Degree(64),
            n_lwe: Degree(16),
            base2k: Base2K(6),
            dnum: Dnum(3),
            rank: Rank(1),
        };

        let mut source_xs: Source = Source::new([21u8; 32]);
        let mut source_xa: Source = Source::new([22u8; 32]);
        let mut source_xe: Source = Source::new([23u8; 32]);

        let mut sk_glwe: GLWESecret = GLWESecret::alloc(layout.n_glwe, layout.rank);
        sk_glwe.fill_binary(&mut source_xs);
        let mut sk_lwe: LWESecret = LWESecret::alloc(layout.n_lwe);
        sk_lwe.fill_binary(&mut source_xs);

        let mut brk: BlindRotationKey = BlindRotationKey::alloc(&layout);
        brk.encrypt_sk(&sk_glwe, &sk_lwe, SIGMA_GLWE, &mut source_xa, &mut source_xe);

        let lut: LookupTable = LookupTable::from_fn(layout.n_glwe, |i| (i as u32) << 22);
        let log_2n: usize = layout.n_glwe.log2() + 1;

        (0..8).for_each(|_| {
            // Noiseless sample so the rounded phase is known exactly.
            let mut lwe: LWE = LWE::alloc(layout.n_lwe);
            lwe.fill_mask_uniform(&mut source_xa);
            lwe.mask.iter_mut().for_each(|a| *a &= !((1 << 25) - 1));
            lwe.body = source_xa.next_u32() & !((1 << 25) - 1);

            let phase: Torus = lwe.phase(&sk_lwe);
            let k: usize = mod_switch_2n(phase, log_2n);

            let mut res: GLWE = GLWE::alloc(layout.n_glwe, layout.rank);
            res.blind_rotate(&lwe, &lut, &brk);

            let have: Torus = res.phase(&sk_glwe).raw()[0];
            let err: f64 = torus_to_f64(have.wrapping_sub(lut.eval(k)));
            assert!(err.abs() < 1e-3, "k={k} err={err}");
        });
    }

    #[test]
    fn sign_of_encrypted_bit() {
        let layout: BlindRotationKeyLayout = BlindRotationKeyLayout {
            n_glwe: Degree(128),
            n_lwe: Degree(32),
            base2k: Base2K(6),
            dnum: Dnum(3),
            rank: Rank(1),
        };

        let mut source_xs: Source = Source::new([24u8; 32]);
        let mut source_xa: Source = Source::new([25u8; 32]);
        let mut source_xe: Source = Source::new([26u8; 32]);

        let mut sk_glwe: GLWESecret = GLWESecret::alloc(layout.n_glwe, layout.rank);
        sk_glwe.fill_binary(&mut source_xs);
        let mut sk_lwe: LWESecret = LWESecret::alloc(layout.n_lwe);
        sk_lwe.fill_binary(&mut source_xs);

        let mut brk: BlindRotationKey = BlindRotationKey::alloc(&layout);
        brk.encrypt_sk(&sk_glwe, &sk_lwe, SIGMA_GLWE, &mut source_xa, &mut source_xe);

        let lut: LookupTable = LookupTable::constant(layout.n_glwe, MU);

        for bit in [true, false, true, false] {
            let mut lwe: LWE = LWE::alloc(layout.n_lwe);
            lwe.encrypt_sk(encode_bool(bit), &sk_lwe, 9.5367431640625e-7, &mut source_xa, &mut source_xe);

            let mut res: GLWE = GLWE::alloc(layout.n_glwe, layout.rank);
            res.blind_rotate(&lwe, &lut, &brk);

            let mut extracted: LWE = LWE::alloc(layout.n_glwe);
            extracted.sample_extract(&res);
            assert_eq!(extracted.decrypt_bool(&sk_glwe.to_lwe()), bit);
        }
    }
}
