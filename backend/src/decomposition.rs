use crate::{
    layouts::{Base2K, Dnum},
    poly::{IntPoly, TorusPoly},
    torus::Torus,
};

/// Signed gadget decomposition in base `2^base2k` over `dnum` digits.
///
/// A torus element `x` is first rounded to its `base2k * dnum` most
/// significant bits, then written as `sum_j d_j * 2^(32 - base2k * (j+1))`
/// with every digit in `[-2^(base2k-1), 2^(base2k-1))`. Digit `0` is the
/// most significant one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GadgetDecomposer {
    base2k: Base2K,
    dnum: Dnum,
}

impl GadgetDecomposer {
    pub fn new(base2k: Base2K, dnum: Dnum) -> Self {
        #[cfg(debug_assertions)]
        {
            assert!(base2k.0 > 0 && dnum.0 > 0);
            assert!(
                base2k.0 * dnum.0 < Torus::BITS,
                "decomposition precision base2k * dnum = {} must be < {}",
                base2k.0 * dnum.0,
                Torus::BITS
            );
        }
        Self { base2k, dnum }
    }

    pub fn base2k(&self) -> Base2K {
        self.base2k
    }

    pub fn dnum(&self) -> Dnum {
        self.dnum
    }

    /// Gadget value `2^(32 - base2k * (j+1))` for digit `j`.
    #[inline]
    pub fn gadget(&self, j: usize) -> Torus {
        1 << (Torus::BITS as usize - self.base2k.as_usize() * (j + 1))
    }

    /// Writes the `dnum` signed digits of `x` into `digits`.
    pub fn decompose(&self, x: Torus, digits: &mut [i32]) {
        let base2k: usize = self.base2k.as_usize();
        let dnum: usize = self.dnum.as_usize();
        let precision: usize = base2k * dnum;
        let shift: usize = Torus::BITS as usize - precision;

        let base: i64 = 1 << base2k;
        let half: i64 = base >> 1;
        let mask: u64 = (base - 1) as u64;

        let mut v: u64 = ((x as u64 + (1u64 << (shift - 1))) >> shift) & ((1u64 << precision) - 1);

        (0..dnum).rev().for_each(|j| {
            let mut d: i64 = (v & mask) as i64;
            v >>= base2k;
            if d >= half {
                d -= base;
                v += 1;
            }
            digits[j] = d as i32;
        });
    }

    /// Decomposes every coefficient of `a`, writing digit `j` of coefficient
    /// `i` into `res[j].raw()[i]`.
    pub fn decompose_poly(&self, a: &TorusPoly, res: &mut [IntPoly]) {
        #[cfg(debug_assertions)]
        {
            assert_eq!(res.len(), self.dnum.as_usize());
        }
        let mut digits: Vec<i32> = vec![0; self.dnum.as_usize()];
        a.raw().iter().enumerate().for_each(|(i, &x)| {
            self.decompose(x, &mut digits);
            digits.iter().zip(res.iter_mut()).for_each(|(d, r)| r.raw_mut()[i] = *d);
        });
    }

    /// Recombines digits: `sum_j d_j * g_j`.
    pub fn recompose(&self, digits: &[i32]) -> Torus {
        digits
            .iter()
            .enumerate()
            .fold(0u32, |acc, (j, &d)| acc.wrapping_add((d as u32).wrapping_mul(self.gadget(j))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boolgate_sampling::{RngCore, Source};

    #[test]
    fn digits_are_balanced_and_recompose() {
        let dec: GadgetDecomposer = GadgetDecomposer::new(Base2K(6), Dnum(3));
        let mut source: Source = Source::new([12u8; 32]);
        let mut digits: Vec<i32> = vec![0; 3];
        let max_err: i64 = 1 << (32 - 18 - 1);

        (0..2048).for_each(|_| {
            let x: u32 = source.next_u32();
            dec.decompose(x, &mut digits);
            assert!(digits.iter().all(|&d| (-32..32).contains(&d)), "{digits:?}");
            let err: i64 = (x.wrapping_sub(dec.recompose(&digits)) as i32) as i64;
            assert!(err.abs() <= max_err, "x={x} err={err}");
        });
    }

    #[test]
    fn exact_values_decompose_exactly() {
        let dec: GadgetDecomposer = GadgetDecomposer::new(Base2K(4), Dnum(2));
        let mut digits: Vec<i32> = vec![0; 2];

        dec.decompose(dec.gadget(0), &mut digits);
        assert_eq!(digits, vec![1, 0]);

        dec.decompose(dec.gadget(1).wrapping_neg(), &mut digits);
        assert_eq!(digits, vec![0, -1]);

        dec.decompose(0, &mut digits);
        assert_eq!(digits, vec![0, 0]);
    }

    #[test]
    fn poly_layout() {
        let dec: GadgetDecomposer = GadgetDecomposer::new(Base2K(8), Dnum(2));
        let a: TorusPoly = TorusPoly::from_coeffs(vec![dec.gadget(0), dec.gadget(1), 0, 3 * dec.gadget(1)]);
        let mut res: Vec<IntPoly> = (0..2).map(|_| IntPoly::alloc(4usize.into())).collect();
        dec.decompose_poly(&a, &mut res);
        assert_eq!(res[0].raw(), &[1, 0, 0, 0]);
        assert_eq!(res[1].raw(), &[0, 1, 0, 3]);
    }
}
