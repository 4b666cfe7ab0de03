use itertools::izip;

use crate::{layouts::Degree, torus::Torus};

/// Polynomial of `Z[X]/(X^N+1)` with torus coefficients.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TorusPoly {
    pub(crate) coeffs: Vec<Torus>,
}

/// Polynomial of `Z[X]/(X^N+1)` with small signed integer coefficients
/// (secret keys, gadget digits).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct IntPoly {
    pub(crate) coeffs: Vec<i32>,
}

impl TorusPoly {
    pub fn alloc(n: Degree) -> Self {
        Self {
            coeffs: vec![0; n.as_usize()],
        }
    }

    pub fn from_coeffs(coeffs: Vec<Torus>) -> Self {
        Self { coeffs }
    }

    pub fn n(&self) -> usize {
        self.coeffs.len()
    }

    pub fn degree(&self) -> Degree {
        Degree(self.coeffs.len() as u32)
    }

    pub fn raw(&self) -> &[Torus] {
        &self.coeffs
    }

    pub fn raw_mut(&mut self) -> &mut [Torus] {
        &mut self.coeffs
    }

    pub fn zero(&mut self) {
        self.coeffs.iter_mut().for_each(|x| *x = 0);
    }

    pub fn copy_from(&mut self, other: &TorusPoly) {
        self.coeffs.copy_from_slice(&other.coeffs);
    }

    pub fn add_inplace(&mut self, other: &TorusPoly) {
        #[cfg(debug_assertions)]
        {
            assert_eq!(self.n(), other.n());
        }
        izip!(self.coeffs.iter_mut(), other.coeffs.iter()).for_each(|(x, y)| *x = x.wrapping_add(*y));
    }

    pub fn sub_inplace(&mut self, other: &TorusPoly) {
        #[cfg(debug_assertions)]
        {
            assert_eq!(self.n(), other.n());
        }
        izip!(self.coeffs.iter_mut(), other.coeffs.iter()).for_each(|(x, y)| *x = x.wrapping_sub(*y));
    }

    /// `self += a * b` in `Z[X]/(X^N+1)`.
    pub fn add_mul_int(&mut self, a: &IntPoly, b: &TorusPoly) {
        negacyclic_mul_acc::<false>(&mut self.coeffs, &a.coeffs, &b.coeffs);
    }

    /// `self -= a * b` in `Z[X]/(X^N+1)`.
    pub fn sub_mul_int(&mut self, a: &IntPoly, b: &TorusPoly) {
        negacyclic_mul_acc::<true>(&mut self.coeffs, &a.coeffs, &b.coeffs);
    }

    /// Sets `self` to `X^k * a`, with `k` taken modulo `2N`.
    pub fn rotate_from(&mut self, k: usize, a: &TorusPoly) {
        #[cfg(debug_assertions)]
        {
            assert_eq!(self.n(), a.n());
        }
        let n: usize = a.n();
        let k: usize = k % (2 * n);
        a.coeffs.iter().enumerate().for_each(|(i, &x)| {
            let t: usize = (i + k) % (2 * n);
            if t < n {
                self.coeffs[t] = x;
            } else {
                self.coeffs[t - n] = x.wrapping_neg();
            }
        });
    }

    /// Sets `self` to `(X^k - 1) * a`, with `k` taken modulo `2N`.
    pub fn mul_xp_minus_one_from(&mut self, k: usize, a: &TorusPoly) {
        self.rotate_from(k, a);
        self.sub_inplace(a);
    }
}

impl IntPoly {
    pub fn alloc(n: Degree) -> Self {
        Self {
            coeffs: vec![0; n.as_usize()],
        }
    }

    pub fn from_coeffs(coeffs: Vec<i32>) -> Self {
        Self { coeffs }
    }

    pub fn n(&self) -> usize {
        self.coeffs.len()
    }

    pub fn raw(&self) -> &[i32] {
        &self.coeffs
    }

    pub fn raw_mut(&mut self) -> &mut [i32] {
        &mut self.coeffs
    }
}

// Schoolbook product, skipping zero coefficients of `a` (binary keys and
// gadget digits are sparse).
fn negacyclic_mul_acc<const SUB: bool>(res: &mut [Torus], a: &[i32], b: &[Torus]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }
    let n: usize = res.len();
    a.iter().enumerate().filter(|(_, ai)| **ai != 0).for_each(|(i, &ai)| {
        let ai: u32 = if SUB { (ai as u32).wrapping_neg() } else { ai as u32 };
        let (b_lo, b_hi) = b.split_at(n - i);
        // X^i * b: the first n-i coefficients land at i.., the rest wrap with a sign flip.
        izip!(res[i..].iter_mut(), b_lo.iter()).for_each(|(r, &bj)| *r = r.wrapping_add(ai.wrapping_mul(bj)));
        izip!(res[..i].iter_mut(), b_hi.iter()).for_each(|(r, &bj)| *r = r.wrapping_sub(ai.wrapping_mul(bj)));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use boolgate_sampling::{Source, fill_uniform_torus};

    fn naive(a: &[i32], b: &[u32]) -> Vec<u32> {
        let n: usize = a.len();
        let mut res: Vec<u32> = vec![0; n];
        for i in 0..n {
            for j in 0..n {
                let p: u32 = (a[i] as u32).wrapping_mul(b[j]);
                if i + j < n {
                    res[i + j] = res[i + j].wrapping_add(p);
                } else {
                    res[i + j - n] = res[i + j - n].wrapping_sub(p);
                }
            }
        }
        res
    }

    #[test]
    fn mul_matches_schoolbook() {
        let n: usize = 16;
        let mut source: Source = Source::new([9u8; 32]);
        let mut b: TorusPoly = TorusPoly::alloc(n.into());
        fill_uniform_torus(b.raw_mut(), &mut source);
        let a: IntPoly = IntPoly::from_coeffs((0..n as i32).map(|i| (i % 5) - 2).collect());

        let mut res: TorusPoly = TorusPoly::alloc(n.into());
        res.add_mul_int(&a, &b);
        assert_eq!(res.raw(), naive(a.raw(), b.raw()).as_slice());

        res.sub_mul_int(&a, &b);
        assert!(res.raw().iter().all(|&x| x == 0));
    }

    #[test]
    fn rotation_is_negacyclic() {
        let n: usize = 8;
        let a: TorusPoly = TorusPoly::from_coeffs((1..=n as u32).collect());
        let mut res: TorusPoly = TorusPoly::alloc(n.into());

        res.rotate_from(1, &a);
        assert_eq!(res.raw()[0], 8u32.wrapping_neg());
        assert_eq!(res.raw()[1], 1);

        // X^N = -1
        res.rotate_from(n, &a);
        izip!(res.raw(), a.raw()).for_each(|(r, x)| assert_eq!(*r, x.wrapping_neg()));

        // X^{2N} = 1
        res.rotate_from(2 * n, &a);
        assert_eq!(res, a);
    }

    #[test]
    fn rotation_matches_monomial_product() {
        let n: usize = 16;
        let mut source: Source = Source::new([10u8; 32]);
        let mut a: TorusPoly = TorusPoly::alloc(n.into());
        fill_uniform_torus(a.raw_mut(), &mut source);

        for k in [0, 3, 15, 16, 21, 31] {
            let mut monomial: IntPoly = IntPoly::alloc(n.into());
            if k < n {
                monomial.raw_mut()[k] = 1;
            } else {
                monomial.raw_mut()[k - n] = -1;
            }
            let mut want: TorusPoly = TorusPoly::alloc(n.into());
            want.add_mul_int(&monomial, &a);

            let mut have: TorusPoly = TorusPoly::alloc(n.into());
            have.rotate_from(k, &a);
            assert_eq!(have, want, "k={k}");
        }
    }

    #[test]
    fn mul_xp_minus_one() {
        let a: TorusPoly = TorusPoly::from_coeffs(vec![5, 0, 0, 0]);
        let mut res: TorusPoly = TorusPoly::alloc(4usize.into());
        res.mul_xp_minus_one_from(2, &a);
        assert_eq!(res.raw(), &[5u32.wrapping_neg(), 0, 5, 0]);
    }
}
