use boolgate_backend::{Degree, Torus, TorusPoly};

/// Test vector of a blind rotation. Rotating it by `X^{-k}` for `k` in
/// `[0, 2N)` brings `f(k)` to the constant coefficient, with
/// `f(k + N) = -f(k)`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LookupTable {
    pub(crate) data: TorusPoly,
}

impl LookupTable {
    /// Table with every coefficient equal to `value`: the rotation outputs
    /// `+value` on the positive half of the torus and `-value` on the other.
    pub fn constant(n: Degree, value: Torus) -> Self {
        Self {
            data: TorusPoly::from_coeffs(vec![value; n.as_usize()]),
        }
    }

    /// Table encoding `f` on `[0, N)`.
    pub fn from_fn<F>(n: Degree, f: F) -> Self
    where
        F: Fn(usize) -> Torus,
    {
        Self {
            data: TorusPoly::from_coeffs((0..n.as_usize()).map(f).collect()),
        }
    }

    pub fn n(&self) -> Degree {
        self.data.degree()
    }

    pub fn data(&self) -> &TorusPoly {
        &self.data
    }

    /// Plaintext rotation: the value the blind rotation returns for the
    /// mod-switched phase `k`.
    pub fn eval(&self, k: usize) -> Torus {
        let n: usize = self.data.n();
        let k: usize = k % (2 * n);
        if k < n {
            self.data.raw()[k]
        } else {
            self.data.raw()[k - n].wrapping_neg()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boolgate_backend::MU;

    #[test]
    fn constant_table_is_sign() {
        let lut: LookupTable = LookupTable::constant(Degree(16), MU);
        assert!((0..16).all(|k| lut.eval(k) == MU));
        assert!((16..32).all(|k| lut.eval(k) == MU.wrapping_neg()));
    }

    #[test]
    fn plaintext_rotation_matches_eval() {
        let n: usize = 8;
        let lut: LookupTable = LookupTable::from_fn(Degree(n as u32), |i| (i as u32 + 1) * 100);
        let mut rotated: TorusPoly = TorusPoly::alloc(lut.n());
        (0..2 * n).for_each(|k| {
            rotated.rotate_from(2 * n - k, lut.data());
            assert_eq!(rotated.raw()[0], lut.eval(k), "k={k}");
        });
    }
}
