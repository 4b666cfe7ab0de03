use std::fmt;

use boolgate_backend::{Degree, Torus};
use boolgate_sampling::{Source, fill_uniform_torus};
use itertools::izip;

pub trait LWEInfos {
    fn n(&self) -> Degree;
    fn lwe_layout(&self) -> LWELayout {
        LWELayout { n: self.n() }
    }
}

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct LWELayout {
    pub n: Degree,
}

impl LWEInfos for LWELayout {
    fn n(&self) -> Degree {
        self.n
    }
}

/// LWE sample `(b, a)` over the torus, with phase `b + <a, s>`.
#[derive(PartialEq, Eq, Clone)]
pub struct LWE {
    pub(crate) body: Torus,
    pub(crate) mask: Vec<Torus>,
}

impl LWEInfos for LWE {
    fn n(&self) -> Degree {
        Degree(self.mask.len() as u32)
    }
}

impl fmt::Debug for LWE {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for LWE {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LWE: n={} b={} a={:?}", self.n(), self.body, self.mask)
    }
}

impl LWE {
    pub fn alloc_from_infos<A>(infos: &A) -> Self
    where
        A: LWEInfos,
    {
        Self::alloc(infos.n())
    }

    pub fn alloc(n: Degree) -> Self {
        LWE {
            body: 0,
            mask: vec![0; n.as_usize()],
        }
    }

    /// Noiseless encryption of `pt`: zero mask, body `pt`.
    pub fn trivial(n: Degree, pt: Torus) -> Self {
        let mut lwe: LWE = Self::alloc(n);
        lwe.body = pt;
        lwe
    }

    pub fn body(&self) -> Torus {
        self.body
    }

    pub fn mask(&self) -> &[Torus] {
        &self.mask
    }

    pub fn fill_mask_uniform(&mut self, source: &mut Source) {
        fill_uniform_torus(&mut self.mask, source);
    }

    pub fn zero(&mut self) {
        self.body = 0;
        self.mask.iter_mut().for_each(|x| *x = 0);
    }

    pub fn copy_from(&mut self, other: &LWE) {
        #[cfg(debug_assertions)]
        {
            assert_eq!(self.n(), other.n());
        }
        self.body = other.body;
        self.mask.copy_from_slice(&other.mask);
    }

    pub fn add_inplace(&mut self, other: &LWE) {
        #[cfg(debug_assertions)]
        {
            assert_eq!(self.n(), other.n());
        }
        self.body = self.body.wrapping_add(other.body);
        izip!(self.mask.iter_mut(), other.mask.iter()).for_each(|(x, y)| *x = x.wrapping_add(*y));
    }

    pub fn sub_inplace(&mut self, other: &LWE) {
        #[cfg(debug_assertions)]
        {
            assert_eq!(self.n(), other.n());
        }
        self.body = self.body.wrapping_sub(other.body);
        izip!(self.mask.iter_mut(), other.mask.iter()).for_each(|(x, y)| *x = x.wrapping_sub(*y));
    }

    /// `self += k * other` for a small signed scalar `k`.
    pub fn add_scaled_inplace(&mut self, k: i32, other: &LWE) {
        #[cfg(debug_assertions)]
        {
            assert_eq!(self.n(), other.n());
        }
        let k: u32 = k as u32;
        self.body = self.body.wrapping_add(k.wrapping_mul(other.body));
        izip!(self.mask.iter_mut(), other.mask.iter()).for_each(|(x, y)| *x = x.wrapping_add(k.wrapping_mul(*y)));
    }

    pub fn negate_inplace(&mut self) {
        self.body = self.body.wrapping_neg();
        self.mask.iter_mut().for_each(|x| *x = x.wrapping_neg());
    }

    pub fn add_constant(&mut self, pt: Torus) {
        self.body = self.body.wrapping_add(pt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_ops() {
        let mut x: LWE = LWE::trivial(Degree(3), 10);
        x.mask.copy_from_slice(&[1, 2, 3]);
        let mut y: LWE = x.clone();

        y.add_scaled_inplace(-2, &x);
        assert_eq!(y.body(), 10u32.wrapping_neg());
        assert_eq!(y.mask(), &[1u32.wrapping_neg(), 2u32.wrapping_neg(), 3u32.wrapping_neg()]);

        y.add_inplace(&x);
        assert!(y.mask().iter().all(|&a| a == 0));
        assert_eq!(y.body(), 0);

        y.sub_inplace(&x);
        y.negate_inplace();
        assert_eq!(y, x);
    }
}
