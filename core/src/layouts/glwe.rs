use std::fmt;

use boolgate_backend::{Degree, Rank, TorusPoly};
use itertools::izip;

/// Parameter accessors of a GLWE ciphertext over `Z[X]/(X^n + 1)`.
pub trait GLWEInfos {
    /// Ring degree.
    fn n(&self) -> Degree;
    /// Number of mask polynomials.
    fn rank(&self) -> Rank;
    fn glwe_layout(&self) -> GLWELayout {
        GLWELayout {
            n: self.n(),
            rank: self.rank(),
        }
    }
}

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct GLWELayout {
    pub n: Degree,
    pub rank: Rank,
}

impl GLWEInfos for GLWELayout {
    fn n(&self) -> Degree {
        self.n
    }

    fn rank(&self) -> Rank {
        self.rank
    }
}

/// GLWE ciphertext: column `0` is the body, columns `1..=rank` the masks.
/// The phase is `body + sum_i mask_i * s_i`.
#[derive(PartialEq, Eq, Clone)]
pub struct GLWE {
    pub(crate) data: Vec<TorusPoly>,
}

impl GLWEInfos for GLWE {
    fn n(&self) -> Degree {
        self.data[0].degree()
    }

    fn rank(&self) -> Rank {
        Rank(self.data.len() as u32 - 1)
    }
}

impl fmt::Debug for GLWE {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for GLWE {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GLWE: n={} rank={}", self.n(), self.rank())?;
        self.data
            .iter()
            .enumerate()
            .try_for_each(|(i, poly)| writeln!(f, "  col {i}: {:?}", poly.raw()))
    }
}

impl GLWE {
    pub fn alloc_from_infos<A>(infos: &A) -> Self
    where
        A: GLWEInfos,
    {
        Self::alloc(infos.n(), infos.rank())
    }

    pub fn alloc(n: Degree, rank: Rank) -> Self {
        Self {
            data: (0..rank.as_usize() + 1).map(|_| TorusPoly::alloc(n)).collect(),
        }
    }

    pub fn body(&self) -> &TorusPoly {
        &self.data[0]
    }

    pub fn body_mut(&mut self) -> &mut TorusPoly {
        &mut self.data[0]
    }

    /// Mask polynomial `i`, in `0..rank`.
    pub fn mask(&self, i: usize) -> &TorusPoly {
        &self.data[i + 1]
    }

    pub fn at(&self, col: usize) -> &TorusPoly {
        &self.data[col]
    }

    pub fn at_mut(&mut self, col: usize) -> &mut TorusPoly {
        &mut self.data[col]
    }

    pub fn zero(&mut self) {
        self.data.iter_mut().for_each(|p| p.zero());
    }

    /// Sets `self` to the noiseless encryption `(pt, 0, ..., 0)`.
    pub fn set_trivial(&mut self, pt: &TorusPoly) {
        self.zero();
        self.data[0].copy_from(pt);
    }

    pub fn add_inplace(&mut self, other: &GLWE) {
        #[cfg(debug_assertions)]
        {
            assert_eq!(self.glwe_layout(), other.glwe_layout());
        }
        izip!(self.data.iter_mut(), other.data.iter()).for_each(|(x, y)| x.add_inplace(y));
    }

    /// Sets `self` to `X^k * a`, column by column.
    pub fn rotate_from(&mut self, k: usize, a: &GLWE) {
        izip!(self.data.iter_mut(), a.data.iter()).for_each(|(x, y)| x.rotate_from(k, y));
    }

    /// Sets `self` to `(X^k - 1) * a`, column by column.
    pub fn mul_xp_minus_one_from(&mut self, k: usize, a: &GLWE) {
        izip!(self.data.iter_mut(), a.data.iter()).for_each(|(x, y)| x.mul_xp_minus_one_from(k, y));
    }
}
