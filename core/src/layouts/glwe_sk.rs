use boolgate_backend::{Degree, IntPoly, Rank};
use boolgate_sampling::{Source, fill_binary};

use crate::layouts::{GLWEInfos, LWESecret};

/// Binary GLWE secret key: `rank` polynomials of degree `n`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GLWESecret {
    pub(crate) data: Vec<IntPoly>,
}

impl GLWEInfos for GLWESecret {
    fn n(&self) -> Degree {
        Degree(self.data[0].n() as u32)
    }

    fn rank(&self) -> Rank {
        Rank(self.data.len() as u32)
    }
}

impl GLWESecret {
    pub fn alloc_from_infos<A>(infos: &A) -> Self
    where
        A: GLWEInfos,
    {
        Self::alloc(infos.n(), infos.rank())
    }

    pub fn alloc(n: Degree, rank: Rank) -> Self {
        Self {
            data: (0..rank.as_usize()).map(|_| IntPoly::alloc(n)).collect(),
        }
    }

    pub fn at(&self, i: usize) -> &IntPoly {
        &self.data[i]
    }

    pub fn fill_binary(&mut self, source: &mut Source) {
        self.data.iter_mut().for_each(|p| fill_binary(p.raw_mut(), source));
    }

    /// Flattened coefficients: the LWE key under which sample extraction of a
    /// GLWE encrypted with `self` decrypts.
    pub fn to_lwe(&self) -> LWESecret {
        LWESecret {
            data: self.data.iter().flat_map(|p| p.raw().iter().copied()).collect(),
        }
    }
}
