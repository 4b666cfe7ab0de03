use std::fmt;

use boolgate_backend::{Base2K, Degree, Dnum, Rank};

use crate::layouts::{GLWE, GLWEInfos};

pub trait GGSWInfos
where
    Self: GLWEInfos,
{
    fn base2k(&self) -> Base2K;
    fn dnum(&self) -> Dnum;
    fn ggsw_layout(&self) -> GGSWLayout {
        GGSWLayout {
            n: self.n(),
            rank: self.rank(),
            base2k: self.base2k(),
            dnum: self.dnum(),
        }
    }
}

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct GGSWLayout {
    pub n: Degree,
    pub rank: Rank,
    pub base2k: Base2K,
    pub dnum: Dnum,
}

impl GLWEInfos for GGSWLayout {
    fn n(&self) -> Degree {
        self.n
    }

    fn rank(&self) -> Rank {
        self.rank
    }
}

impl GGSWInfos for GGSWLayout {
    fn base2k(&self) -> Base2K {
        self.base2k
    }

    fn dnum(&self) -> Dnum {
        self.dnum
    }
}

/// GGSW ciphertext: a `dnum x (rank + 1)` matrix of GLWE rows. Row `(j, c)`
/// encrypts zero plus `m * 2^(-base2k * (j+1))` on column `c`.
#[derive(PartialEq, Eq, Clone)]
pub struct GGSW {
    pub(crate) data: Vec<GLWE>,
    pub(crate) base2k: Base2K,
    pub(crate) dnum: Dnum,
}

impl GLWEInfos for GGSW {
    fn n(&self) -> Degree {
        self.data[0].n()
    }

    fn rank(&self) -> Rank {
        self.data[0].rank()
    }
}

impl GGSWInfos for GGSW {
    fn base2k(&self) -> Base2K {
        self.base2k
    }

    fn dnum(&self) -> Dnum {
        self.dnum
    }
}

impl fmt::Debug for GGSW {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "GGSW: n={} rank={} base2k={} dnum={}",
            self.n(),
            self.rank(),
            self.base2k,
            self.dnum
        )
    }
}

impl GGSW {
    pub fn alloc_from_infos<A>(infos: &A) -> Self
    where
        A: GGSWInfos,
    {
        Self::alloc(infos.n(), infos.rank(), infos.base2k(), infos.dnum())
    }

    pub fn alloc(n: Degree, rank: Rank, base2k: Base2K, dnum: Dnum) -> Self {
        let rows: usize = dnum.as_usize() * (rank.as_usize() + 1);
        Self {
            data: (0..rows).map(|_| GLWE::alloc(n, rank)).collect(),
            base2k,
            dnum,
        }
    }

    pub fn at(&self, row: usize, col: usize) -> &GLWE {
        &self.data[row * (self.rank().as_usize() + 1) + col]
    }

    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut GLWE {
        let cols: usize = self.rank().as_usize() + 1;
        &mut self.data[row * cols + col]
    }
}
