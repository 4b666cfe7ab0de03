use boolgate_backend::{Base2K, Degree, Dnum};

use crate::layouts::LWE;

pub trait LWESwitchingKeyInfos {
    fn n_in(&self) -> Degree;
    fn n_out(&self) -> Degree;
    fn base2k(&self) -> Base2K;
    fn dnum(&self) -> Dnum;
}

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct LWESwitchingKeyLayout {
    pub n_in: Degree,
    pub n_out: Degree,
    pub base2k: Base2K,
    pub dnum: Dnum,
}

impl LWESwitchingKeyInfos for LWESwitchingKeyLayout {
    fn n_in(&self) -> Degree {
        self.n_in
    }

    fn n_out(&self) -> Degree {
        self.n_out
    }

    fn base2k(&self) -> Base2K {
        self.base2k
    }

    fn dnum(&self) -> Dnum {
        self.dnum
    }
}

/// Key switching key from an `n_in` LWE key to an `n_out` LWE key.
/// Entry `(i, j)` encrypts `s_in[i] * 2^(-base2k * (j+1))` under `s_out`.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct LWESwitchingKey {
    pub(crate) data: Vec<LWE>,
    pub(crate) layout: LWESwitchingKeyLayout,
}

impl LWESwitchingKeyInfos for LWESwitchingKey {
    fn n_in(&self) -> Degree {
        self.layout.n_in
    }

    fn n_out(&self) -> Degree {
        self.layout.n_out
    }

    fn base2k(&self) -> Base2K {
        self.layout.base2k
    }

    fn dnum(&self) -> Dnum {
        self.layout.dnum
    }
}

impl LWESwitchingKey {
    pub fn alloc_from_infos<A>(infos: &A) -> Self
    where
        A: LWESwitchingKeyInfos,
    {
        let layout: LWESwitchingKeyLayout = LWESwitchingKeyLayout {
            n_in: infos.n_in(),
            n_out: infos.n_out(),
            base2k: infos.base2k(),
            dnum: infos.dnum(),
        };
        Self {
            data: (0..layout.n_in.as_usize() * layout.dnum.as_usize())
                .map(|_| LWE::alloc(layout.n_out))
                .collect(),
            layout,
        }
    }

    pub fn at(&self, i: usize, j: usize) -> &LWE {
        &self.data[i * self.layout.dnum.as_usize() + j]
    }

    pub fn at_mut(&mut self, i: usize, j: usize) -> &mut LWE {
        let dnum: usize = self.layout.dnum.as_usize();
        &mut self.data[i * dnum + j]
    }
}
