use std::fmt;

use boolgate_backend::{Base2K, Degree, Dnum, Rank};
use boolgate_sampling::Source;

use crate::layouts::{GGSW, GGSWInfos, GGSWLayout, GLWEInfos, GLWESecret, LWEInfos, LWESecret};

/// Dimensions of a [`BlindRotationKey`].
///
/// - `n_glwe`: degree of the GGSW ring.
/// - `n_lwe`: dimension of the LWE samples being rotated, one GGSW each.
/// - `base2k`, `dnum`: gadget decomposition of the GGSW rows.
/// - `rank`: GLWE rank.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct BlindRotationKeyLayout {
    pub n_glwe: Degree,
    pub n_lwe: Degree,
    pub base2k: Base2K,
    pub dnum: Dnum,
    pub rank: Rank,
}

pub trait BlindRotationKeyInfos
where
    Self: GGSWInfos,
{
    fn n_glwe(&self) -> Degree;
    fn n_lwe(&self) -> Degree;
}

impl GLWEInfos for BlindRotationKeyLayout {
    fn n(&self) -> Degree {
        self.n_glwe
    }

    fn rank(&self) -> Rank {
        self.rank
    }
}

impl GGSWInfos for BlindRotationKeyLayout {
    fn base2k(&self) -> Base2K {
        self.base2k
    }

    fn dnum(&self) -> Dnum {
        self.dnum
    }
}

impl BlindRotationKeyInfos for BlindRotationKeyLayout {
    fn n_glwe(&self) -> Degree {
        self.n_glwe
    }

    fn n_lwe(&self) -> Degree {
        self.n_lwe
    }
}

/// Bootstrapping key: GGSW encryptions of the LWE secret coefficients under
/// the GLWE secret.
#[derive(Clone, PartialEq, Eq)]
pub struct BlindRotationKey {
    pub(crate) keys: Vec<GGSW>,
    pub(crate) layout: BlindRotationKeyLayout,
}

impl GLWEInfos for BlindRotationKey {
    fn n(&self) -> Degree {
        self.layout.n_glwe
    }

    fn rank(&self) -> Rank {
        self.layout.rank
    }
}

impl GGSWInfos for BlindRotationKey {
    fn base2k(&self) -> Base2K {
        self.layout.base2k
    }

    fn dnum(&self) -> Dnum {
        self.layout.dnum
    }
}

impl BlindRotationKeyInfos for BlindRotationKey {
    fn n_glwe(&self) -> Degree {
        self.layout.n_glwe
    }

    fn n_lwe(&self) -> Degree {
        Degree(self.keys.len() as u32)
    }
}

impl fmt::Debug for BlindRotationKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BlindRotationKey: {:?}", self.layout)
    }
}

impl BlindRotationKey {
    pub fn alloc<A>(infos: &A) -> Self
    where
        A: BlindRotationKeyInfos,
    {
        let ggsw: GGSWLayout = infos.ggsw_layout();
        Self {
            keys: (0..infos.n_lwe().as_usize()).map(|_| GGSW::alloc_from_infos(&ggsw)).collect(),
            layout: BlindRotationKeyLayout {
                n_glwe: infos.n_glwe(),
                n_lwe: infos.n_lwe(),
                base2k: infos.base2k(),
                dnum: infos.dnum(),
                rank: infos.rank(),
            },
        }
    }

    pub fn at(&self, i: usize) -> &GGSW {
        &self.keys[i]
    }

    /// Encrypts every coefficient of `sk_lwe` under `sk_glwe`.
    pub fn encrypt_sk(
        &mut self,
        sk_glwe: &GLWESecret,
        sk_lwe: &LWESecret,
        sigma: f64,
        source_xa: &mut Source,
        source_xe: &mut Source,
    ) {
        debug_assert_eq!(self.n_lwe(), sk_lwe.n());
        debug_assert_eq!(self.n_glwe(), sk_glwe.n());
        debug_assert_eq!(self.rank(), sk_glwe.rank());

        self.keys
            .iter_mut()
            .zip(sk_lwe.raw())
            .for_each(|(ggsw, &s)| ggsw.encrypt_sk(s, sk_glwe, sigma, source_xa, source_xe));
    }
}
