use std::fmt;

use boolgate_backend::MU;
use boolgate_sampling::Source;
use log::debug;

use crate::{
    blind_rotation::{BlindRotationKey, BlindRotationKeyLayout, LookupTable},
    error::GateError,
    layouts::{GLWE, GLWESecret, LWE, LWESecret, LWESwitchingKey},
    parameters::GateParameters,
};

/// Secret half of a key pair: needed to encrypt and decrypt.
#[derive(Clone, PartialEq)]
pub struct SecretKey {
    pub(crate) params: GateParameters,
    pub(crate) lwe: LWESecret,
    pub(crate) glwe: GLWESecret,
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SecretKey {{ n_lwe: {}, n_glwe: {} }}", self.lwe.data.len(), self.params.layout_brk.n_glwe)
    }
}

impl SecretKey {
    pub fn parameters(&self) -> &GateParameters {
        &self.params
    }

    pub fn lwe(&self) -> &LWESecret {
        &self.lwe
    }
}

/// Public evaluation half of a key pair: bootstrapping and key-switching keys.
/// Needed by every gate except NOT.
#[derive(Clone)]
pub struct CloudKey {
    pub(crate) params: GateParameters,
    pub(crate) brk: BlindRotationKey,
    pub(crate) ksk: LWESwitchingKey,
    pub(crate) lut: LookupTable,
}

impl fmt::Debug for CloudKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CloudKey {{ {:?}, {:?} }}", self.brk, self.params.layout_ksk)
    }
}

impl CloudKey {
    pub fn parameters(&self) -> &GateParameters {
        &self.params
    }

    /// Refreshes `a` into `res`: `res` encrypts `+1/8` if the phase of `a`
    /// lies in `[0, 1/2)` and `-1/8` otherwise, with fresh noise.
    pub fn bootstrap(&self, res: &mut LWE, a: &LWE) {
        let mut acc: GLWE = GLWE::alloc(self.params.layout_brk.n_glwe, self.params.layout_brk.rank);
        acc.blind_rotate(a, &self.lut, &self.brk);

        let mut extracted: LWE = LWE::alloc(self.params.n_extracted());
        extracted.sample_extract(&acc);

        res.keyswitch(&extracted, &self.ksk);
    }
}

/// Generates a fresh key pair for `params`.
///
/// The LWE and GLWE secrets and the evaluation-key noise are drawn from
/// generators branched off `source`; masks are drawn from `source` itself.
pub fn key_pair(params: &GateParameters, source: &mut Source) -> Result<(SecretKey, CloudKey), GateError> {
    params.validate()?;

    let (_, mut source_xs) = source.branch();
    let (_, mut source_xe) = source.branch();
    let source_xa: &mut Source = source;

    let brk_layout: BlindRotationKeyLayout = params.layout_brk;

    let mut lwe: LWESecret = LWESecret::alloc(brk_layout.n_lwe);
    lwe.fill_binary(&mut source_xs);

    let mut glwe: GLWESecret = GLWESecret::alloc(brk_layout.n_glwe, brk_layout.rank);
    glwe.fill_binary(&mut source_xs);

    debug!(
        "key_pair: generating blind rotation key n_lwe={} n_glwe={} rank={} base2k={} dnum={}",
        brk_layout.n_lwe, brk_layout.n_glwe, brk_layout.rank, brk_layout.base2k, brk_layout.dnum
    );
    let mut brk: BlindRotationKey = BlindRotationKey::alloc(&brk_layout);
    brk.encrypt_sk(&glwe, &lwe, params.sigma_glwe, source_xa, &mut source_xe);

    debug!(
        "key_pair: generating key switching key {} -> {} base2k={} dnum={}",
        params.layout_ksk.n_in, params.layout_ksk.n_out, params.layout_ksk.base2k, params.layout_ksk.dnum
    );
    let mut ksk: LWESwitchingKey = LWESwitchingKey::alloc_from_infos(&params.layout_ksk);
    ksk.encrypt_sk(&glwe.to_lwe(), &lwe, params.sigma_lwe, source_xa, &mut source_xe);

    let sk: SecretKey = SecretKey {
        params: *params,
        lwe,
        glwe,
    };

    let ck: CloudKey = CloudKey {
        params: *params,
        brk,
        ksk,
        lut: LookupTable::constant(brk_layout.n_glwe, MU),
    };

    Ok((sk, ck))
}
