use std::fmt;

use boolgate_backend::{Degree, encode_bool};
use boolgate_sampling::Source;
use log::debug;

use crate::{
    error::GateError,
    keys::SecretKey,
    layouts::{LWE, LWEInfos},
    parameters::GateParameters,
};

/// Array of encrypted booleans: one LWE sample per element, laid out in
/// row-major order of `shape`.
#[derive(Clone, PartialEq, Eq)]
pub struct Ciphertext {
    pub(crate) shape: Vec<usize>,
    pub(crate) data: Vec<LWE>,
}

impl fmt::Debug for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Ciphertext {{ shape: {:?}, n: {} }}", self.shape, self.n())
    }
}

impl LWEInfos for Ciphertext {
    fn n(&self) -> Degree {
        self.data.first().map(|lwe| lwe.n()).unwrap_or(Degree(0))
    }
}

impl Ciphertext {
    /// Zero-initialized ciphertext of the given shape, to be written by a gate.
    pub fn empty(params: &GateParameters, shape: &[usize]) -> Self {
        let len: usize = shape.iter().product();
        Self {
            shape: shape.to_vec(),
            data: (0..len).map(|_| LWE::alloc(params.lwe_layout().n)).collect(),
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn at(&self, i: usize) -> &LWE {
        &self.data[i]
    }

    pub fn iter(&self) -> impl Iterator<Item = &LWE> {
        self.data.iter()
    }
}

/// Encrypts `bits` under `sk` into a ciphertext of shape `[bits.len()]`.
///
/// Masks are drawn from `source`, errors from a generator branched off it.
pub fn encrypt(source: &mut Source, sk: &SecretKey, bits: &[bool]) -> Ciphertext {
    let (_, mut source_xe) = source.branch();
    let mut ct: Ciphertext = Ciphertext::empty(&sk.params, &[bits.len()]);

    ct.data.iter_mut().zip(bits).for_each(|(lwe, &bit)| {
        lwe.encrypt_sk(encode_bool(bit), &sk.lwe, sk.params.sigma_lwe, source, &mut source_xe);
    });

    debug!("encrypt: {} bits, n={}", bits.len(), ct.n());
    ct
}

/// Decrypts every element of `ct`. Decrypting under the wrong key of the
/// right dimension is not detected and yields arbitrary bits.
pub fn decrypt(sk: &SecretKey, ct: &Ciphertext) -> Result<Vec<bool>, GateError> {
    if let Some(lwe) = ct.data.iter().find(|lwe| lwe.n() != sk.lwe.n()) {
        return Err(GateError::DimensionMismatch {
            expected: sk.lwe.n(),
            found: lwe.n(),
        });
    }
    Ok(ct.data.iter().map(|lwe| lwe.decrypt_bool(&sk.lwe)).collect())
}
