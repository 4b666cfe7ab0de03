//! [`GateLibrary`] binding of `boolgate-core`.

use boolgate_core::{Ciphertext, CloudKey, GateError, GateParameters, SecretKey, TOY_PARAMETERS, gates};
use boolgate_sampling::Source;

use crate::adapter::{BinaryGate, GateLibrary};

/// CGGI gate bootstrapping with a fixed parameter set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cggi {
    params: GateParameters,
}

impl Default for Cggi {
    fn default() -> Self {
        Self::new(TOY_PARAMETERS)
    }
}

impl Cggi {
    pub fn new(params: GateParameters) -> Self {
        Self { params }
    }
}

impl GateLibrary for Cggi {
    type SecretKey = SecretKey;
    type CloudKey = CloudKey;
    type Params = GateParameters;
    type Ciphertext = Ciphertext;
    type Error = GateError;

    fn key_pair(&self, source: &mut Source) -> Result<(SecretKey, CloudKey), GateError> {
        boolgate_core::key_pair(&self.params, source)
    }

    fn parameters(&self, cloud_key: &CloudKey) -> GateParameters {
        *cloud_key.parameters()
    }

    fn encrypt(&self, source: &mut Source, secret_key: &SecretKey, bits: &[bool]) -> Result<Ciphertext, GateError> {
        Ok(boolgate_core::encrypt(source, secret_key, bits))
    }

    fn decrypt(&self, secret_key: &SecretKey, ciphertext: &Ciphertext) -> Result<Vec<bool>, GateError> {
        boolgate_core::decrypt(secret_key, ciphertext)
    }

    fn shape<'c>(&self, ciphertext: &'c Ciphertext) -> &'c [usize] {
        ciphertext.shape()
    }

    fn empty_ciphertext(&self, params: &GateParameters, shape: &[usize]) -> Ciphertext {
        Ciphertext::empty(params, shape)
    }

    fn binary_gate(
        &self,
        gate: BinaryGate,
        cloud_key: &CloudKey,
        out: &mut Ciphertext,
        a: &Ciphertext,
        b: &Ciphertext,
    ) -> Result<(), GateError> {
        match gate {
            BinaryGate::And => gates::and(cloud_key, out, a, b),
            BinaryGate::Or => gates::or(cloud_key, out, a, b),
            BinaryGate::Xor => gates::xor(cloud_key, out, a, b),
            BinaryGate::Nand => gates::nand(cloud_key, out, a, b),
        }
    }

    fn not(&self, out: &mut Ciphertext, a: &Ciphertext) -> Result<(), GateError> {
        gates::not(out, a)
    }
}
