//! Drives one verification case through a [`GateLibrary`].

use std::{error::Error, fmt};

use boolgate_sampling::Source;
use log::debug;

use crate::{
    error::HarnessError,
    oracle::{Gate, GateResults},
};

/// Gates that need the cloud key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryGate {
    And,
    Or,
    Xor,
    Nand,
}

impl BinaryGate {
    pub const ALL: [BinaryGate; 4] = [BinaryGate::And, BinaryGate::Or, BinaryGate::Xor, BinaryGate::Nand];

    pub fn name(&self) -> &'static str {
        self.result_slot().name()
    }

    pub fn result_slot(&self) -> Gate {
        match self {
            BinaryGate::And => Gate::And,
            BinaryGate::Or => Gate::Or,
            BinaryGate::Xor => Gate::Xor,
            BinaryGate::Nand => Gate::Nand,
        }
    }
}

impl fmt::Display for BinaryGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Operation boundary of a bit-wise homomorphic gate library.
///
/// Randomness only enters through the `source` arguments. NOT takes no cloud
/// key: it must be computable from the ciphertext alone.
pub trait GateLibrary {
    type SecretKey;
    type CloudKey;
    type Params;
    type Ciphertext;
    type Error: Error + Send + Sync + 'static;

    fn key_pair(&self, source: &mut Source) -> Result<(Self::SecretKey, Self::CloudKey), Self::Error>;

    fn parameters(&self, cloud_key: &Self::CloudKey) -> Self::Params;

    fn encrypt(&self, source: &mut Source, secret_key: &Self::SecretKey, bits: &[bool]) -> Result<Self::Ciphertext, Self::Error>;

    fn decrypt(&self, secret_key: &Self::SecretKey, ciphertext: &Self::Ciphertext) -> Result<Vec<bool>, Self::Error>;

    fn shape<'c>(&self, ciphertext: &'c Self::Ciphertext) -> &'c [usize];

    fn empty_ciphertext(&self, params: &Self::Params, shape: &[usize]) -> Self::Ciphertext;

    fn binary_gate(
        &self,
        gate: BinaryGate,
        cloud_key: &Self::CloudKey,
        out: &mut Self::Ciphertext,
        a: &Self::Ciphertext,
        b: &Self::Ciphertext,
    ) -> Result<(), Self::Error>;

    fn not(&self, out: &mut Self::Ciphertext, a: &Self::Ciphertext) -> Result<(), Self::Error>;
}

pub struct GateInvocationAdapter<'a, L: GateLibrary> {
    library: &'a L,
}

impl<'a, L: GateLibrary> GateInvocationAdapter<'a, L> {
    pub fn new(library: &'a L) -> Self {
        Self { library }
    }

    pub fn library(&self) -> &'a L {
        self.library
    }

    pub fn generate_keypair(&self, source: &mut Source) -> Result<(L::SecretKey, L::CloudKey), HarnessError> {
        self.library.key_pair(source).map_err(HarnessError::library)
    }

    /// Encrypts a single bit, giving a ciphertext of shape `[1]`.
    pub fn encrypt(&self, source: &mut Source, secret_key: &L::SecretKey, bit: bool) -> Result<L::Ciphertext, HarnessError> {
        self.library
            .encrypt(source, secret_key, &[bit])
            .map_err(HarnessError::library)
    }

    pub fn allocate_output(&self, params: &L::Params, shape: &[usize]) -> L::Ciphertext {
        self.library.empty_ciphertext(params, shape)
    }

    pub fn evaluate_binary(
        &self,
        gate: BinaryGate,
        cloud_key: &L::CloudKey,
        out: &mut L::Ciphertext,
        a: &L::Ciphertext,
        b: &L::Ciphertext,
    ) -> Result<(), HarnessError> {
        self.check_shape(gate.name(), a, b)?;
        self.check_shape(gate.name(), a, out)?;
        self.library
            .binary_gate(gate, cloud_key, out, a, b)
            .map_err(HarnessError::library)
    }

    pub fn evaluate_not(&self, out: &mut L::Ciphertext, a: &L::Ciphertext) -> Result<(), HarnessError> {
        self.check_shape("NOT", a, out)?;
        self.library.not(out, a).map_err(HarnessError::library)
    }

    /// Decrypts a single-bit ciphertext.
    pub fn decrypt(&self, secret_key: &L::SecretKey, ciphertext: &L::Ciphertext) -> Result<bool, HarnessError> {
        let bits: Vec<bool> = self
            .library
            .decrypt(secret_key, ciphertext)
            .map_err(HarnessError::library)?;
        match bits.as_slice() {
            [bit] => Ok(*bit),
            _ => Err(HarnessError::ShapeMismatch {
                gate: "decrypt",
                expected: vec![1],
                found: vec![bits.len()],
            }),
        }
    }

    /// Runs every gate on `(a, b)` under a fresh key pair and returns the
    /// decrypted outputs.
    pub fn run_case(&self, source: &mut Source, a: bool, b: bool) -> Result<GateResults, HarnessError> {
        let (sk, ck) = self.generate_keypair(source)?;
        let ct_a: L::Ciphertext = self.encrypt(source, &sk, a)?;
        let ct_b: L::Ciphertext = self.encrypt(source, &sk, b)?;

        let params: L::Params = self.library.parameters(&ck);
        let shape: Vec<usize> = self.library.shape(&ct_a).to_vec();

        let mut results: GateResults = GateResults::default();

        for gate in BinaryGate::ALL {
            let mut out: L::Ciphertext = self.allocate_output(&params, &shape);
            self.evaluate_binary(gate, &ck, &mut out, &ct_a, &ct_b)?;
            results.set(gate.result_slot(), self.decrypt(&sk, &out)?);
        }

        for (slot, input) in [(Gate::NotA, &ct_a), (Gate::NotB, &ct_b)] {
            let mut out: L::Ciphertext = self.allocate_output(&params, &shape);
            self.evaluate_not(&mut out, input)?;
            results.set(slot, self.decrypt(&sk, &out)?);
        }

        debug!("run_case: (a={a}, b={b}) -> {results}");
        Ok(results)
    }

    fn check_shape(&self, gate: &'static str, expected: &L::Ciphertext, found: &L::Ciphertext) -> Result<(), HarnessError> {
        let expected: &[usize] = self.library.shape(expected);
        let found: &[usize] = self.library.shape(found);
        if expected != found {
            return Err(HarnessError::ShapeMismatch {
                gate,
                expected: expected.to_vec(),
                found: found.to_vec(),
            });
        }
        Ok(())
    }
}
