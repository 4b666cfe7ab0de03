//! Comparison of decrypted gate outputs with the oracle.

use std::fmt;

use crate::oracle::{Gate, GateResults, TestCase};

/// A single gate output that disagrees with the oracle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaseFailure {
    pub gate: Gate,
    pub inputs: (bool, bool),
    pub expected: bool,
    pub actual: bool,
}

impl fmt::Display for CaseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on (a={}, b={}): expected {}, got {}",
            self.gate, self.inputs.0, self.inputs.1, self.expected, self.actual
        )
    }
}

/// Every failing gate of one case. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationError {
    pub failures: Vec<CaseFailure>,
}

impl fmt::Display for VerificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} gate(s) disagree with the oracle", self.failures.len())?;
        self.failures.iter().try_for_each(|failure| write!(f, "; {failure}"))
    }
}

impl std::error::Error for VerificationError {}

/// Checks all six results of `case`, collecting every mismatch.
pub fn verify(case: &TestCase, actual: &GateResults) -> Result<(), VerificationError> {
    let failures: Vec<CaseFailure> = Gate::ALL
        .iter()
        .filter(|&&gate| case.expected.get(gate) != actual.get(gate))
        .map(|&gate| CaseFailure {
            gate,
            inputs: case.inputs,
            expected: case.expected.get(gate),
            actual: actual.get(gate),
        })
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(VerificationError { failures })
    }
}
