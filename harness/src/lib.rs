//! Correctness harness for bit-wise homomorphic gate libraries.
//!
//! For each of the four boolean input pairs the harness generates a fresh key
//! pair, encrypts both inputs, evaluates AND, OR, XOR, NAND and both NOTs on
//! the ciphertexts, decrypts, and checks the six outputs against
//! [`TEST_CASES`]. Each case is timed and the results are collected in a
//! [`RunSummary`].
//!
//! A gate library plugs in through [`GateLibrary`]; [`Cggi`] binds
//! `boolgate-core`. Every random draw comes from one seeded
//! [`Source`](boolgate_sampling::Source), so a run is reproducible from its
//! seed.

pub mod adapter;
pub mod error;
pub mod library;
pub mod oracle;
pub mod runner;
pub mod verifier;

pub use adapter::{BinaryGate, GateInvocationAdapter, GateLibrary};
pub use error::HarnessError;
pub use library::Cggi;
pub use oracle::{Gate, GateResults, TEST_CASES, TestCase};
pub use runner::{BenchmarkRunner, CaseReport, FailurePolicy, RunSummary, RunnerConfig, SummaryMode};
pub use verifier::{CaseFailure, VerificationError, verify};
