//! Harness behavior against a plaintext stand-in library with injectable
//! faults.

use std::cell::Cell;

use boolgate_harness::{
    BenchmarkRunner, BinaryGate, CaseReport, FailurePolicy, Gate, GateInvocationAdapter, GateLibrary, HarnessError,
    RunSummary, RunnerConfig, TEST_CASES,
};
use boolgate_sampling::{DEFAULT_SEED, RngCore, Source};
use test_log::test;

#[derive(Debug, thiserror::Error)]
#[error("mock library failure")]
struct MockError;

#[derive(Clone, Debug, PartialEq, Eq)]
struct MockCiphertext {
    shape: Vec<usize>,
    bits: Vec<bool>,
}

/// Keeps bits in the clear. Key generation and encryption still draw from the
/// source so that runs consume randomness like a real library.
#[derive(Default)]
struct MockLibrary {
    flipped: Option<BinaryGate>,
    broken_not: bool,
    /// 1-based `key_pair` call that fails.
    failing_key_pair: Option<usize>,
    key_pair_calls: Cell<usize>,
    gate_calls: Cell<usize>,
}

impl GateLibrary for MockLibrary {
    type SecretKey = u32;
    type CloudKey = ();
    type Params = ();
    type Ciphertext = MockCiphertext;
    type Error = MockError;

    fn key_pair(&self, source: &mut Source) -> Result<(u32, ()), MockError> {
        self.key_pair_calls.set(self.key_pair_calls.get() + 1);
        if self.failing_key_pair == Some(self.key_pair_calls.get()) {
            return Err(MockError);
        }
        Ok((source.next_u32(), ()))
    }

    fn parameters(&self, _: &()) {}

    fn encrypt(&self, source: &mut Source, _: &u32, bits: &[bool]) -> Result<MockCiphertext, MockError> {
        source.next_u32();
        Ok(MockCiphertext {
            shape: vec![bits.len()],
            bits: bits.to_vec(),
        })
    }

    fn decrypt(&self, _: &u32, ct: &MockCiphertext) -> Result<Vec<bool>, MockError> {
        Ok(ct.bits.clone())
    }

    fn shape<'c>(&self, ct: &'c MockCiphertext) -> &'c [usize] {
        &ct.shape
    }

    fn empty_ciphertext(&self, _: &(), shape: &[usize]) -> MockCiphertext {
        MockCiphertext {
            shape: shape.to_vec(),
            bits: vec![false; shape.iter().product()],
        }
    }

    fn binary_gate(
        &self,
        gate: BinaryGate,
        _: &(),
        out: &mut MockCiphertext,
        a: &MockCiphertext,
        b: &MockCiphertext,
    ) -> Result<(), MockError> {
        self.gate_calls.set(self.gate_calls.get() + 1);
        let flip: bool = self.flipped == Some(gate);
        out.bits
            .iter_mut()
            .zip(a.bits.iter().zip(b.bits.iter()))
            .for_each(|(o, (&x, &y))| {
                let v: bool = match gate {
                    BinaryGate::And => x & y,
                    BinaryGate::Or => x | y,
                    BinaryGate::Xor => x ^ y,
                    BinaryGate::Nand => !(x & y),
                };
                *o = v ^ flip;
            });
        Ok(())
    }

    fn not(&self, out: &mut MockCiphertext, a: &MockCiphertext) -> Result<(), MockError> {
        self.gate_calls.set(self.gate_calls.get() + 1);
        out.bits
            .iter_mut()
            .zip(a.bits.iter())
            .for_each(|(o, &x)| *o = if self.broken_not { x } else { !x });
        Ok(())
    }
}

fn run(library: &MockLibrary, policy: FailurePolicy) -> Result<RunSummary, HarnessError> {
    let runner: BenchmarkRunner<MockLibrary> = BenchmarkRunner::new(
        library,
        RunnerConfig {
            policy,
            ..RunnerConfig::default()
        },
    );
    runner.run()
}

#[test]
fn faithful_mock_passes() {
    let library: MockLibrary = MockLibrary::default();
    let summary: RunSummary = run(&library, FailurePolicy::Abort).unwrap();
    assert!(summary.passed);
    assert_eq!(library.gate_calls.get(), 24);
}

#[test]
fn flipped_gate_is_reported_in_every_case() {
    let library: MockLibrary = MockLibrary {
        flipped: Some(BinaryGate::Xor),
        ..MockLibrary::default()
    };

    let summary: RunSummary = run(&library, FailurePolicy::Aggregate).unwrap();
    assert!(!summary.passed);
    assert!(summary.to_string().ends_with("result: FAIL"));

    summary.cases.iter().for_each(|case| {
        let gates: Vec<Gate> = case.verdict.as_ref().unwrap_err().failures.iter().map(|f| f.gate).collect();
        assert_eq!(gates, vec![Gate::Xor]);
    });
    assert_eq!(summary.failures().count(), 4);
}

#[test]
fn all_failing_gates_of_a_case_are_reported_together() {
    let library: MockLibrary = MockLibrary {
        flipped: Some(BinaryGate::And),
        broken_not: true,
        ..MockLibrary::default()
    };

    let Err(HarnessError::CaseFailure(err)) = run(&library, FailurePolicy::Abort) else {
        panic!("expected a case failure");
    };

    let gates: Vec<Gate> = err.failures.iter().map(|f| f.gate).collect();
    assert_eq!(gates, vec![Gate::And, Gate::NotA, Gate::NotB]);
    assert!(err.failures.iter().all(|f| f.inputs == (false, false)));
}

#[test]
fn abort_stops_after_first_failing_case() {
    let library: MockLibrary = MockLibrary {
        broken_not: true,
        ..MockLibrary::default()
    };

    let runner: BenchmarkRunner<MockLibrary> = BenchmarkRunner::new(
        &library,
        RunnerConfig {
            policy: FailurePolicy::Abort,
            ..RunnerConfig::default()
        },
    );
    let mut reported: Vec<CaseReport> = Vec::new();
    let result = runner.run_reported(&mut Source::new(DEFAULT_SEED), |case| reported.push(case.clone()));

    assert!(matches!(result, Err(HarnessError::CaseFailure(_))));
    // Four binary gates and two NOTs for the first case only.
    assert_eq!(library.gate_calls.get(), 6);
    // The failing case is reported before the run stops.
    assert_eq!(reported.len(), 1);
    assert!(!reported[0].passed());
}

#[test]
fn finished_cases_are_reported_before_a_library_error() {
    let library: MockLibrary = MockLibrary {
        failing_key_pair: Some(3),
        ..MockLibrary::default()
    };
    let runner: BenchmarkRunner<MockLibrary> = BenchmarkRunner::new(&library, RunnerConfig::default());

    let mut reported: Vec<CaseReport> = Vec::new();
    let err: HarnessError = runner
        .run_reported(&mut Source::new(DEFAULT_SEED), |case| reported.push(case.clone()))
        .unwrap_err();

    assert!(matches!(err, HarnessError::Library(_)));
    assert_eq!(library.key_pair_calls.get(), 3);
    assert_eq!(reported.iter().map(|case| case.index).collect::<Vec<_>>(), vec![1, 2]);
    reported.iter().zip(TEST_CASES.iter()).for_each(|(report, case)| {
        assert_eq!(report.inputs, case.inputs);
        assert!(report.passed());
    });
    assert!(reported[1].to_string().starts_with("case 2: "));
}

#[test]
fn aggregate_runs_every_case() {
    let library: MockLibrary = MockLibrary {
        broken_not: true,
        ..MockLibrary::default()
    };

    let summary: RunSummary = run(&library, FailurePolicy::Aggregate).unwrap();
    assert!(!summary.passed);
    assert_eq!(summary.cases.len(), 4);
    assert_eq!(library.gate_calls.get(), 24);
    // Both NOTs fail in every case.
    assert_eq!(summary.failures().filter(|f| matches!(f.gate, Gate::NotA | Gate::NotB)).count(), 8);
}

#[test]
fn library_errors_pass_through() {
    let library: MockLibrary = MockLibrary {
        failing_key_pair: Some(1),
        ..MockLibrary::default()
    };

    let err: HarnessError = run(&library, FailurePolicy::Aggregate).unwrap_err();
    assert!(matches!(err, HarnessError::Library(_)));
    assert_eq!(err.to_string(), "gate library error: mock library failure");
}

#[test]
fn shape_mismatch_is_raised_before_the_library_runs() {
    let library: MockLibrary = MockLibrary::default();
    let adapter: GateInvocationAdapter<MockLibrary> = GateInvocationAdapter::new(&library);
    let mut source: Source = Source::new([9u8; 32]);

    let (sk, ck) = adapter.generate_keypair(&mut source).unwrap();
    let a: MockCiphertext = adapter.encrypt(&mut source, &sk, true).unwrap();
    let mut out: MockCiphertext = adapter.allocate_output(&(), &[3]);

    for gate in BinaryGate::ALL {
        assert!(matches!(
            adapter.evaluate_binary(gate, &ck, &mut out, &a, &a),
            Err(HarnessError::ShapeMismatch { .. })
        ));
    }
    assert!(matches!(
        adapter.evaluate_not(&mut out, &a),
        Err(HarnessError::ShapeMismatch { .. })
    ));
    assert_eq!(library.gate_calls.get(), 0);
}

#[test]
fn identical_seeds_consume_identical_draws() {
    let library: MockLibrary = MockLibrary::default();
    let runner: BenchmarkRunner<MockLibrary> = BenchmarkRunner::new(&library, RunnerConfig::default());

    let mut source_a: Source = Source::new([5u8; 32]);
    let mut source_b: Source = Source::new([5u8; 32]);
    runner.run_with(&mut source_a).unwrap();
    runner.run_with(&mut source_b).unwrap();

    let draws_a: Vec<u64> = (0..8).map(|_| source_a.next_u64()).collect();
    let draws_b: Vec<u64> = (0..8).map(|_| source_b.next_u64()).collect();
    assert_eq!(draws_a, draws_b);
}
