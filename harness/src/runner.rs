//! Times every case, verifies it and aggregates a summary.

use std::{
    fmt,
    time::{Duration, Instant},
};

use boolgate_sampling::{DEFAULT_SEED, Source};
use log::{error, info};

use crate::{
    adapter::{GateInvocationAdapter, GateLibrary},
    error::HarnessError,
    oracle::{GateResults, TEST_CASES},
    verifier::{CaseFailure, VerificationError, verify},
};

/// How the final pass/fail verdict is obtained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SummaryMode {
    /// Verdict from the verified results of the timed pass.
    #[default]
    Reuse,
    /// Runs every case a second time, continuing the same random stream, and
    /// takes the verdict from that pass.
    Recompute,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failing case with [`HarnessError::CaseFailure`].
    Abort,
    /// Run every case and report all failures in the summary.
    #[default]
    Aggregate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunnerConfig {
    pub seed: [u8; 32],
    pub summary: SummaryMode,
    pub policy: FailurePolicy,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            summary: SummaryMode::default(),
            policy: FailurePolicy::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseReport {
    /// 1-based position in [`TEST_CASES`].
    pub index: usize,
    pub inputs: (bool, bool),
    pub expected: GateResults,
    pub actual: GateResults,
    pub elapsed: Duration,
    pub verdict: Result<(), VerificationError>,
}

impl CaseReport {
    pub fn passed(&self) -> bool {
        self.verdict.is_ok()
    }
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "case {}: a={}, b={}", self.index, self.inputs.0, self.inputs.1)?;
        writeln!(f, "  expected: {}", self.expected)?;
        writeln!(f, "  actual:   {}", self.actual)?;
        writeln!(f, "  elapsed:  {:?}", self.elapsed)?;
        match &self.verdict {
            Ok(()) => write!(f, "  status:   ok"),
            Err(err) => {
                write!(f, "  status:   FAILED")?;
                err.failures.iter().try_for_each(|failure| write!(f, "\n    {failure}"))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub cases: Vec<CaseReport>,
    pub mode: SummaryMode,
    pub passed: bool,
    pub mean_elapsed: Duration,
}

impl RunSummary {
    /// Failing gates of the timed pass, in case order.
    pub fn failures(&self) -> impl Iterator<Item = &CaseFailure> {
        self.cases
            .iter()
            .filter_map(|case| case.verdict.as_ref().err())
            .flat_map(|err| err.failures.iter())
    }

    /// Explains a failing verdict, naming the pass it was taken from.
    /// Returns `None` when the run passed.
    pub fn failure_reason(&self) -> Option<String> {
        if self.passed {
            return None;
        }
        let timed: usize = self.failures().count();
        Some(match self.mode {
            SummaryMode::Reuse => format!("verification failed: {timed} failing gate result(s)"),
            SummaryMode::Recompute => {
                format!("verification failed in the recomputed pass ({timed} failing gate result(s) in the timed pass)")
            }
        })
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let passed: usize = self.cases.iter().filter(|case| case.passed()).count();
        writeln!(f, "cases passed: {passed}/{}", self.cases.len())?;
        writeln!(f, "mean elapsed: {:?}", self.mean_elapsed)?;
        write!(f, "result: {}", if self.passed { "PASS" } else { "FAIL" })
    }
}

pub struct BenchmarkRunner<'a, L: GateLibrary> {
    adapter: GateInvocationAdapter<'a, L>,
    config: RunnerConfig,
}

impl<'a, L: GateLibrary> BenchmarkRunner<'a, L> {
    pub fn new(library: &'a L, config: RunnerConfig) -> Self {
        Self {
            adapter: GateInvocationAdapter::new(library),
            config,
        }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Runs all cases from a generator seeded with `config.seed`.
    pub fn run(&self) -> Result<RunSummary, HarnessError> {
        let mut source: Source = Source::new(self.config.seed);
        self.run_with(&mut source)
    }

    /// Runs all cases, drawing every random value from `source`.
    pub fn run_with(&self, source: &mut Source) -> Result<RunSummary, HarnessError> {
        self.run_reported(source, |_| {})
    }

    /// Like [`run_with`](Self::run_with), handing every [`CaseReport`] of the
    /// timed pass to `on_case` as soon as the case is verified. Cases finished
    /// before an error or an abort have already been handed over when this
    /// returns `Err`.
    pub fn run_reported<F>(&self, source: &mut Source, mut on_case: F) -> Result<RunSummary, HarnessError>
    where
        F: FnMut(&CaseReport),
    {
        let mut cases: Vec<CaseReport> = Vec::with_capacity(TEST_CASES.len());

        for (i, case) in TEST_CASES.iter().enumerate() {
            let (a, b) = case.inputs;
            info!("running case a={a}, b={b}");

            let start: Instant = Instant::now();
            let actual: GateResults = self.adapter.run_case(source, a, b)?;
            let elapsed: Duration = start.elapsed();

            let report: CaseReport = CaseReport {
                index: i + 1,
                inputs: case.inputs,
                expected: case.expected,
                actual,
                elapsed,
                verdict: verify(case, &actual),
            };
            on_case(&report);

            if let Err(err) = &report.verdict {
                error!("case a={a}, b={b} failed: {err}");
                if self.config.policy == FailurePolicy::Abort {
                    return Err(HarnessError::CaseFailure(err.clone()));
                }
            }
            cases.push(report);
        }

        let passed: bool = match self.config.summary {
            SummaryMode::Reuse => cases.iter().all(CaseReport::passed),
            SummaryMode::Recompute => self.recompute(source)?,
        };

        let total: Duration = cases.iter().map(|case| case.elapsed).sum();
        let mean_elapsed: Duration = total / cases.len() as u32;

        Ok(RunSummary {
            cases,
            mode: self.config.summary,
            passed,
            mean_elapsed,
        })
    }

    fn recompute(&self, source: &mut Source) -> Result<bool, HarnessError> {
        info!("recomputing every case for the summary");
        let mut passed: bool = true;
        for case in TEST_CASES.iter() {
            let (a, b) = case.inputs;
            let actual: GateResults = self.adapter.run_case(source, a, b)?;
            passed &= verify(case, &actual).is_ok();
        }
        Ok(passed)
    }
}
