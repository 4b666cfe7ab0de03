use anyhow::{Result, bail};
use boolgate_harness::{BenchmarkRunner, Cggi, RunSummary, RunnerConfig};
use boolgate_sampling::Source;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let library: Cggi = Cggi::default();
    let runner: BenchmarkRunner<Cggi> = BenchmarkRunner::new(&library, RunnerConfig::default());
    let mut source: Source = Source::new(runner.config().seed);

    let summary: RunSummary = runner.run_reported(&mut source, |case| println!("{case}"))?;
    println!("{summary}");

    if let Some(reason) = summary.failure_reason() {
        bail!(reason);
    }
    Ok(())
}
