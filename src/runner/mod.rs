//! The round loop: dispatch one GET per path, collect completions with a
//! bounded wait, and assert on whatever arrives in time.
mod config;
mod report;
mod round;
mod task;


use std::sync::Arc;

use tracing::info;

use crate::error::AppResult;
use crate::http::{HttpProbe, Probe, build_client};

pub use config::RunnerConfig;
pub use report::{AssertionFailure, RoundReport, RunReport};
pub use task::UrlTask;

/// Runs every configured round against one target.
pub struct LoadRunner<P> {
    config: RunnerConfig,
    probe: Arc<P>,
    tasks: Vec<UrlTask>,
}

impl<P: Probe> LoadRunner<P> {
    #[must_use]
    pub fn new(config: RunnerConfig, probe: P) -> Self {
        let tasks = config.paths.iter().cloned().map(UrlTask::new).collect();
        Self {
            config,
            probe: Arc::new(probe),
            tasks,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &RunnerConfig {
        &self.config
    }

    #[must_use]
    pub fn tasks(&self) -> &[UrlTask] {
        &self.tasks
    }

    /// Runs all rounds. Failing assertions are recorded and the next round
    /// still runs.
    pub async fn run(&mut self) -> RunReport {
        let mut report = RunReport::new(self.config.target.clone());
        for round in 0..self.config.rounds {
            let round_report = self.run_round(round).await;
            report.push(round_report);
        }
        info!(
            "Finished {} rounds against {}: {} failure(s), {} unobserved completion(s)",
            report.rounds.len(),
            report.target,
            report.failure_count(),
            report.unobserved_count()
        );
        report
    }

    /// Runs a single round: one request per path, then one bounded wait
    /// per dispatched request.
    pub async fn run_round(&mut self, round: usize) -> RoundReport {
        round::run_round(&self.config, &self.probe, &mut self.tasks, round).await
    }
}

/// Builds an HTTP probe from `config` and runs the full load test.
///
/// # Errors
///
/// Returns an error when the config is invalid or the HTTP client cannot be
/// built. Failed requests are not errors here; they are in the report.
pub async fn run_load_test(config: RunnerConfig) -> AppResult<RunReport> {
    config.validate()?;
    let client = build_client(config.request_timeout)?;
    let probe = HttpProbe::new(client, config.expected_status);
    let mut runner = LoadRunner::new(config, probe);
    Ok(runner.run().await)
}
