use std::sync::Arc;
use std::time::Instant;

use futures_util::StreamExt;
use futures_util::stream::FuturesUnordered;
use tokio::sync::oneshot;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::error::ProbeError;
use crate::http::{Probe, ProbeRequest, stamped_url};

use super::config::RunnerConfig;
use super::report::RoundReport;
use super::task::UrlTask;

pub(super) async fn run_round<P: Probe>(
    config: &RunnerConfig,
    probe: &Arc<P>,
    tasks: &mut [UrlTask],
    round: usize,
) -> RoundReport {
    let started = Instant::now();
    info!("Round {}: dispatching {} request(s)", round, tasks.len());

    let mut pending = FuturesUnordered::new();
    for (index, task) in tasks.iter_mut().enumerate() {
        task.reset();
        let request = ProbeRequest {
            path: task.path.clone(),
            url: stamped_url(&config.target, &task.path, timestamp()),
        };
        let (done_tx, done_rx) = oneshot::channel::<Result<(), ProbeError>>();
        let probe = Arc::clone(probe);
        tokio::spawn(async move {
            let outcome = probe.probe(&request).await;
            // The receiver is gone once the round stopped waiting for us.
            drop(done_tx.send(outcome));
        });
        pending.push(async move { (index, done_rx.await) });
    }

    let dispatched = tasks.len();
    let mut report = RoundReport::new(round, dispatched);

    // One wait per dispatched request. An expired wait is spent without
    // knowing which request was late; a request still pending can be picked
    // up by a later wait, and whatever is left after the last one is dropped.
    for _ in 0..dispatched {
        match timeout(config.wait_timeout, pending.next()).await {
            Ok(Some((index, received))) => {
                let Some(task) = tasks.get_mut(index) else {
                    continue;
                };
                task.record(received.unwrap_or(Err(ProbeError::WorkerLost)));
                report.observed = report.observed.saturating_add(1);
                if let Err(failure) = task.assert_ok(round) {
                    warn!("Round {}: {}", round, failure.message);
                    report.failures.push(failure);
                }
            }
            Ok(None) => break,
            Err(_) => {
                debug!(
                    "Round {}: no completion within {:?}, skipping this check",
                    round, config.wait_timeout
                );
            }
        }
    }
    drop(pending);

    report.unobserved = dispatched.saturating_sub(report.observed);
    report.elapsed = started.elapsed();
    info!(
        "Round {}: {} observed, {} unobserved, {} failure(s) in {:?}",
        round,
        report.observed,
        report.unobserved,
        report.failures.len(),
        report.elapsed
    );
    report
}

fn timestamp() -> i64 {
    chrono::Utc::now().timestamp_micros()
}
