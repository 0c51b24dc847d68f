use std::time::Duration;

use serde::Serialize;

use crate::error::{AppError, AppResult, ProbeError};

/// An observed completion whose error slot was not empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssertionFailure {
    pub round: usize,
    pub path: String,
    pub message: String,
}

impl AssertionFailure {
    pub(super) fn new(round: usize, path: &str, error: &ProbeError) -> Self {
        Self {
            round,
            path: path.to_owned(),
            message: format!("Request failed: {}, url: {}", error.full_text(), path),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundReport {
    pub round: usize,
    pub dispatched: usize,
    pub observed: usize,
    /// Requests whose outcome was never inspected: their completion did not
    /// arrive within any of the round's waits. These are not failures.
    pub unobserved: usize,
    pub failures: Vec<AssertionFailure>,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

impl RoundReport {
    pub(super) const fn new(round: usize, dispatched: usize) -> Self {
        Self {
            round,
            dispatched,
            observed: 0,
            unobserved: 0,
            failures: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub target: String,
    pub rounds: Vec<RoundReport>,
}

impl RunReport {
    pub(super) const fn new(target: String) -> Self {
        Self {
            target,
            rounds: Vec::new(),
        }
    }

    pub(super) fn push(&mut self, round: RoundReport) {
        self.rounds.push(round);
    }

    pub fn failures(&self) -> impl Iterator<Item = &AssertionFailure> {
        self.rounds.iter().flat_map(|round| round.failures.iter())
    }

    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.rounds.iter().map(|round| round.failures.len()).sum()
    }

    #[must_use]
    pub fn observed_count(&self) -> usize {
        self.rounds.iter().map(|round| round.observed).sum()
    }

    #[must_use]
    pub fn unobserved_count(&self) -> usize {
        self.rounds.iter().map(|round| round.unobserved).sum()
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.rounds.iter().all(RoundReport::passed)
    }

    /// Turns the report into a test verdict.
    ///
    /// # Errors
    ///
    /// Returns `AssertionsFailed` carrying the first failure message when any
    /// observed request failed.
    pub fn into_result(self) -> AppResult<Self> {
        let first = self.failures().next().map(|failure| failure.message.clone());
        match first {
            None => Ok(self),
            Some(first) => Err(AppError::AssertionsFailed {
                failures: self.failure_count(),
                first,
            }),
        }
    }
}

fn serialize_millis<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let millis = u64::try_from(value.as_millis()).unwrap_or(u64::MAX);
    serializer.serialize_u64(millis)
}
