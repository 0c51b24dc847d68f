use std::error::Error as StdError;

use thiserror::Error;

/// Outcome of a single failed GET, captured by the worker and handed to the
/// orchestrator instead of being propagated.
///
/// Transport variants only describe their layer; the underlying reason lives
/// in the `source()` chain, see [`ProbeError::full_text`].
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Unexpected status {status} (expected {expected})")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        expected: u16,
    },
    #[error("Request timed out")]
    Timeout {
        #[source]
        source: reqwest::Error,
    },
    #[error("Transport error")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to read response body")]
    Body {
        #[source]
        source: reqwest::Error,
    },
    #[error("Worker exited without reporting an outcome.")]
    WorkerLost,
    #[cfg(test)]
    #[error("{message}")]
    Scripted { message: String },
}

impl ProbeError {
    pub(crate) fn from_request(source: reqwest::Error) -> Self {
        if source.is_timeout() {
            ProbeError::Timeout { source }
        } else {
            ProbeError::Transport { source }
        }
    }

    pub(crate) fn from_body(source: reqwest::Error) -> Self {
        if source.is_timeout() {
            ProbeError::Timeout { source }
        } else {
            ProbeError::Body { source }
        }
    }

    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, ProbeError::Timeout { .. })
    }

    /// This error followed by every cause in its `source()` chain, joined
    /// with `": "`. Causes whose text is already present are skipped.
    #[must_use]
    pub fn full_text(&self) -> String {
        let mut text = self.to_string();
        let mut cause = self.source();
        while let Some(err) = cause {
            let layer = err.to_string();
            if !layer.is_empty() && !text.contains(&layer) {
                text.push_str(": ");
                text.push_str(&layer);
            }
            cause = err.source();
        }
        text
    }
}
