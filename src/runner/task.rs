use crate::error::ProbeError;

use super::report::AssertionFailure;

/// Per-path state owned by the runner across rounds.
///
/// Workers never see a `UrlTask`; they get a request and the sending half of
/// a one-shot channel, and the runner writes the outcome back here once it
/// observes the completion.
#[derive(Debug)]
pub struct UrlTask {
    pub path: String,
    pub last_error: Option<ProbeError>,
}

impl UrlTask {
    #[must_use]
    pub const fn new(path: String) -> Self {
        Self {
            path,
            last_error: None,
        }
    }

    pub(super) fn reset(&mut self) {
        self.last_error = None;
    }

    pub(super) fn record(&mut self, outcome: Result<(), ProbeError>) {
        self.last_error = outcome.err();
    }

    /// Asserts the error slot is empty.
    ///
    /// # Errors
    ///
    /// Returns the failure naming this path and the captured error text.
    pub fn assert_ok(&self, round: usize) -> Result<(), AssertionFailure> {
        match self.last_error.as_ref() {
            None => Ok(()),
            Some(err) => Err(AssertionFailure::new(round, &self.path, err)),
        }
    }
}
