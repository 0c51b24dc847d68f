use std::time::Duration;

use crate::args::{
    DEFAULT_PATHS, DEFAULT_REQUEST_TIMEOUT, DEFAULT_ROUNDS, DEFAULT_STATUS, DEFAULT_WAIT_TIMEOUT,
    RoundCount, RunnerArgs,
};
use crate::error::{AppError, AppResult, ValidationError};
use crate::http::validate_target;

/// Everything a run needs, resolved up front and handed to the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub target: String,
    pub paths: Vec<String>,
    pub rounds: usize,
    pub request_timeout: Duration,
    pub wait_timeout: Duration,
    pub expected_status: u16,
}

impl RunnerConfig {
    /// Config for `target` with the built-in path list and default timings.
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            paths: DEFAULT_PATHS.iter().map(|path| (*path).to_owned()).collect(),
            rounds: DEFAULT_ROUNDS,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
            expected_status: DEFAULT_STATUS,
        }
    }

    #[must_use]
    pub fn with_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paths = paths.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub const fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    #[must_use]
    pub const fn with_wait_timeout(mut self, timeout: Duration) -> Self {
        self.wait_timeout = timeout;
        self
    }

    #[must_use]
    pub const fn with_expected_status(mut self, status: u16) -> Self {
        self.expected_status = status;
        self
    }

    /// Resolves parsed CLI arguments (with any config file already applied).
    ///
    /// # Errors
    ///
    /// Returns an error when the target is missing or the result fails
    /// [`RunnerConfig::validate`].
    pub fn from_args(args: &RunnerArgs) -> AppResult<Self> {
        let target = args
            .target
            .clone()
            .ok_or_else(|| AppError::validation(ValidationError::MissingTarget))?;
        let mut config = Self::new(target)
            .with_rounds(args.rounds.get())
            .with_request_timeout(args.request_timeout)
            .with_wait_timeout(args.wait_timeout)
            .with_expected_status(args.expected_status_code);
        if !args.paths.is_empty() {
            config = config.with_paths(args.paths.iter().cloned());
        }
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns an error for an invalid target, an empty path list, a path
    /// without a leading `/`, zero rounds, or a zero timeout.
    pub fn validate(&self) -> AppResult<()> {
        validate_target(&self.target)?;
        if self.paths.is_empty() {
            return Err(AppError::validation(ValidationError::PathListEmpty));
        }
        if let Some(path) = self.paths.iter().find(|path| !path.starts_with('/')) {
            return Err(AppError::validation(ValidationError::PathNotRelative {
                path: path.clone(),
            }));
        }
        RoundCount::try_from(self.rounds).map_err(AppError::validation)?;
        if self.request_timeout.is_zero() || self.wait_timeout.is_zero() {
            return Err(AppError::validation(ValidationError::DurationZero));
        }
        Ok(())
    }
}
