//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod test_support;

pub use cli::RunnerArgs;
pub use defaults::{
    DEFAULT_PATHS, DEFAULT_REQUEST_TIMEOUT, DEFAULT_ROUNDS, DEFAULT_STATUS, DEFAULT_WAIT_TIMEOUT,
};
pub use types::RoundCount;

pub(crate) use defaults::DEFAULT_USER_AGENT;
pub use parsers::parse_duration_value;
