use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{RoundCount, RunnerArgs};
use crate::error::{AppError, AppResult, ConfigError, ValidationError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments. Values given on the
/// command line or through the environment win over the file.
///
/// # Errors
///
/// Returns an error when a config value is invalid.
pub fn apply_config(
    args: &mut RunnerArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_explicit(matches, "target")
        && let Some(target) = config.target.clone()
    {
        args.target = Some(target);
    }

    if !is_explicit(matches, "paths")
        && let Some(paths) = config.paths.clone()
    {
        args.paths = paths;
    }

    if !is_explicit(matches, "rounds")
        && let Some(rounds) = config.rounds
    {
        args.rounds = RoundCount::try_from(rounds).map_err(|err| invalid("rounds", err))?;
    }

    if !is_explicit(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.request_timeout = timeout.to_duration().map_err(|err| invalid("timeout", err))?;
    }

    if !is_explicit(matches, "wait_timeout")
        && let Some(wait) = config.wait_timeout.as_ref()
    {
        args.wait_timeout = wait
            .to_duration()
            .map_err(|err| invalid("wait_timeout", err))?;
    }

    if !is_explicit(matches, "expected_status_code")
        && let Some(status) = config.status
    {
        args.expected_status_code = status;
    }

    if !is_explicit(matches, "json")
        && let Some(json) = config.json
    {
        args.json = json;
    }

    if !is_explicit(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    Ok(())
}

fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}

fn invalid(field: &'static str, source: ValidationError) -> AppError {
    AppError::config(ConfigError::InvalidField { field, source })
}
