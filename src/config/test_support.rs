use clap::{CommandFactory, FromArgMatches};

use crate::args::RunnerArgs;
use crate::error::AppResult;

use super::apply_config;
use super::types::ConfigFile;

/// Parses CLI args, then layers `config` underneath them.
pub(crate) fn args_with_config(cli: &[&str], config: &ConfigFile) -> AppResult<RunnerArgs> {
    let matches = RunnerArgs::command().try_get_matches_from(cli)?;
    let mut args = RunnerArgs::from_arg_matches(&matches)?;
    apply_config(&mut args, &matches, config)?;
    Ok(args)
}
