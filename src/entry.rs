use std::ffi::OsString;
use std::process::ExitCode;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::debug;

use roundprobe::args::RunnerArgs;
use roundprobe::config::{apply_config, load_config};
use roundprobe::error::AppResult;
use roundprobe::runner::{RunnerConfig, run_load_test};

use crate::system::logger::init_logging;
use crate::system::summary_output::{print_json_summary, print_text_summary};

/// Exit code when at least one observed request failed its assertion.
pub(crate) const ASSERTION_FAILURE_EXIT_CODE: u8 = 1;
/// Exit code for invalid arguments, config, or client setup.
pub(crate) const SETUP_FAILURE_EXIT_CODE: u8 = 2;

pub(crate) fn run() -> AppResult<ExitCode> {
    let (mut args, matches) = parse_args()?;

    init_logging(args.verbose, args.no_color);

    if let Some(config) = load_config(args.config.as_deref())? {
        debug!("Applying config file values");
        apply_config(&mut args, &matches, &config)?;
    }
    let config = RunnerConfig::from_args(&args)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let report = runtime.block_on(run_load_test(config))?;

    if args.json {
        print_json_summary(&report)?;
    } else {
        print_text_summary(&report);
    }

    if report.passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(ASSERTION_FAILURE_EXIT_CODE))
    }
}

fn parse_args() -> AppResult<(RunnerArgs, ArgMatches)> {
    let raw_args: Vec<OsString> = std::env::args_os().collect();
    let matches = RunnerArgs::command().get_matches_from(raw_args);
    let args = RunnerArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}
