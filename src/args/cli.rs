use clap::Parser;
use std::time::Duration;

use super::parsers::{parse_duration_value, parse_round_count};
use super::types::RoundCount;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Round-based concurrent HTTP smoke/load runner - fires a fixed set of paths at a target in parallel, round after round, and asserts every observed response is 200."
)]
pub struct RunnerArgs {
    /// Target server base URL; each path is appended to it verbatim
    #[arg(long, short = 'u', env = "ROUNDPROBE_TARGET")]
    pub target: Option<String>,

    /// Relative path to request every round (repeatable, defaults to the built-in set)
    #[arg(long = "path", short = 'p')]
    pub paths: Vec<String>,

    /// Number of rounds to run
    #[arg(
        long,
        short = 'r',
        default_value = "20",
        value_parser = parse_round_count
    )]
    pub rounds: RoundCount,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(
        long = "timeout",
        default_value = "30s",
        value_parser = parse_duration_value
    )]
    pub request_timeout: Duration,

    /// How long each collection cycle waits for the next completion (supports ms/s/m/h)
    #[arg(
        long = "wait-timeout",
        default_value = "1s",
        value_parser = parse_duration_value
    )]
    pub wait_timeout: Duration,

    /// Expected HTTP status code
    #[arg(long = "status", short = 's', default_value = "200")]
    pub expected_status_code: u16,

    /// Path to a TOML or JSON config file
    #[arg(long, short = 'c')]
    pub config: Option<String>,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable ANSI colors in log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
