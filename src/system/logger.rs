use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Filter variables in precedence order.
const FILTER_VARS: [&str; 2] = ["ROUNDPROBE_LOG", "RUST_LOG"];

pub(crate) fn init_logging(verbose: bool, no_color: bool) {
    let directive = filter_directive(verbose, |name| std::env::var(name).ok());
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(directive))
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Logging already initialised, keeping it: {}", err);
    }
}

/// First usable directive among `FILTER_VARS`. Blank values and values
/// `EnvFilter` rejects fall through to the next variable, then to the
/// verbosity default.
fn filter_directive(verbose: bool, lookup: impl Fn(&str) -> Option<String>) -> String {
    FILTER_VARS
        .iter()
        .filter_map(|name| lookup(*name))
        .map(|value| value.trim().to_owned())
        .find(|value| !value.is_empty() && EnvFilter::try_new(value).is_ok())
        .unwrap_or_else(|| default_level(verbose).to_owned())
}

const fn default_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_of(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let pairs = pairs.to_vec();
        move |name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_owned())
        }
    }

    #[test]
    fn verbosity_picks_the_default_level() -> Result<(), String> {
        let quiet = filter_directive(false, env_of(&[]));
        let verbose = filter_directive(true, env_of(&[]));
        if quiet != "info" || verbose != "debug" {
            return Err(format!("Unexpected defaults: {} / {}", quiet, verbose));
        }
        Ok(())
    }

    #[test]
    fn own_variable_wins_over_rust_log() -> Result<(), String> {
        let env = env_of(&[("ROUNDPROBE_LOG", "roundprobe=trace"), ("RUST_LOG", "warn")]);
        let directive = filter_directive(false, env);
        if directive != "roundprobe=trace" {
            return Err(format!("Unexpected directive: {}", directive));
        }
        let fallback = filter_directive(true, env_of(&[("RUST_LOG", "warn")]));
        if fallback != "warn" {
            return Err(format!("RUST_LOG should beat --verbose, got: {}", fallback));
        }
        Ok(())
    }

    #[test]
    fn blank_or_invalid_values_fall_through() -> Result<(), String> {
        let blank = env_of(&[("ROUNDPROBE_LOG", "  "), ("RUST_LOG", "error")]);
        let after_blank = filter_directive(false, blank);
        if after_blank != "error" {
            return Err(format!("Blank value should be skipped, got: {}", after_blank));
        }
        let invalid = env_of(&[("ROUNDPROBE_LOG", "roundprobe=loud")]);
        let after_invalid = filter_directive(true, invalid);
        if after_invalid != "debug" {
            return Err(format!("Invalid value should be skipped, got: {}", after_invalid));
        }
        Ok(())
    }

    #[test]
    fn second_initialisation_keeps_running() {
        init_logging(false, true);
        init_logging(true, false);
        tracing::debug!("logging still usable after a repeated init");
    }
}
