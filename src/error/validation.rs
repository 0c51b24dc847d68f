use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing target URL (set --target, ROUNDPROBE_TARGET, or 'target' in config).")]
    MissingTarget,
    #[error("Path list was empty.")]
    PathListEmpty,
    #[error("Path '{path}' must start with '/'.")]
    PathNotRelative { path: String },
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
    #[error("Round count must be at least 1.")]
    RoundsZero,
    #[error("Invalid round count '{value}': {source}")]
    InvalidRounds {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
