use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::error::ValidationError;

/// How many rounds a run performs. Zero is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundCount(NonZeroUsize);

impl RoundCount {
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for RoundCount {
    type Error = ValidationError;

    fn try_from(rounds: usize) -> Result<Self, Self::Error> {
        NonZeroUsize::new(rounds)
            .map(Self)
            .ok_or(ValidationError::RoundsZero)
    }
}

impl FromStr for RoundCount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        let rounds = value
            .parse::<usize>()
            .map_err(|err| ValidationError::InvalidRounds {
                value: value.to_owned(),
                source: err,
            })?;
        Self::try_from(rounds)
    }
}
