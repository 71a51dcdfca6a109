//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! Only configuration problems are reported as errors. Broken internal bookkeeping
//! (popping an empty [`crate::sampling::RandomQueue`], reading an empty grid cell) panics.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfig(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_message_is_prefixed() {
        let err = Error::invalid_config("min_distance must be > 0");
        assert_eq!(
            err.to_string(),
            "invalid configuration: min_distance must be > 0"
        );
    }
}
