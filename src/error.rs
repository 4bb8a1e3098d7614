//! Error types for `ChainedHashSet` operations

use thiserror::Error;

/// Result type alias for fallible set operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the guarded entry points of `ChainedHashSet`
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An argument the operation cannot work with, such as an absent element
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = Error::InvalidArgument("element is absent");
        assert_eq!(err.to_string(), "invalid argument: element is absent");
    }
}
