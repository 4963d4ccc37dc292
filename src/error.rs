//! Error types for pagesim.

use std::fmt;

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors a caller of the simulator can see.
///
/// Anything not listed here (undo at the first step, reset while idle) is
/// a no-op rather than an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Bad frame count, empty or malformed reference string, or an unknown
    /// policy name. The simulator stays idle.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A forward step was requested after `Done` was already emitted.
    ///
    /// This is a caller bug. The simulator refuses the call and its state
    /// is left untouched.
    #[error("no more steps: simulation already finished")]
    StepAfterFinished,

    /// A forward step was requested before any run was configured.
    #[error("simulation is not configured")]
    NotConfigured,
}

impl Error {
    /// Shorthand for building an [`Error::InvalidConfiguration`].
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Error::InvalidConfiguration(msg.into())
    }
}

/// Error returned when an internal invariant does not hold.
///
/// Produced by `check_invariants`/`verify` style methods that tests and
/// debug builds use to validate simulator state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}
