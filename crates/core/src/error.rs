use thiserror::Error;

/// Errors that can end a sort invocation.
///
/// All errors are terminal: no partial trace is returned alongside them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input sequence was missing or malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The algorithm selector did not name a known algorithm.
    #[error("unknown algorithm `{0}`")]
    InvalidAlgorithm(String),

    /// The sort failed while running.
    ///
    /// For example, two elements turned out to have no defined ordering.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied a bad request.
    Client,

    /// The sort failed for reasons outside the caller's control.
    Internal,
}

impl Error {
    /// Returns whether the error was caused by the caller or by the sort.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) | Self::InvalidAlgorithm(_) => ErrorKind::Client,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }
}
