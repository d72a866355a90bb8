//! Custom error types for the jambase crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum JamError {
    /// An error originating from I/O operations (open, seek, read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The header file path does not end in `.jhr` / `.JHR`.
    #[error("Header file doesn't have a suitable extension: {0}")]
    UnsupportedExtension(String),

    /// A decoded block does not start with the `JAM\0` magic.
    #[error("Missing JAM signature in {context}")]
    MissingSignature { context: &'static str },

    /// Fewer bytes were available than the format declares should be present.
    #[error("Short read for {context}: expected {expected} bytes, but found {found} bytes")]
    ShortRead {
        context: &'static str,
        expected: u64,
        found: u64,
    },

    /// The message record revision is not one this crate understands.
    #[error("Unsupported JAM message header revision: {0}. Only revision 1 is supported.")]
    UnsupportedRevision(u16),

    /// A declared length is larger than the configured sanity limit.
    #[error("Declared {field} of {declared} bytes exceeds the limit of {limit} bytes")]
    LimitExceeded {
        field: &'static str,
        declared: u64,
        limit: u64,
    },

    /// The background producer thread panicked before reporting an error.
    #[error("Message producer thread panicked")]
    ProducerPanicked,
}

impl JamError {
    /// Returns `true` for errors caused by malformed or truncated base content,
    /// as opposed to failures of the underlying byte sources.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            JamError::MissingSignature { .. }
                | JamError::ShortRead { .. }
                | JamError::UnsupportedRevision(_)
                | JamError::LimitExceeded { .. }
        )
    }
}

/// A convenience `Result` type alias using the crate's `JamError` type.
pub type Result<T> = std::result::Result<T, JamError>;
