//! # Error Module
//!
//! Invocation errors for the bigblob CLI. I/O failures are not modeled here;
//! they stay `std::io::Error` and propagate to the top level.

use thiserror::Error;

/// Invalid command-line invocation. The entry point turns any of these into
/// the usage text plus exit status 1; nothing touches the file system first.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// Fewer than the two required arguments (mode and file path)
    #[error("missing required arguments")]
    MissingArguments,

    /// First argument is not `-create`, `-write` or `-read`
    #[error("unknown mode `{0}`")]
    UnknownMode(String),

    /// Third argument is not `-count` or `-size`
    #[error("unknown option `{0}`")]
    UnknownOption(String),

    /// An option flag was given without a value, or extra arguments trail it
    #[error("expected exactly one option flag followed by a value")]
    MalformedOptions,

    /// Count value did not parse as a positive integer
    #[error("invalid count `{0}`: expected a positive integer")]
    InvalidCount(String),
}
