//! Error types for reference decoding.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from the reference codec.
///
/// All variants are terminal: callers present a not-found or invalid
/// state and never retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Wrong prefix or too few `-`-delimited segments.
    #[error("malformed reference")]
    MalformedReference,

    /// The payload is not valid base64, contains a bad percent-escape,
    /// or does not decode to UTF-8.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// The record date does not fit the 8-digit `YYYYMMDD` segment.
    #[error("date {0} is outside years 0000-9999")]
    DateOutOfRange(chrono::NaiveDate),
}
