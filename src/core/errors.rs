//! Shared error types for the application

use thiserror::Error;

/// Validation failures for raw user input.
///
/// These are the only recoverable errors in the crate: they are reported to
/// the user and leave the roster untouched. The store, sort engine, and
/// formatter operate on already-validated data and have no error conditions
/// of their own; a malformed record reaching them is a programming fault and
/// trips a debug assertion instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Name or score field was empty after trimming
    #[error("Name and score are required.")]
    MissingField,

    /// Score field did not parse as a real number
    #[error("Score must be a number.")]
    NotANumber,

    /// Parsed score fell outside [0, 100]
    #[error("Score must be between 0 and 100.")]
    OutOfRange,
}
