//! Request validation errors.

use derive_more::{Display, Error};

/// Reasons a caller's request is rejected before any model call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum ValidationErrorKind {
    /// The `idea` field is absent or empty.
    #[display("Missing 'idea' in request body.")]
    MissingIdea,

    /// The body is not the JSON object we expect.
    #[display("Invalid request body: {}", _0)]
    MalformedBody(String),
}

/// Validation error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Validation Error: {} at {}:{}", kind, file, line)]
pub struct ValidationError {
    /// The specific error kind.
    pub kind: ValidationErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// File where error occurred.
    pub file: &'static str,
}

impl ValidationError {
    /// Creates a new error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
