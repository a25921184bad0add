//! Error types for the ideagen content generation service.
//!
//! Every error records the file and line it was created at. Crate-level
//! failures are collected in [`IdeagenError`].

mod config;
mod generation;
mod server;
mod validation;

pub use config::ConfigError;
pub use generation::{GenerationError, GenerationErrorKind, GenerationResult, RetryableError};
pub use server::{ServerError, ServerErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum IdeagenErrorKind {
    /// Model call failed
    Generation(GenerationError),
    /// Caller sent an unusable request
    Validation(ValidationError),
    /// Configuration could not be loaded
    Config(ConfigError),
    /// Listener failed
    Server(ServerError),
}

impl std::fmt::Display for IdeagenErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdeagenErrorKind::Generation(e) => write!(f, "{}", e),
            IdeagenErrorKind::Validation(e) => write!(f, "{}", e),
            IdeagenErrorKind::Config(e) => write!(f, "{}", e),
            IdeagenErrorKind::Server(e) => write!(f, "{}", e),
        }
    }
}

/// Ideagen error with kind discrimination.
#[derive(Debug)]
pub struct IdeagenError(Box<IdeagenErrorKind>);

impl IdeagenError {
    /// Create a new error from a kind.
    pub fn new(kind: IdeagenErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &IdeagenErrorKind {
        &self.0
    }
}

impl std::fmt::Display for IdeagenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ideagen Error: {}", self.0)
    }
}

impl std::error::Error for IdeagenError {}

impl<T> From<T> for IdeagenError
where
    T: Into<IdeagenErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for ideagen operations.
pub type IdeagenResult<T> = std::result::Result<T, IdeagenError>;
