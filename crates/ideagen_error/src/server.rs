//! HTTP listener error types.

/// Listener failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ServerErrorKind {
    /// Could not bind the listening socket.
    #[display("Failed to bind {address}: {message}")]
    Bind {
        /// Address we tried to bind
        address: String,
        /// Underlying I/O error
        message: String,
    },
    /// The server loop exited with an error.
    #[display("Server error: {_0}")]
    Serve(String),
}

/// Server error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Server Error: {} at line {} in {}", kind, line, file)]
pub struct ServerError {
    kind: ServerErrorKind,
    line: u32,
    file: &'static str,
}

impl ServerError {
    /// Create a new server error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ServerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ServerErrorKind {
        &self.kind
    }
}
