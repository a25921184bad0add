//! Generation error types and retry classification.

/// Marker the upstream model puts in its error text when it sheds load.
const OVERLOAD_MARKER: &str = "overloaded";

/// Status code the upstream model answers with when it is unavailable.
const OVERLOAD_STATUS: u16 = 503;

/// Failure conditions of a single generation call.
///
/// The kind is decided where the failure is observed (the model client), so
/// retry logic downstream never has to inspect message text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GenerationErrorKind {
    /// No API key was configured for the model client
    MissingApiKey,
    /// Upstream signalled that it is temporarily unavailable
    Overloaded {
        /// HTTP status code
        status: u16,
        /// Raw upstream error body
        message: String,
    },
    /// Upstream rejected the request for any other reason
    Upstream {
        /// HTTP status code
        status: u16,
        /// Raw upstream error body
        message: String,
    },
    /// Upstream answered but the candidate carried no usable text
    Empty,
    /// The request never reached the upstream model
    Transport(String),
    /// The upstream body could not be decoded
    ResponseParsing(String),
}

impl std::fmt::Display for GenerationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationErrorKind::MissingApiKey => {
                write!(f, "GEMINI_API_KEY environment variable not set")
            }
            GenerationErrorKind::Overloaded { status, message } => {
                write!(f, "Model overloaded (HTTP {}): {}", status, message)
            }
            GenerationErrorKind::Upstream { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            GenerationErrorKind::Empty => write!(f, "Empty response from Gemini."),
            GenerationErrorKind::Transport(msg) => write!(f, "Request failed: {}", msg),
            GenerationErrorKind::ResponseParsing(msg) => {
                write!(f, "Failed to parse response: {}", msg)
            }
        }
    }
}

impl GenerationErrorKind {
    /// Classify a non-success upstream answer.
    ///
    /// A 503 status or the `"overloaded"` marker (case-sensitive) in the body
    /// yields [`GenerationErrorKind::Overloaded`]; everything else is a
    /// permanent [`GenerationErrorKind::Upstream`] failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use ideagen_error::GenerationErrorKind;
    ///
    /// let kind = GenerationErrorKind::from_status(500, "The model is overloaded.");
    /// assert!(kind.is_retryable());
    ///
    /// let kind = GenerationErrorKind::from_status(400, "API key not valid");
    /// assert!(!kind.is_retryable());
    /// ```
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if status == OVERLOAD_STATUS || message.contains(OVERLOAD_MARKER) {
            GenerationErrorKind::Overloaded { status, message }
        } else {
            GenerationErrorKind::Upstream { status, message }
        }
    }

    /// Only overload failures are transient.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GenerationErrorKind::Overloaded { .. })
    }

    /// The message callers should see, before any JSON unwrapping.
    ///
    /// Upstream failures surface the raw body the model returned, which is
    /// usually a JSON document carrying `error.message`.
    pub fn upstream_message(&self) -> String {
        match self {
            GenerationErrorKind::Overloaded { message, .. }
            | GenerationErrorKind::Upstream { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use ideagen_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::Empty);
/// assert!(format!("{}", err).contains("Empty response"));
/// ```
#[derive(Debug, Clone)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for [`GenerationErrorKind::upstream_message`].
    pub fn upstream_message(&self) -> String {
        self.kind.upstream_message()
    }
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Generation Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for GenerationError {}

/// Trait for errors that support retry logic.
///
/// # Examples
///
/// ```
/// use ideagen_error::{GenerationError, GenerationErrorKind, RetryableError};
///
/// let err = GenerationError::new(GenerationErrorKind::Overloaded {
///     status: 503,
///     message: "Service unavailable".to_string(),
/// });
/// assert!(err.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for GenerationError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}

/// Result type for generation calls.
pub type GenerationResult<T> = Result<T, GenerationError>;
