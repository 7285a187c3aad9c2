//! Image backend error types.

/// Specific failure conditions when talking to the image backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum BackendErrorKind {
    /// Liveness probe failed or timed out
    #[display("Backend unavailable at {}", _0)]
    Unavailable(String),
    /// Request could not be sent or the connection dropped
    #[display("Request failed: {}", _0)]
    Request(String),
    /// Backend answered with a non-success status
    #[display("Backend returned HTTP {}: {}", status, body)]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly truncated
        body: String,
    },
    /// Response parsed but carried no images
    #[display("No images returned from backend")]
    EmptyResponse,
    /// Response payload could not be decoded
    #[display("Failed to decode backend payload: {}", _0)]
    Decode(String),
    /// Placeholder image could not be rendered
    #[display("Failed to render placeholder image: {}", _0)]
    Placeholder(String),
}

/// Image backend error with location tracking.
///
/// # Examples
///
/// ```
/// use mangaka_error::{BackendError, BackendErrorKind};
///
/// let err = BackendError::new(BackendErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("No images"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Backend Error: {} at line {} in {}", kind, line, file)]
pub struct BackendError {
    /// The kind of error that occurred
    pub kind: BackendErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl BackendError {
    /// Create a new backend error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: BackendErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
