//! Pacing error types.

/// Error kinds for request pacing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum PacingErrorKind {
    /// Pacing configuration cannot be turned into a limiter
    #[display("Invalid pacing configuration: {}", _0)]
    InvalidConfig(String),
    /// The in-flight semaphore was closed
    #[display("Pacer closed")]
    Closed,
}

/// Pacing error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pacing Error: {} at line {} in {}", kind, line, file)]
pub struct PacingError {
    kind: PacingErrorKind,
    line: u32,
    file: &'static str,
}

impl PacingError {
    /// Create a new pacing error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PacingErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PacingErrorKind {
        &self.kind
    }
}
