//! Generation job error types.

/// Specific error conditions for generation jobs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum JobErrorKind {
    /// Script record does not exist
    #[display("Script not found: {}", _0)]
    ScriptNotFound(String),
    /// Job record does not exist
    #[display("Job not found: {}", _0)]
    JobNotFound(String),
    /// Failed to persist a record
    #[display("Failed to persist record: {}", _0)]
    Persist(String),
    /// Failed to load a record
    #[display("Failed to load record: {}", _0)]
    Load(String),
    /// Background task panicked or was aborted
    #[display("Job task failed: {}", _0)]
    Task(String),
}

/// Error type for generation jobs.
///
/// # Examples
///
/// ```
/// use mangaka_error::{JobError, JobErrorKind};
///
/// let err = JobError::new(JobErrorKind::ScriptNotFound("abc".to_string()));
/// assert!(format!("{}", err).contains("Script not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Job Error: {} at line {} in {}", kind, line, file)]
pub struct JobError {
    /// The specific error condition
    pub kind: JobErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl JobError {
    /// Create a new JobError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: JobErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
