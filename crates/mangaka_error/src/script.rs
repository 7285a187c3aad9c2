//! Script error types.
//!
//! Parsing itself never fails; these cover reading script sources.

/// Specific error conditions for script sources.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ScriptErrorKind {
    /// Failed to read script file
    #[display("Failed to read script file: {}", _0)]
    FileRead(String),
    /// A tag pattern failed to compile
    #[display("Invalid tag pattern: {}", _0)]
    Pattern(String),
    /// Requested scene index is outside the parsed script
    #[display("Scene {} out of range (script has {} scenes)", index, total)]
    SceneOutOfRange {
        /// Requested zero-based index
        index: usize,
        /// Number of scenes in the script
        total: usize,
    },
}

/// Error type for script operations.
///
/// # Examples
///
/// ```
/// use mangaka_error::{ScriptError, ScriptErrorKind};
///
/// let err = ScriptError::new(ScriptErrorKind::SceneOutOfRange { index: 4, total: 2 });
/// assert!(format!("{}", err).contains("out of range"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Script Error: {} at line {} in {}", kind, line, file)]
pub struct ScriptError {
    /// The specific error condition
    pub kind: ScriptErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ScriptError {
    /// Create a new ScriptError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ScriptErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
