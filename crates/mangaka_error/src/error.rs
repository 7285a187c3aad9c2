//! Top-level error wrapper types.

use crate::{
    BackendError, ConfigError, HttpError, JobError, JsonError, PacingError, ScriptError,
    StorageError,
};

/// Every error condition a Mangaka crate can surface.
///
/// # Examples
///
/// ```
/// use mangaka_error::{MangakaError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: MangakaError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MangakaErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Image backend error
    #[from(BackendError)]
    Backend(BackendError),
    /// Storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Script source error
    #[from(ScriptError)]
    Script(ScriptError),
    /// Generation job error
    #[from(JobError)]
    Job(JobError),
    /// Request pacing error
    #[from(PacingError)]
    Pacing(PacingError),
}

/// Mangaka error with kind discrimination.
///
/// # Examples
///
/// ```
/// use mangaka_error::{MangakaError, MangakaResult, ConfigError};
///
/// fn might_fail() -> MangakaResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Mangaka Error: {}", _0)]
pub struct MangakaError(Box<MangakaErrorKind>);

impl MangakaError {
    /// Create a new error from a kind.
    pub fn new(kind: MangakaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MangakaErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to MangakaErrorKind
impl<T> From<T> for MangakaError
where
    T: Into<MangakaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Mangaka operations.
///
/// # Examples
///
/// ```
/// use mangaka_error::{MangakaResult, HttpError};
///
/// fn fetch_data() -> MangakaResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type MangakaResult<T> = std::result::Result<T, MangakaError>;
