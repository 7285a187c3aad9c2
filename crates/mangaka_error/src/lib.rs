//! Error types for the Mangaka library.
//!
//! This crate provides the foundation error types used throughout the Mangaka workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use mangaka_error::{MangakaResult, HttpError};
//!
//! fn fetch_data() -> MangakaResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod error;
mod job;
mod message;
mod pacing;
mod script;
mod storage;

pub use backend::{BackendError, BackendErrorKind};
pub use error::{MangakaError, MangakaErrorKind, MangakaResult};
pub use job::{JobError, JobErrorKind};
pub use message::{ConfigError, HttpError, JsonError};
pub use pacing::{PacingError, PacingErrorKind};
pub use script::{ScriptError, ScriptErrorKind};
pub use storage::{StorageError, StorageErrorKind};
