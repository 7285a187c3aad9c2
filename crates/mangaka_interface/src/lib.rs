//! Trait definitions for the Mangaka script-to-panel toolkit.
//!
//! This crate defines the two seams the rest of the workspace plugs into:
//! the external image backend and the store for script and job records.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod job;
mod traits;

pub use job::{GeneratedPanel, GenerationJob, JobResult, JobStatus, ScriptRecord};
pub use traits::{BackendStatus, ImageBackend, JobRepository};
