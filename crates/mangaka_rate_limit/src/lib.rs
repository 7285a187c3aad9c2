//! Configuration and request pacing.
//!
//! Generation jobs call the image backend one scene at a time. The [`Pacer`]
//! enforces that with a GCRA quota (one call per configured delay) and a
//! semaphore bounding in-flight calls. [`MangakaConfig`] carries the pacing
//! settings along with every other tunable in the workspace.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod pacer;

pub use config::{BackendConfig, JobsConfig, MangakaConfig, PacingConfig, StorageConfig};
pub use pacer::{Pacer, PacerGuard};
