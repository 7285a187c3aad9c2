//! Full-script generation jobs.
//!
//! A job walks every scene of a stored script in order, generating one panel
//! per scene through a [`Pacer`](mangaka_rate_limit::Pacer) so the backend sees
//! a single in-flight call with a fixed gap between calls. Progress is written
//! to a [`JobRepository`](mangaka_interface::JobRepository) after every scene,
//! so callers poll the record rather than the task.
//!
//! # Example
//!
//! ```no_run
//! use mangaka_job::{InMemoryJobRepository, JobRunner};
//! # use mangaka_models::PanelGenerator;
//! # use mangaka_rate_limit::Pacer;
//! # use std::sync::Arc;
//!
//! # async fn example(generator: PanelGenerator) -> mangaka_error::MangakaResult<()> {
//! let runner = JobRunner::new(
//!     Arc::new(generator),
//!     Arc::new(InMemoryJobRepository::new()),
//!     Pacer::unpaced(),
//! )?;
//!
//! let script = runner
//!     .submit_script("Chapter 1", "[SCENE: Dojo - Morning]", None)
//!     .await?;
//! let job = runner.start(script.id, None).await?;
//! let finished = runner.spawn(job.id).await;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod file;
mod memory;
mod runner;

pub use file::FileJobRepository;
pub use memory::InMemoryJobRepository;
pub use runner::JobRunner;
