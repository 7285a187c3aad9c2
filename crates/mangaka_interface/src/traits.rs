//! Trait definitions for image backends and record storage.

use crate::{GenerationJob, ScriptRecord};
use async_trait::async_trait;
use mangaka_core::Txt2ImgRequest;
use mangaka_error::MangakaResult;
use uuid::Uuid;

/// Result of a backend liveness probe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BackendStatus {
    /// Probe succeeded
    #[display("available")]
    Available,
    /// Probe failed, timed out or returned a non-success status
    #[display("unavailable: {}", reason)]
    Unavailable {
        /// Why the probe failed
        reason: String,
    },
}

impl BackendStatus {
    /// Whether the backend answered the probe.
    pub fn is_available(&self) -> bool {
        matches!(self, BackendStatus::Available)
    }
}

/// An external text-to-image service.
///
/// Implementations never retry; callers decide what to do on failure.
#[async_trait]
pub trait ImageBackend: Send + Sync {
    /// Lightweight liveness check with a short timeout.
    async fn probe(&self) -> BackendStatus;

    /// Submit a generation request and return the decoded bytes of the first image.
    async fn txt2img(&self, request: &Txt2ImgRequest) -> MangakaResult<Vec<u8>>;

    /// Backend name for logs (e.g., "stable-diffusion").
    fn backend_name(&self) -> &'static str;
}

/// Persistence for script and job records.
///
/// Each job record has a single writer, the runner driving that job, so
/// implementations only need last-write-wins semantics.
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Insert or replace a script record.
    async fn save_script(&self, script: &ScriptRecord) -> MangakaResult<()>;

    /// Load a script record, `None` if absent.
    async fn load_script(&self, id: Uuid) -> MangakaResult<Option<ScriptRecord>>;

    /// All script records, newest first.
    async fn list_scripts(&self) -> MangakaResult<Vec<ScriptRecord>>;

    /// Insert or replace a job record.
    async fn save_job(&self, job: &GenerationJob) -> MangakaResult<()>;

    /// Load a job record, `None` if absent.
    async fn load_job(&self, id: Uuid) -> MangakaResult<Option<GenerationJob>>;

    /// All job records, newest first.
    async fn list_jobs(&self) -> MangakaResult<Vec<GenerationJob>>;
}
