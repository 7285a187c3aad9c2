//! Shared fixtures for job tests.

#![allow(dead_code)]

use async_trait::async_trait;
use mangaka_core::{GenerationParams, Txt2ImgRequest};
use mangaka_error::MangakaResult;
use mangaka_interface::{
    BackendStatus, GenerationJob, ImageBackend, JobRepository, JobStatus, ScriptRecord,
};
use mangaka_job::{InMemoryJobRepository, JobRunner};
use mangaka_models::PanelGenerator;
use mangaka_prompt::PromptCompiler;
use mangaka_rate_limit::Pacer;
use mangaka_storage::PanelFileStorage;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use uuid::Uuid;

pub const THREE_SCENES: &str = r#"
[SCENE: Classroom - Afternoon]
[CHARACTER: Hana - cheerful student]
[DIALOGUE: Hana] "Hello!"

[SCENE: Rooftop - Sunset]
[ACTION: Wind blows]

[SCENE: Alley - Night]
[ACTION: Ryo throws a punch]
"#;

/// Backend that either renders fixed bytes or is offline.
pub struct StubBackend {
    online: bool,
    calls: AtomicUsize,
}

impl StubBackend {
    pub fn online() -> Self {
        Self {
            online: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn offline() -> Self {
        Self {
            online: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageBackend for StubBackend {
    async fn probe(&self) -> BackendStatus {
        if self.online {
            BackendStatus::Available
        } else {
            BackendStatus::Unavailable {
                reason: "stub offline".to_string(),
            }
        }
    }

    async fn txt2img(&self, request: &Txt2ImgRequest) -> MangakaResult<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(request.prompt.as_bytes().to_vec())
    }

    fn backend_name(&self) -> &'static str {
        "stub"
    }
}

/// Repository wrapper that keeps every saved job snapshot.
#[derive(Default)]
pub struct RecordingRepository {
    inner: InMemoryJobRepository,
    snapshots: Mutex<Vec<GenerationJob>>,
}

impl RecordingRepository {
    pub fn snapshots(&self) -> Vec<GenerationJob> {
        self.snapshots.lock().unwrap().clone()
    }

    pub fn statuses(&self) -> Vec<(JobStatus, usize)> {
        self.snapshots()
            .iter()
            .map(|job| (job.status, job.completed_panels))
            .collect()
    }
}

#[async_trait]
impl JobRepository for RecordingRepository {
    async fn save_script(&self, script: &ScriptRecord) -> MangakaResult<()> {
        self.inner.save_script(script).await
    }

    async fn load_script(&self, id: Uuid) -> MangakaResult<Option<ScriptRecord>> {
        self.inner.load_script(id).await
    }

    async fn list_scripts(&self) -> MangakaResult<Vec<ScriptRecord>> {
        self.inner.list_scripts().await
    }

    async fn save_job(&self, job: &GenerationJob) -> MangakaResult<()> {
        self.snapshots.lock().unwrap().push(job.clone());
        self.inner.save_job(job).await
    }

    async fn load_job(&self, id: Uuid) -> MangakaResult<Option<GenerationJob>> {
        self.inner.load_job(id).await
    }

    async fn list_jobs(&self) -> MangakaResult<Vec<GenerationJob>> {
        self.inner.list_jobs().await
    }
}

pub fn runner(
    backend: Arc<StubBackend>,
    repository: Arc<dyn JobRepository>,
    pacer: Pacer,
    dir: &TempDir,
) -> JobRunner {
    let storage = PanelFileStorage::new(dir.path(), "/images").unwrap();
    let generator = PanelGenerator::new(
        backend,
        Arc::new(storage),
        PromptCompiler::default(),
        GenerationParams::default(),
    )
    .unwrap();
    JobRunner::new(Arc::new(generator), repository, pacer).unwrap()
}
