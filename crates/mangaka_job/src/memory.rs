//! In-memory record storage.

use async_trait::async_trait;
use mangaka_error::MangakaResult;
use mangaka_interface::{GenerationJob, JobRepository, ScriptRecord};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Keeps script and job records in memory.
///
/// Contents are lost when the process exits. Suitable for tests and for
/// one-shot CLI runs.
#[derive(Debug, Default)]
pub struct InMemoryJobRepository {
    scripts: RwLock<HashMap<Uuid, ScriptRecord>>,
    jobs: RwLock<HashMap<Uuid, GenerationJob>>,
}

impl InMemoryJobRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn save_script(&self, script: &ScriptRecord) -> MangakaResult<()> {
        self.scripts.write().await.insert(script.id, script.clone());
        Ok(())
    }

    async fn load_script(&self, id: Uuid) -> MangakaResult<Option<ScriptRecord>> {
        Ok(self.scripts.read().await.get(&id).cloned())
    }

    async fn list_scripts(&self) -> MangakaResult<Vec<ScriptRecord>> {
        let mut scripts: Vec<_> = self.scripts.read().await.values().cloned().collect();
        scripts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(scripts)
    }

    async fn save_job(&self, job: &GenerationJob) -> MangakaResult<()> {
        self.jobs.write().await.insert(job.id, job.clone());
        Ok(())
    }

    async fn load_job(&self, id: Uuid) -> MangakaResult<Option<GenerationJob>> {
        Ok(self.jobs.read().await.get(&id).cloned())
    }

    async fn list_jobs(&self) -> MangakaResult<Vec<GenerationJob>> {
        let mut jobs: Vec<_> = self.jobs.read().await.values().cloned().collect();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(jobs)
    }
}
