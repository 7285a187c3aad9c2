//! JSON-file record storage.

use async_trait::async_trait;
use derive_getters::Getters;
use mangaka_error::{JobError, JobErrorKind, JsonError, MangakaResult};
use mangaka_interface::{GenerationJob, JobRepository, ScriptRecord};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

const SCRIPTS_DIR: &str = "scripts";
const JOBS_DIR: &str = "jobs";

/// Keeps one pretty-printed JSON file per record.
///
/// ```text
/// mangaka_state/
/// ├── scripts/
/// │   └── 0b8c...e1.json
/// └── jobs/
///     └── 5f21...9a.json
/// ```
///
/// Records from other processes become visible on the next load, so a CLI
/// `status` call can read a job another process is running.
#[derive(Debug, Clone, Getters)]
pub struct FileJobRepository {
    /// Base directory for record files
    state_dir: PathBuf,
}

impl FileJobRepository {
    /// Creates a repository rooted at `state_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directories cannot be created.
    pub fn new(state_dir: impl AsRef<Path>) -> MangakaResult<Self> {
        let state_dir = state_dir.as_ref().to_path_buf();

        for sub in [SCRIPTS_DIR, JOBS_DIR] {
            let dir = state_dir.join(sub);
            std::fs::create_dir_all(&dir).map_err(|e| {
                JobError::new(JobErrorKind::Persist(format!(
                    "Failed to create {}: {}",
                    dir.display(),
                    e
                )))
            })?;
        }

        debug!(path = %state_dir.display(), "Initialized file job repository");
        Ok(Self { state_dir })
    }

    fn record_path(&self, kind: &str, id: Uuid) -> PathBuf {
        self.state_dir.join(kind).join(format!("{}.json", id))
    }

    async fn write_record<T: Serialize>(
        &self,
        kind: &str,
        id: Uuid,
        record: &T,
    ) -> MangakaResult<()> {
        let path = self.record_path(kind, id);
        let contents = serde_json::to_string_pretty(record)
            .map_err(|e| JsonError::new(format!("Failed to serialize record: {}", e)))?;

        // Readers only ever see complete records
        let temp_path = path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, contents).await.map_err(|e| {
            JobError::new(JobErrorKind::Persist(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;
        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            JobError::new(JobErrorKind::Persist(format!(
                "rename to {}: {}",
                path.display(),
                e
            )))
        })?;

        debug!(path = %path.display(), "Saved record");
        Ok(())
    }

    async fn read_record<T: DeserializeOwned>(
        &self,
        kind: &str,
        id: Uuid,
    ) -> MangakaResult<Option<T>> {
        let path = self.record_path(kind, id);

        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(JobError::new(JobErrorKind::Load(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
                .into());
            }
        };

        let record = serde_json::from_str(&contents).map_err(|e| {
            JsonError::new(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        Ok(Some(record))
    }

    async fn read_all<T: DeserializeOwned>(&self, kind: &str) -> MangakaResult<Vec<T>> {
        let dir = self.state_dir.join(kind);
        let mut entries = tokio::fs::read_dir(&dir).await.map_err(|e| {
            JobError::new(JobErrorKind::Load(format!("{}: {}", dir.display(), e)))
        })?;

        let mut records = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            JobError::new(JobErrorKind::Load(format!("{}: {}", dir.display(), e)))
        })? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }

            let parsed = tokio::fs::read_to_string(&path)
                .await
                .ok()
                .and_then(|contents| serde_json::from_str(&contents).ok());
            match parsed {
                Some(record) => records.push(record),
                None => warn!(path = %path.display(), "Skipping unreadable record"),
            }
        }

        Ok(records)
    }
}

#[async_trait]
impl JobRepository for FileJobRepository {
    async fn save_script(&self, script: &ScriptRecord) -> MangakaResult<()> {
        self.write_record(SCRIPTS_DIR, script.id, script).await
    }

    async fn load_script(&self, id: Uuid) -> MangakaResult<Option<ScriptRecord>> {
        self.read_record(SCRIPTS_DIR, id).await
    }

    async fn list_scripts(&self) -> MangakaResult<Vec<ScriptRecord>> {
        let mut scripts: Vec<ScriptRecord> = self.read_all(SCRIPTS_DIR).await?;
        scripts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(scripts)
    }

    async fn save_job(&self, job: &GenerationJob) -> MangakaResult<()> {
        self.write_record(JOBS_DIR, job.id, job).await
    }

    async fn load_job(&self, id: Uuid) -> MangakaResult<Option<GenerationJob>> {
        self.read_record(JOBS_DIR, id).await
    }

    async fn list_jobs(&self) -> MangakaResult<Vec<GenerationJob>> {
        let mut jobs: Vec<GenerationJob> = self.read_all(JOBS_DIR).await?;
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(jobs)
    }
}
