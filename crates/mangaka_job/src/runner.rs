//! Job runner.

use mangaka_error::{JobError, JobErrorKind, MangakaResult};
use mangaka_interface::{GeneratedPanel, GenerationJob, JobRepository, ScriptRecord};
use mangaka_models::PanelGenerator;
use mangaka_rate_limit::Pacer;
use mangaka_script::ScriptParser;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

/// Creates, runs and reports generation jobs.
///
/// Cheap to clone; clones share the generator, repository and pacer.
#[derive(Clone)]
pub struct JobRunner {
    parser: Arc<ScriptParser>,
    generator: Arc<PanelGenerator>,
    repository: Arc<dyn JobRepository>,
    pacer: Pacer,
}

impl std::fmt::Debug for JobRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobRunner")
            .field("generator", &self.generator)
            .field("pacer", &self.pacer)
            .finish_non_exhaustive()
    }
}

impl JobRunner {
    /// Create a runner.
    ///
    /// # Errors
    ///
    /// Returns an error if the script parser cannot be built.
    pub fn new(
        generator: Arc<PanelGenerator>,
        repository: Arc<dyn JobRepository>,
        pacer: Pacer,
    ) -> MangakaResult<Self> {
        Ok(Self {
            parser: Arc::new(ScriptParser::new()?),
            generator,
            repository,
            pacer,
        })
    }

    /// Record repository in use.
    pub fn repository(&self) -> &Arc<dyn JobRepository> {
        &self.repository
    }

    fn resolve_style(&self, style: Option<&str>) -> String {
        self.generator.compiler().styles().resolve(style).to_string()
    }

    /// Parse a script and store it.
    ///
    /// `style` defaults to the catalog's default style.
    #[instrument(skip(self, content), fields(content_len = content.len()))]
    pub async fn submit_script(
        &self,
        title: &str,
        content: &str,
        style: Option<&str>,
    ) -> MangakaResult<ScriptRecord> {
        let parsed = self.parser.parse(content);
        let record = ScriptRecord::new(title, content, self.resolve_style(style), parsed);

        self.repository.save_script(&record).await?;
        info!(script_id = %record.id, scenes = record.parsed.total_scenes, "Stored script");
        Ok(record)
    }

    /// Create a pending job for a stored script.
    ///
    /// `style` defaults to the style the script was submitted with.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the script does not exist.
    #[instrument(skip(self))]
    pub async fn start(
        &self,
        script_id: Uuid,
        style: Option<&str>,
    ) -> MangakaResult<GenerationJob> {
        let script = self
            .repository
            .load_script(script_id)
            .await?
            .ok_or_else(|| JobError::new(JobErrorKind::ScriptNotFound(script_id.to_string())))?;

        let style = match style {
            Some(style) if !style.trim().is_empty() => style.to_string(),
            _ => script.style.clone(),
        };

        let job = GenerationJob::new(script_id, style);
        self.repository.save_job(&job).await?;
        info!(job_id = %job.id, "Created generation job");
        Ok(job)
    }

    /// Current record of a job.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the job does not exist.
    pub async fn status(&self, job_id: Uuid) -> MangakaResult<GenerationJob> {
        self.repository
            .load_job(job_id)
            .await?
            .ok_or_else(|| JobError::new(JobErrorKind::JobNotFound(job_id.to_string())).into())
    }

    /// Generate every panel of a job's script, in order.
    ///
    /// Progress is persisted after each scene. A scene that fails is logged and
    /// skipped. A missing script fails the job; the failed record is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the job does not exist or its final state cannot be
    /// saved.
    #[instrument(skip(self))]
    pub async fn run(&self, job_id: Uuid) -> MangakaResult<GenerationJob> {
        let mut job = self.status(job_id).await?;
        if job.status.is_terminal() {
            info!(status = %job.status, "Job already finished");
            return Ok(job);
        }

        let script = match self.repository.load_script(job.script_id).await {
            Ok(Some(script)) => script,
            Ok(None) => {
                let message = format!("Script not found: {}", job.script_id);
                error!(%message, "Generation job failed");
                job.fail(message);
                self.repository.save_job(&job).await?;
                return Ok(job);
            }
            Err(e) => {
                error!(error = %e, "Generation job failed");
                job.fail(e.to_string());
                self.repository.save_job(&job).await?;
                return Ok(job);
            }
        };

        let scenes = &script.parsed.scenes;
        job.begin(scenes.len());
        self.persist(&job).await;
        info!(total = scenes.len(), style = %job.style, "Generating panels");

        let mut panels = Vec::with_capacity(scenes.len());
        for (index, scene) in scenes.iter().enumerate() {
            let _guard = match self.pacer.acquire().await {
                Ok(guard) => guard,
                Err(e) => {
                    warn!(scene_id = %scene.id, error = %e, "Skipping scene");
                    continue;
                }
            };

            let result = self.generator.generate_panel(scene, &job.style).await;
            if let Some(reason) = &result.error {
                warn!(scene_id = %scene.id, %reason, "Panel used placeholder");
            }
            panels.push(GeneratedPanel::from(&result));

            job.record_progress(index);
            self.persist(&job).await;
        }

        job.complete(panels);
        self.repository.save_job(&job).await?;
        info!(
            completed = job.completed_panels,
            total = scenes.len(),
            "Generation job completed"
        );
        Ok(job)
    }

    /// Run a job on a background task.
    ///
    /// The handle resolves to the final record. Poll [`status`](Self::status)
    /// for progress in the meantime.
    pub fn spawn(&self, job_id: Uuid) -> JoinHandle<MangakaResult<GenerationJob>> {
        let runner = self.clone();
        tokio::spawn(async move { runner.run(job_id).await })
    }

    /// Wait for a spawned job, mapping a panicked task to a job error.
    pub async fn join(
        handle: JoinHandle<MangakaResult<GenerationJob>>,
    ) -> MangakaResult<GenerationJob> {
        handle
            .await
            .map_err(|e| JobError::new(JobErrorKind::Task(e.to_string())))?
    }

    async fn persist(&self, job: &GenerationJob) {
        if let Err(e) = self.repository.save_job(job).await {
            warn!(job_id = %job.id, error = %e, "Failed to persist job progress");
        }
    }
}
