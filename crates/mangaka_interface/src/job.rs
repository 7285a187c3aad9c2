//! Script and generation job records.
//!
//! These are shared between the job runner (in mangaka_job) and whatever
//! stores the records.

use chrono::{DateTime, Utc};
use mangaka_core::{PanelResult, PanelSource, ParsedScript};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored script together with its parse result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptRecord {
    /// Unique identifier
    pub id: Uuid,
    /// Human-readable title
    pub title: String,
    /// Raw script text
    pub content: String,
    /// Default style for generation
    pub style: String,
    /// Parse result
    pub parsed: ParsedScript,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl ScriptRecord {
    /// Create a record with a fresh id.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        style: impl Into<String>,
        parsed: ParsedScript,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            style: style.into(),
            parsed,
            created_at: Utc::now(),
        }
    }
}

/// Lifecycle state of a generation job.
///
/// # Examples
///
/// ```
/// use mangaka_interface::JobStatus;
///
/// assert!(!JobStatus::Processing.is_terminal());
/// assert!(JobStatus::Failed.is_terminal());
/// assert_eq!(format!("{}", JobStatus::Pending), "pending");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Created, not yet started
    #[default]
    #[display("pending")]
    Pending,
    /// Generating panels
    #[display("processing")]
    Processing,
    /// Every scene visited
    #[display("completed")]
    Completed,
    /// Aborted by a job-level error
    #[display("failed")]
    Failed,
}

impl JobStatus {
    /// Whether the job will not change again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }
}

/// Summary of one generated panel inside a job result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPanel {
    /// Scene the panel illustrates
    pub scene_id: String,
    /// URL of the stored image
    pub image_url: String,
    /// Positive prompt used
    pub prompt: String,
    /// Where the image came from
    pub source: PanelSource,
    /// Failure annotation, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&PanelResult> for GeneratedPanel {
    fn from(result: &PanelResult) -> Self {
        Self {
            scene_id: result.scene_id.clone(),
            image_url: result.image_url.clone(),
            prompt: result.prompt_used.clone(),
            source: result.source,
            error: result.error.clone(),
        }
    }
}

/// Final payload of a completed job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobResult {
    /// Panels in scene order; skipped scenes are absent
    pub panels: Vec<GeneratedPanel>,
}

/// Status record of a full-script generation job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationJob {
    /// Unique identifier
    pub id: Uuid,
    /// Script being illustrated
    pub script_id: Uuid,
    /// Style applied to every panel
    pub style: String,
    /// Current state
    pub status: JobStatus,
    /// Fraction of scenes visited, 0.0 to 1.0
    pub progress: f64,
    /// Number of scenes, known once processing starts
    pub total_panels: Option<usize>,
    /// Scenes visited so far
    pub completed_panels: usize,
    /// Panels produced, set on completion
    pub result: Option<JobResult>,
    /// Job-level failure message
    pub error_message: Option<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last update time
    pub updated_at: DateTime<Utc>,
}

impl GenerationJob {
    /// Create a pending job for a script.
    pub fn new(script_id: Uuid, style: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            script_id,
            style: style.into(),
            status: JobStatus::Pending,
            progress: 0.0,
            total_panels: None,
            completed_panels: 0,
            result: None,
            error_message: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Move to `processing` with a known number of scenes.
    pub fn begin(&mut self, total_panels: usize) {
        self.status = JobStatus::Processing;
        self.total_panels = Some(total_panels);
        self.touch();
    }

    /// Record that the scene at `index` has been visited.
    pub fn record_progress(&mut self, index: usize) {
        self.completed_panels = index + 1;
        self.progress = match self.total_panels {
            Some(total) if total > 0 => self.completed_panels as f64 / total as f64,
            _ => 0.0,
        };
        self.touch();
    }

    /// Move to `completed` with the collected panels.
    pub fn complete(&mut self, panels: Vec<GeneratedPanel>) {
        self.status = JobStatus::Completed;
        self.progress = 1.0;
        self.result = Some(JobResult { panels });
        self.touch();
    }

    /// Move to `failed` with a message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = JobStatus::Failed;
        self.error_message = Some(message.into());
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
