//! Prompt and panel result types.

use crate::{Mood, SceneType};
use serde::{Deserialize, Serialize};

/// Positive and negative prompt pair for one scene.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompiledPrompt {
    /// What the image should contain
    pub prompt: String,
    /// What the image should avoid
    pub negative_prompt: String,
}

impl CompiledPrompt {
    /// Create a prompt pair.
    pub fn new(prompt: impl Into<String>, negative_prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            negative_prompt: negative_prompt.into(),
        }
    }
}

/// Where a panel image came from.
#[derive(
    Debug,
    Clone,
    Copy,
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
pub enum PanelSource {
    /// Rendered by the external image backend
    #[display("backend")]
    Backend,
    /// Deterministic placeholder
    #[display("fallback")]
    Fallback,
}

/// Parameters recorded alongside a generated panel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenerationMetadata {
    /// Style requested by the caller
    pub style: String,
    /// Scene category of the source scene
    pub scene_type: SceneType,
    /// Mood of the source scene
    pub mood: Mood,
    /// Backend model associated with the style
    pub model: String,
}

/// Outcome of generating one panel.
///
/// Always well formed: a failed backend call still yields a fallback image,
/// recorded in `source` and `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelResult {
    /// Scene the panel illustrates
    pub scene_id: String,
    /// URL derived from the stored file name
    pub image_url: String,
    /// Path of the stored file
    pub image_path: String,
    /// Positive prompt used
    pub prompt_used: String,
    /// Negative prompt used
    pub negative_prompt: String,
    /// Where the image came from
    pub source: PanelSource,
    /// Generation parameters
    pub metadata: GenerationMetadata,
    /// Failure annotation when the backend path did not succeed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PanelResult {
    /// Whether the image is a placeholder.
    pub fn is_fallback(&self) -> bool {
        self.source == PanelSource::Fallback
    }
}
