//! Per-scene panel generation with fallback.

use crate::render_placeholder;
use mangaka_core::{
    CompiledPrompt, GenerationMetadata, GenerationParams, PanelResult, PanelSource, Scene,
    Txt2ImgRequest,
};
use mangaka_error::MangakaResult;
use mangaka_interface::{BackendStatus, ImageBackend};
use mangaka_prompt::PromptCompiler;
use mangaka_storage::{PanelStore, StoredPanel, content_hash, panel_file_name};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Stages a single panel passes through.
///
/// ```text
/// NotStarted -> Probing -> CallingBackend -> Saved
///                   |             |
///                   +--> Fallback <+
///                           |
///                           +-> Saved
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PanelPhase {
    /// Nothing has happened yet
    #[display("not_started")]
    NotStarted,
    /// Checking backend liveness
    #[display("probing")]
    Probing,
    /// Waiting on txt2img
    #[display("calling_backend")]
    CallingBackend,
    /// Producing the placeholder
    #[display("fallback")]
    Fallback,
    /// Image stored and result assembled
    #[display("saved")]
    Saved,
}

/// A panel result together with the phases it went through.
#[derive(Debug, Clone)]
pub struct PanelRun {
    /// The generated panel
    pub result: PanelResult,
    /// Phases in the order they were entered
    pub phases: Vec<PanelPhase>,
}

struct PhaseTrace {
    scene_id: String,
    phases: Vec<PanelPhase>,
}

impl PhaseTrace {
    fn new(scene_id: &str) -> Self {
        Self {
            scene_id: scene_id.to_string(),
            phases: vec![PanelPhase::NotStarted],
        }
    }

    fn enter(&mut self, phase: PanelPhase) {
        debug!(scene_id = %self.scene_id, %phase, "Panel phase");
        self.phases.push(phase);
    }
}

/// Generates panel images for scenes.
///
/// Every call yields a well-formed [`PanelResult`]. Backend trouble of any
/// kind (probe failure, request error, bad status, empty or undecodable
/// payload, storage failure) switches to the placeholder, recorded in
/// `source` and `error`. There is no retry.
pub struct PanelGenerator {
    backend: Arc<dyn ImageBackend>,
    storage: Arc<dyn PanelStore>,
    compiler: PromptCompiler,
    params: GenerationParams,
    placeholder: Arc<Vec<u8>>,
}

impl std::fmt::Debug for PanelGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelGenerator")
            .field("backend", &self.backend.backend_name())
            .field("compiler", &self.compiler)
            .field("params", &self.params)
            .finish()
    }
}

impl PanelGenerator {
    /// Creates a generator.
    ///
    /// # Errors
    ///
    /// Returns an error if the placeholder image cannot be encoded.
    pub fn new(
        backend: Arc<dyn ImageBackend>,
        storage: Arc<dyn PanelStore>,
        compiler: PromptCompiler,
        params: GenerationParams,
    ) -> MangakaResult<Self> {
        Ok(Self {
            backend,
            storage,
            compiler,
            params,
            placeholder: Arc::new(render_placeholder()?),
        })
    }

    /// Prompt compiler in use.
    pub fn compiler(&self) -> &PromptCompiler {
        &self.compiler
    }

    /// Generate and store a panel for one scene.
    pub async fn generate_panel(&self, scene: &Scene, style: &str) -> PanelResult {
        self.generate_panel_traced(scene, style).await.result
    }

    /// Like [`generate_panel`](Self::generate_panel), also returning the phase trace.
    #[instrument(skip(self, scene), fields(scene_id = %scene.id, backend = self.backend.backend_name()))]
    pub async fn generate_panel_traced(&self, scene: &Scene, style: &str) -> PanelRun {
        let mut trace = PhaseTrace::new(&scene.id);
        let prompt = self.compiler.compile(scene, style);

        trace.enter(PanelPhase::Probing);
        let failure = match self.backend.probe().await {
            BackendStatus::Available => {
                trace.enter(PanelPhase::CallingBackend);
                match self.call_backend(scene, &prompt).await {
                    Ok(stored) => {
                        trace.enter(PanelPhase::Saved);
                        info!(url = %stored.url(), "Panel generated by backend");
                        let result =
                            self.result(scene, style, &prompt, &stored, PanelSource::Backend, None);
                        return PanelRun {
                            result,
                            phases: trace.phases,
                        };
                    }
                    Err(e) => {
                        warn!(error = %e, "Backend generation failed, using placeholder");
                        e.to_string()
                    }
                }
            }
            BackendStatus::Unavailable { reason } => {
                warn!(%reason, "Backend unavailable, using placeholder");
                format!("backend unavailable: {}", reason)
            }
        };

        trace.enter(PanelPhase::Fallback);
        let result = self.fallback(scene, style, &prompt, failure).await;
        trace.enter(PanelPhase::Saved);

        PanelRun {
            result,
            phases: trace.phases,
        }
    }

    async fn call_backend(
        &self,
        scene: &Scene,
        prompt: &CompiledPrompt,
    ) -> MangakaResult<StoredPanel> {
        let request = Txt2ImgRequest::new(prompt, &self.params);
        let bytes = self.backend.txt2img(&request).await?;
        self.storage.store(&scene.id, &bytes).await
    }

    async fn fallback(
        &self,
        scene: &Scene,
        style: &str,
        prompt: &CompiledPrompt,
        failure: String,
    ) -> PanelResult {
        match self.storage.store(&scene.id, &self.placeholder).await {
            Ok(stored) => self.result(
                scene,
                style,
                prompt,
                &stored,
                PanelSource::Fallback,
                Some(failure),
            ),
            Err(e) => {
                // Nothing on disk; report the address the placeholder would have
                error!(error = %e, "Failed to store placeholder");
                let file_name = panel_file_name(&scene.id, &content_hash(&self.placeholder));
                PanelResult {
                    scene_id: scene.id.clone(),
                    image_url: self.storage.url_for(&file_name),
                    image_path: String::new(),
                    prompt_used: prompt.prompt.clone(),
                    negative_prompt: prompt.negative_prompt.clone(),
                    source: PanelSource::Fallback,
                    metadata: self.metadata(scene, style),
                    error: Some(format!("{}; {}", failure, e)),
                }
            }
        }
    }

    fn metadata(&self, scene: &Scene, style: &str) -> GenerationMetadata {
        GenerationMetadata {
            style: style.to_string(),
            scene_type: scene.scene_type,
            mood: scene.mood,
            model: self.compiler.model_for(style).to_string(),
        }
    }

    fn result(
        &self,
        scene: &Scene,
        style: &str,
        prompt: &CompiledPrompt,
        stored: &StoredPanel,
        source: PanelSource,
        error: Option<String>,
    ) -> PanelResult {
        PanelResult {
            scene_id: scene.id.clone(),
            image_url: stored.url().clone(),
            image_path: stored.path().display().to_string(),
            prompt_used: prompt.prompt.clone(),
            negative_prompt: prompt.negative_prompt.clone(),
            source,
            metadata: self.metadata(scene, style),
            error,
        }
    }
}
