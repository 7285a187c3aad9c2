//! Mangaka - manga scripts to panels
//!
//! Mangaka reads screenplay-like scripts marked up with bracketed tags,
//! normalizes them into scenes, infers each scene's type and mood, compiles
//! image prompts and drives a Stable Diffusion style backend to produce one
//! panel per scene, with a blank placeholder whenever the backend is away.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mangaka::{Mangaka, MangakaConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let app = Mangaka::new(MangakaConfig::load()?)?;
//!
//!     let parsed = app.parser().parse("[SCENE: Dojo - Morning]\n[ACTION: Rin bows]");
//!     let scene = Mangaka::scene(&parsed, 0)?;
//!     let panel = app.generator().generate_panel(scene, "shounen").await;
//!     println!("{}", panel.image_url);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Mangaka is organized as a workspace with focused crates:
//!
//! - `mangaka_error` - Error types
//! - `mangaka_core` - Scenes, prompts, panel results, backend payloads
//! - `mangaka_interface` - `ImageBackend` and `JobRepository` traits, job records
//! - `mangaka_rate_limit` - Configuration and request pacing
//! - `mangaka_storage` - Content-hashed panel files
//! - `mangaka_script` - Tag extraction, scene structuring, classification
//! - `mangaka_prompt` - Prompt compiler
//! - `mangaka_models` - Stable Diffusion client and panel generator
//! - `mangaka_job` - Full-script generation jobs
//!
//! This crate (`mangaka`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app;

pub use app::Mangaka;

// Re-export error types
pub use mangaka_error::{
    BackendError, BackendErrorKind, ConfigError, HttpError, JobError, JobErrorKind, JsonError,
    MangakaError, MangakaErrorKind, MangakaResult, PacingError, PacingErrorKind, ScriptError,
    ScriptErrorKind, StorageError, StorageErrorKind,
};

// Re-export core types
pub use mangaka_core::{
    COLOR_STYLE, CharacterMention, CompiledPrompt, DEFAULT_MODEL, DialogueLine,
    GenerationMetadata, GenerationParams, MULTI_PANEL_STYLE, Mood, PanelResult, PanelSource,
    ParsedScript, Scene, SceneBlock, SceneType, StyleCatalog, Txt2ImgRequest, Txt2ImgResponse,
};

// Re-export traits and records
pub use mangaka_interface::{
    BackendStatus, GeneratedPanel, GenerationJob, ImageBackend, JobRepository, JobResult,
    JobStatus, ScriptRecord,
};

// Re-export configuration and pacing
pub use mangaka_rate_limit::{
    BackendConfig, JobsConfig, MangakaConfig, Pacer, PacerGuard, PacingConfig, StorageConfig,
};

// Re-export storage
pub use mangaka_storage::{PanelFileStorage, PanelStore, StoredPanel};

// Re-export parsing and prompting
pub use mangaka_prompt::{PromptCompiler, mood_phrase};
pub use mangaka_script::{KeywordTables, ScriptParser, TagPatterns};

// Re-export backend and jobs
pub use mangaka_job::{FileJobRepository, InMemoryJobRepository, JobRunner};
pub use mangaka_models::{PanelGenerator, PanelPhase, PanelRun, StableDiffusionClient};
