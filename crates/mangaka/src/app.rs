//! Application wiring.

use mangaka_core::{ParsedScript, Scene};
use mangaka_error::{MangakaResult, ScriptError, ScriptErrorKind};
use mangaka_interface::{ImageBackend, JobRepository};
use mangaka_job::{FileJobRepository, JobRunner};
use mangaka_models::{PanelGenerator, StableDiffusionClient};
use mangaka_prompt::PromptCompiler;
use mangaka_rate_limit::{MangakaConfig, Pacer};
use mangaka_script::ScriptParser;
use mangaka_storage::PanelFileStorage;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Every service the command line needs, built from one configuration.
#[derive(Debug, Clone)]
pub struct Mangaka {
    config: MangakaConfig,
    parser: ScriptParser,
    generator: Arc<PanelGenerator>,
    runner: JobRunner,
}

impl Mangaka {
    /// Wire up the Stable Diffusion client, panel files and JSON job records.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created or a client cannot
    /// be built.
    #[instrument(skip_all, fields(backend = %config.backend.url))]
    pub fn new(config: MangakaConfig) -> MangakaResult<Self> {
        let backend = Arc::new(StableDiffusionClient::new(&config.backend)?);
        let repository = Arc::new(FileJobRepository::new(&config.jobs.state_dir)?);
        Self::with_parts(config, backend, repository)
    }

    /// Wire up with a caller-supplied backend and record store.
    pub fn with_parts(
        config: MangakaConfig,
        backend: Arc<dyn ImageBackend>,
        repository: Arc<dyn JobRepository>,
    ) -> MangakaResult<Self> {
        let storage = Arc::new(PanelFileStorage::from_config(&config.storage)?);
        let generator = Arc::new(PanelGenerator::new(
            backend,
            storage,
            PromptCompiler::new(config.styles.clone()),
            config.generation.clone(),
        )?);
        let pacer = Pacer::new(&config.pacing)?;
        let runner = JobRunner::new(generator.clone(), repository, pacer)?;

        debug!("Initialized Mangaka services");
        Ok(Self {
            parser: ScriptParser::new()?,
            config,
            generator,
            runner,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &MangakaConfig {
        &self.config
    }

    /// Script parser.
    pub fn parser(&self) -> &ScriptParser {
        &self.parser
    }

    /// Prompt compiler.
    pub fn compiler(&self) -> &PromptCompiler {
        self.generator.compiler()
    }

    /// Panel generator.
    pub fn generator(&self) -> &PanelGenerator {
        &self.generator
    }

    /// Job runner.
    pub fn runner(&self) -> &JobRunner {
        &self.runner
    }

    /// The caller's style, or the configured default.
    pub fn style<'a>(&'a self, style: Option<&'a str>) -> &'a str {
        self.config.styles.resolve(style)
    }

    /// Read a script file, returning its text and parse result.
    pub async fn read_script(&self, path: &Path) -> MangakaResult<(String, ParsedScript)> {
        let text = tokio::fs::read_to_string(path).await.map_err(|e| {
            ScriptError::new(ScriptErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;
        let parsed = self.parser.parse(&text);
        Ok((text, parsed))
    }

    /// Scene at a zero-based index.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error when the script has fewer scenes.
    pub fn scene(parsed: &ParsedScript, index: usize) -> MangakaResult<&Scene> {
        parsed.scene(index).ok_or_else(|| {
            ScriptError::new(ScriptErrorKind::SceneOutOfRange {
                index,
                total: parsed.total_scenes,
            })
            .into()
        })
    }
}
