//! Configuration structures.
//!
//! This module provides TOML-based configuration. The configuration
//! system supports:
//! - Bundled defaults (include_str! from mangaka.toml)
//! - User overrides (./mangaka.toml or ~/.config/mangaka/mangaka.toml)
//! - Automatic merging with user values taking precedence

use config::{Config, File, FileFormat};
use mangaka_core::{GenerationParams, StyleCatalog};
use mangaka_error::{ConfigError, MangakaError, MangakaResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, instrument};

/// Where the image backend lives and how long to wait for it.
///
/// ```toml
/// [backend]
/// url = "http://127.0.0.1:7860"
/// probe_timeout_secs = 5
/// request_timeout_secs = 60
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the Stable Diffusion WebUI API
    pub url: String,
    /// Timeout for the liveness probe
    pub probe_timeout_secs: u64,
    /// Timeout for a generation request
    pub request_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:7860".to_string(),
            probe_timeout_secs: 5,
            request_timeout_secs: 60,
        }
    }
}

impl BackendConfig {
    /// Probe timeout as a duration.
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    /// Request timeout as a duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Where panel images are written and how they are addressed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding panel files
    pub output_dir: PathBuf,
    /// URL prefix under which panel files are served
    pub url_prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("generated_images"),
            url_prefix: "/images".to_string(),
        }
    }
}

/// Spacing between backend calls during a job.
///
/// ```toml
/// [pacing]
/// delay_ms = 1000
/// max_in_flight = 1
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Minimum milliseconds between consecutive calls, 0 disables spacing
    pub delay_ms: u64,
    /// Maximum concurrent calls
    pub max_in_flight: u32,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1000,
            max_in_flight: 1,
        }
    }
}

impl PacingConfig {
    /// Delay as a duration.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Where script and job records are kept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct JobsConfig {
    /// Directory holding JSON records
    pub state_dir: PathBuf,
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self {
            state_dir: PathBuf::from("mangaka_state"),
        }
    }
}

/// Top-level Mangaka configuration.
///
/// Loads configuration from TOML files with a precedence system:
/// 1. Bundled defaults (include_str! from mangaka.toml)
/// 2. User override (./mangaka.toml or ~/.config/mangaka/mangaka.toml)
///
/// # Example
///
/// ```no_run
/// use mangaka_rate_limit::MangakaConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = MangakaConfig::load()?;
/// println!("Backend at {}", config.backend.url);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct MangakaConfig {
    /// Image backend location and timeouts
    #[serde(default)]
    pub backend: BackendConfig,

    /// Sampling parameters sent with every request
    #[serde(default)]
    pub generation: GenerationParams,

    /// Style names and their checkpoints
    #[serde(default)]
    pub styles: StyleCatalog,

    /// Panel file storage
    #[serde(default)]
    pub storage: StorageConfig,

    /// Spacing between backend calls
    #[serde(default)]
    pub pacing: PacingConfig,

    /// Record storage
    #[serde(default)]
    pub jobs: JobsConfig,
}

impl MangakaConfig {
    /// Bundled default configuration text.
    pub const DEFAULT_TOML: &'static str = include_str!("../../../mangaka.toml");

    /// Load configuration from a specific file path.
    ///
    /// Values missing from the file fall back to the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> MangakaResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from_str(Self::DEFAULT_TOML, FileFormat::Toml))
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                MangakaError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                MangakaError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (mangaka.toml shipped with library)
    /// 2. User config in home directory (~/.config/mangaka/mangaka.toml)
    /// 3. User config in current directory (./mangaka.toml)
    ///
    /// User config files are optional and will be silently skipped if not found.
    #[instrument]
    pub fn load() -> MangakaResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder = Config::builder()
            // Start with bundled defaults
            .add_source(File::from_str(Self::DEFAULT_TOML, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/mangaka/mangaka.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Highest precedence
        builder = builder.add_source(File::with_name("mangaka").required(false));

        builder
            .build()
            .map_err(|e| {
                MangakaError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                MangakaError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Parse the bundled defaults only.
    pub fn bundled() -> MangakaResult<Self> {
        Config::builder()
            .add_source(File::from_str(Self::DEFAULT_TOML, FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize::<Self>())
            .map_err(|e| {
                MangakaError::from(ConfigError::new(format!(
                    "Failed to parse bundled configuration: {}",
                    e
                )))
            })
    }

    /// Replace the backend URL, e.g. from a command-line flag.
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend.url = url.into();
        self
    }
}
