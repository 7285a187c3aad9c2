//! Image backend integration for Mangaka.
//!
//! - [`StableDiffusionClient`] talks to a Stable Diffusion WebUI style API
//! - [`PanelGenerator`] turns one scene into a stored panel image, falling
//!   back to a blank placeholder whenever the backend path fails
//!
//! # Example
//!
//! ```no_run
//! use mangaka_models::{PanelGenerator, StableDiffusionClient};
//! use mangaka_prompt::PromptCompiler;
//! use mangaka_rate_limit::MangakaConfig;
//! use mangaka_storage::PanelFileStorage;
//! use mangaka_core::Scene;
//! use std::sync::Arc;
//!
//! # async fn example() -> mangaka_error::MangakaResult<()> {
//! let config = MangakaConfig::load()?;
//! let backend = StableDiffusionClient::new(&config.backend)?;
//! let storage = PanelFileStorage::from_config(&config.storage)?;
//! let generator = PanelGenerator::new(
//!     Arc::new(backend),
//!     Arc::new(storage),
//!     PromptCompiler::new(config.styles.clone()),
//!     config.generation.clone(),
//! )?;
//!
//! let panel = generator.generate_panel(&Scene::empty(0), "shounen").await;
//! println!("{} ({})", panel.image_url, panel.source);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod generator;
mod placeholder;
mod stable_diffusion;

pub use generator::{PanelGenerator, PanelPhase, PanelRun};
pub use placeholder::{PLACEHOLDER_HEIGHT, PLACEHOLDER_WIDTH, render_placeholder};
pub use stable_diffusion::StableDiffusionClient;
