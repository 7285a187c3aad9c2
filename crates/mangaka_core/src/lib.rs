//! Core data types for the Mangaka script-to-panel toolkit.
//!
//! This crate provides the data model shared by the parser, the prompt compiler,
//! the image backend client and the job runner.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod classification;
mod panel;
mod scene;
mod script;
mod style;

pub use backend::{
    GenerationParams, GenerationParamsBuilder, GenerationParamsBuilderError, Txt2ImgRequest,
    Txt2ImgResponse,
};
pub use classification::{Mood, SceneType};
pub use panel::{CompiledPrompt, GenerationMetadata, PanelResult, PanelSource};
pub use scene::{CharacterMention, DialogueLine, Scene, SceneBlock};
pub use script::ParsedScript;
pub use style::{COLOR_STYLE, DEFAULT_MODEL, MULTI_PANEL_STYLE, StyleCatalog};
