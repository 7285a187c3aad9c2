//! Image prompt compilation.
//!
//! Turns a normalized [`Scene`](mangaka_core::Scene) plus a style name into the
//! positive and negative prompt strings sent to the image backend.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod compiler;

pub use compiler::{PromptCompiler, mood_phrase};
