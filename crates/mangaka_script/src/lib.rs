//! Manga script parsing.
//!
//! A manga script is plain text marked up with bracketed tags:
//!
//! ```text
//! [SCENE: Dojo - Morning]
//! [CHARACTER: Rin - calm swordswoman]
//! [ACTION: Rin draws her blade]
//! [DIALOGUE: Rin] "Stand back."
//! ```
//!
//! Parsing runs in three stages:
//!
//! - [`TagPatterns`] slices the text into scene blocks and extracts tags
//! - [`structure_scene`] turns one block into a normalized [`Scene`]
//! - [`KeywordTables`] infers each scene's type and mood
//!
//! [`ScriptParser`] bundles the compiled patterns and keyword tables. It is
//! immutable after construction, so one parser can serve any number of
//! concurrent callers.
//!
//! [`Scene`]: mangaka_core::Scene

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classifier;
mod parser;
mod patterns;
mod structurer;

pub use classifier::KeywordTables;
pub use parser::ScriptParser;
pub use patterns::TagPatterns;
pub use structurer::{parse_header, structure_scene};
