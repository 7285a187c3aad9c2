//! Script parser entry point.

use crate::{KeywordTables, TagPatterns, structure_scene};
use mangaka_core::ParsedScript;
use mangaka_error::{MangakaResult, ScriptError, ScriptErrorKind};
use std::path::Path;
use tracing::{debug, instrument};

/// Parses manga scripts into structured scenes.
///
/// Malformed markup never fails a parse: unmatched tags are skipped and a
/// script without scene markers yields zero scenes.
///
/// # Example
///
/// ```rust
/// use mangaka_core::{Mood, SceneType};
/// use mangaka_script::ScriptParser;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let parser = ScriptParser::new()?;
/// let parsed = parser.parse(
///     "[SCENE: Dojo - Morning]\n\
///      [CHARACTER: Rin - calm swordswoman]\n\
///      [ACTION: Rin draws her blade]\n\
///      [DIALOGUE: Rin] \"Stand back.\"",
/// );
///
/// let scene = &parsed.scenes[0];
/// assert_eq!(scene.location, "Dojo");
/// assert_eq!(scene.time, "Morning");
/// assert_eq!(scene.scene_type, SceneType::SliceOfLife);
/// assert_eq!(scene.mood, Mood::Neutral);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ScriptParser {
    patterns: TagPatterns,
    keywords: KeywordTables,
}

impl ScriptParser {
    /// Create a parser with the standard keyword tables.
    pub fn new() -> MangakaResult<Self> {
        Ok(Self::with_keywords(TagPatterns::new()?, KeywordTables::default()))
    }

    /// Create a parser from prepared patterns and keyword tables.
    pub fn with_keywords(patterns: TagPatterns, keywords: KeywordTables) -> Self {
        Self { patterns, keywords }
    }

    /// Keyword tables in use.
    pub fn keywords(&self) -> &KeywordTables {
        &self.keywords
    }

    /// Parse script text.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn parse(&self, text: &str) -> ParsedScript {
        let scenes = self
            .patterns
            .split_scenes(text)
            .iter()
            .enumerate()
            .map(|(order, block)| structure_scene(block, order, &self.patterns, &self.keywords))
            .collect();

        let parsed = ParsedScript::from_scenes(scenes);
        debug!(
            total_scenes = parsed.total_scenes,
            characters = parsed.character_list.len(),
            "Parsed script"
        );
        parsed
    }

    /// Read and parse a script file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub async fn parse_file(&self, path: impl AsRef<Path>) -> MangakaResult<ParsedScript> {
        let text = tokio::fs::read_to_string(path.as_ref()).await.map_err(|e| {
            ScriptError::new(ScriptErrorKind::FileRead(format!(
                "{}: {}",
                path.as_ref().display(),
                e
            )))
        })?;
        Ok(self.parse(&text))
    }
}
