//! Tag tokenizer and extractor.

use mangaka_core::{CharacterMention, DialogueLine, SceneBlock};
use mangaka_error::{MangakaResult, ScriptError, ScriptErrorKind};
use regex::Regex;

const SCENE_PATTERN: &str = r"\[SCENE:\s*([^\]]+)\]";
const CHARACTER_PATTERN: &str = r"\[CHARACTER:\s*([^\]]+)\]";
const ACTION_PATTERN: &str = r"\[ACTION:\s*([^\]]+)\]";
const DIALOGUE_PATTERN: &str = r#"\[DIALOGUE:\s*([^\]]+?)\]\s*"([^"]+)""#;

/// Separator between a name and its description, and between location and time.
pub(crate) const FIELD_SEPARATOR: &str = " - ";

/// Compiled patterns for the four script tags.
#[derive(Debug, Clone)]
pub struct TagPatterns {
    scene: Regex,
    character: Regex,
    action: Regex,
    dialogue: Regex,
}

fn compile(pattern: &str) -> MangakaResult<Regex> {
    Regex::new(pattern).map_err(|e| {
        ScriptError::new(ScriptErrorKind::Pattern(format!("{}: {}", pattern, e))).into()
    })
}

impl TagPatterns {
    /// Compile the tag patterns.
    pub fn new() -> MangakaResult<Self> {
        Ok(Self {
            scene: compile(SCENE_PATTERN)?,
            character: compile(CHARACTER_PATTERN)?,
            action: compile(ACTION_PATTERN)?,
            dialogue: compile(DIALOGUE_PATTERN)?,
        })
    }

    /// Split script text into scene blocks.
    ///
    /// Each `[SCENE: ...]` marker opens a block that runs to the next marker or
    /// the end of the text. Text before the first marker is dropped. Header and
    /// body are trimmed.
    pub fn split_scenes(&self, text: &str) -> Vec<SceneBlock> {
        let markers: Vec<_> = self
            .scene
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let header = caps.get(1)?;
                Some((whole.start(), whole.end(), header.as_str()))
            })
            .collect();

        markers
            .iter()
            .enumerate()
            .map(|(i, (_, end, header))| {
                let body_end = markers
                    .get(i + 1)
                    .map(|(next_start, _, _)| *next_start)
                    .unwrap_or(text.len());
                SceneBlock::new(header.trim(), text[*end..body_end].trim())
            })
            .collect()
    }

    /// Every `[CHARACTER: name - description]` in the body, in order.
    ///
    /// The description is whatever follows the first ` - `, or empty.
    pub fn characters(&self, body: &str) -> Vec<CharacterMention> {
        self.character
            .captures_iter(body)
            .filter_map(|caps| caps.get(1))
            .map(|m| match m.as_str().split_once(FIELD_SEPARATOR) {
                Some((name, description)) => {
                    CharacterMention::new(name.trim(), description.trim())
                }
                None => CharacterMention::new(m.as_str().trim(), ""),
            })
            .collect()
    }

    /// Every `[ACTION: text]` in the body, in order.
    pub fn actions(&self, body: &str) -> Vec<String> {
        self.action
            .captures_iter(body)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .collect()
    }

    /// Every `[DIALOGUE: speaker] "text"` pair in the body, in order.
    ///
    /// A dialogue tag without a quoted line after it is skipped.
    pub fn dialogue(&self, body: &str) -> Vec<DialogueLine> {
        self.dialogue
            .captures_iter(body)
            .filter_map(|caps| {
                let speaker = caps.get(1)?;
                let text = caps.get(2)?;
                Some(DialogueLine::new(
                    speaker.as_str().trim(),
                    text.as_str().trim(),
                ))
            })
            .collect()
    }
}
