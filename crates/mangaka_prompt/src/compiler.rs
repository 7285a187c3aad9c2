//! Prompt templates.

use mangaka_core::{
    COLOR_STYLE, CompiledPrompt, MULTI_PANEL_STYLE, Mood, Scene, StyleCatalog,
};
use tracing::{debug, instrument};

const NEGATIVE_TERMS: [&str; 8] = [
    "blurry",
    "low quality",
    "bad anatomy",
    "extra limbs",
    "malformed",
    "text",
    "watermark",
    "signature",
];

const MULTIPLE_PANELS: &str = "multiple panels";

/// Lighting and expression cues for a mood, `None` for neutral.
///
/// ```
/// use mangaka_core::Mood;
/// use mangaka_prompt::mood_phrase;
///
/// assert_eq!(
///     mood_phrase(Mood::Intense),
///     Some("dramatic lighting, dynamic pose, action lines")
/// );
/// assert_eq!(mood_phrase(Mood::Neutral), None);
/// ```
pub fn mood_phrase(mood: Mood) -> Option<&'static str> {
    match mood {
        Mood::Intense => Some("dramatic lighting, dynamic pose, action lines"),
        Mood::Happy => Some("bright lighting, cheerful expression, positive atmosphere"),
        Mood::Sad => Some("soft lighting, melancholic mood, emotional expression"),
        Mood::Romantic => Some("soft lighting, gentle expression, romantic atmosphere"),
        Mood::Determined => Some("strong pose, confident expression, focused eyes"),
        Mood::Neutral => None,
    }
}

/// Compiles scenes into backend prompts.
///
/// Holds only the style catalog; compilation is a pure function of the scene
/// and the style.
///
/// # Example
///
/// ```rust
/// use mangaka_core::{CharacterMention, Mood, Scene};
/// use mangaka_prompt::PromptCompiler;
///
/// let mut scene = Scene::empty(0);
/// scene.location = "Dojo".to_string();
/// scene.characters.push(CharacterMention::new("Rin", "calm swordswoman"));
/// scene.mood = Mood::Determined;
///
/// let compiled = PromptCompiler::default().compile(&scene, "shounen");
/// assert!(compiled.prompt.starts_with("manga panel, shounen style, character: calm swordswoman"));
/// assert!(compiled.negative_prompt.ends_with("multiple panels"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptCompiler {
    styles: StyleCatalog,
}

impl PromptCompiler {
    /// Create a compiler with a style catalog.
    pub fn new(styles: StyleCatalog) -> Self {
        Self { styles }
    }

    /// Style catalog in use.
    pub fn styles(&self) -> &StyleCatalog {
        &self.styles
    }

    /// Backend model associated with a style.
    pub fn model_for(&self, style: &str) -> &str {
        self.styles.model_for(style)
    }

    /// Build the positive and negative prompts for a scene.
    #[instrument(skip(self, scene), fields(scene_id = %scene.id))]
    pub fn compile(&self, scene: &Scene, style: &str) -> CompiledPrompt {
        let prompt = self.positive_prompt(scene, style);
        debug!(prompt_len = prompt.len(), "Compiled prompt");
        CompiledPrompt::new(prompt, self.negative_prompt(style))
    }

    /// Positive prompt: subject, characters, setting, action, mood, quality.
    pub fn positive_prompt(&self, scene: &Scene, style: &str) -> String {
        let mut parts = vec![format!("manga panel, {} style", style)];

        parts.extend(
            scene
                .characters
                .iter()
                .filter(|c| !c.description.is_empty())
                .map(|c| format!("character: {}", c.description)),
        );

        if !scene.location.is_empty() {
            parts.push(format!("location: {}", scene.location));
        }

        if !scene.actions.is_empty() {
            parts.push(format!("action: {}", scene.actions.join(", ")));
        }

        if let Some(phrase) = mood_phrase(scene.mood) {
            parts.push(phrase.to_string());
        }

        let art = if style == COLOR_STYLE {
            "manga art"
        } else {
            "black and white manga art"
        };
        parts.extend(
            ["high quality", "detailed", art, "professional illustration"]
                .iter()
                .map(|tag| tag.to_string()),
        );

        parts.join(", ")
    }

    /// Negative prompt, dropping the panel-count term for multi-panel styles.
    pub fn negative_prompt(&self, style: &str) -> String {
        let mut terms = NEGATIVE_TERMS.to_vec();
        if style != MULTI_PANEL_STYLE {
            terms.push(MULTIPLE_PANELS);
        }
        terms.join(", ")
    }
}
