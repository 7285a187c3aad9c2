//! Scene-level data types.

use crate::{Mood, SceneType};
use serde::{Deserialize, Serialize};

/// A raw slice of script text belonging to one `[SCENE: ...]` marker.
///
/// Produced by the tag extractor and discarded once the scene is structured.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SceneBlock {
    /// Marker header, e.g. `Dojo - Morning`
    pub header: String,
    /// Everything between this marker and the next
    pub body: String,
}

impl SceneBlock {
    /// Create a block from header and body text.
    pub fn new(header: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            body: body.into(),
        }
    }
}

/// A character named in one scene.
///
/// # Examples
///
/// ```
/// use mangaka_core::CharacterMention;
///
/// let rin = CharacterMention::new("Rin", "");
/// assert!(rin.description.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterMention {
    /// Character name
    pub name: String,
    /// Free-form visual description, empty when absent
    #[serde(default)]
    pub description: String,
}

impl CharacterMention {
    /// Create a character mention.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// One spoken line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DialogueLine {
    /// Who speaks
    pub speaker: String,
    /// What is said, without the surrounding quotes
    pub text: String,
}

impl DialogueLine {
    /// Create a dialogue line.
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
        }
    }
}

/// A normalized scene.
///
/// `id` is derived from `order`, so two parses of the same script produce
/// identical scenes.
///
/// # Examples
///
/// ```
/// use mangaka_core::{Mood, Scene, SceneType};
///
/// let scene = Scene::empty(3);
/// assert_eq!(scene.id, "scene_3");
/// assert_eq!(scene.location, "Unknown");
/// assert_eq!(scene.scene_type, SceneType::SliceOfLife);
/// assert_eq!(scene.mood, Mood::Neutral);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scene {
    /// Stable identifier, `scene_<order>`
    pub id: String,
    /// Zero-based position in the script
    pub order: usize,
    /// Where the scene takes place
    pub location: String,
    /// When the scene takes place
    pub time: String,
    /// Characters in order of first mention
    #[serde(default)]
    pub characters: Vec<CharacterMention>,
    /// Action descriptions in order
    #[serde(default)]
    pub actions: Vec<String>,
    /// Dialogue in order
    #[serde(default)]
    pub dialogue: Vec<DialogueLine>,
    /// Inferred scene category
    #[serde(default)]
    pub scene_type: SceneType,
    /// Inferred mood
    #[serde(default)]
    pub mood: Mood,
}

impl Scene {
    /// Placeholder used for both location and time when a header omits them.
    pub const UNKNOWN: &'static str = "Unknown";

    /// Identifier for the scene at `order`.
    pub fn id_for(order: usize) -> String {
        format!("scene_{}", order)
    }

    /// A scene with no content at the given position.
    pub fn empty(order: usize) -> Self {
        Self {
            id: Self::id_for(order),
            order,
            location: Self::UNKNOWN.to_string(),
            time: Self::UNKNOWN.to_string(),
            characters: Vec::new(),
            actions: Vec::new(),
            dialogue: Vec::new(),
            scene_type: SceneType::default(),
            mood: Mood::default(),
        }
    }
}
