//! Script-level parse result.

use crate::Scene;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Result of parsing one script.
///
/// `character_list` is kept sorted so serialized output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedScript {
    /// Scenes in script order
    pub scenes: Vec<Scene>,
    /// Distinct character names across all scenes
    pub character_list: Vec<String>,
    /// Number of scenes
    pub total_scenes: usize,
}

impl ParsedScript {
    /// Assemble a parse result, deriving the character list and scene count.
    ///
    /// # Examples
    ///
    /// ```
    /// use mangaka_core::{CharacterMention, ParsedScript, Scene};
    ///
    /// let mut first = Scene::empty(0);
    /// first.characters.push(CharacterMention::new("Rin", "swordswoman"));
    /// let mut second = Scene::empty(1);
    /// second.characters.push(CharacterMention::new("Rin", ""));
    /// second.characters.push(CharacterMention::new("Kai", ""));
    ///
    /// let parsed = ParsedScript::from_scenes(vec![first, second]);
    /// assert_eq!(parsed.total_scenes, 2);
    /// assert_eq!(parsed.character_list, vec!["Kai", "Rin"]);
    /// ```
    pub fn from_scenes(scenes: Vec<Scene>) -> Self {
        let character_list = scenes
            .iter()
            .flat_map(|scene| scene.characters.iter().map(|c| c.name.clone()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Self {
            total_scenes: scenes.len(),
            scenes,
            character_list,
        }
    }

    /// Look up a scene by its zero-based order.
    pub fn scene(&self, order: usize) -> Option<&Scene> {
        self.scenes.get(order)
    }

    /// Whether the script produced no scenes.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}
