//! Keyword-based scene classification.

use mangaka_core::{DialogueLine, Mood, SceneType};

/// Keyword tables driving scene type and mood inference.
///
/// Matching is case-insensitive substring containment, so `"wills"` matches
/// `"will"` and `"swordsman"` matches `"sword"`.
///
/// # Examples
///
/// ```
/// use mangaka_core::{Mood, SceneType};
/// use mangaka_script::KeywordTables;
///
/// let tables = KeywordTables::default();
/// let actions = vec!["Kai throws a punch".to_string()];
/// assert_eq!(tables.classify_scene_type(&actions, &[]), SceneType::Battle);
/// assert_eq!(tables.classify_mood("They laugh together"), Mood::Happy);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTables {
    /// Looked up in action text
    pub battle: Vec<&'static str>,
    /// Looked up in dialogue text
    pub social: Vec<&'static str>,
    /// Looked up in dialogue text
    pub romance: Vec<&'static str>,
    /// Mood rules in priority order; the first rule with a hit wins
    pub moods: Vec<(Mood, Vec<&'static str>)>,
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self {
            battle: vec!["fight", "battle", "attack", "sword", "punch", "kick"],
            social: vec!["hello", "thank", "sorry", "please"],
            romance: vec!["love", "like", "heart", "beautiful", "cute"],
            moods: vec![
                (
                    Mood::Intense,
                    vec!["battle", "fight", "attack", "danger", "intense"],
                ),
                (Mood::Happy, vec!["happy", "smile", "laugh", "joy", "excited"]),
                (Mood::Sad, vec!["sad", "cry", "tears", "worried", "afraid"]),
                (
                    Mood::Romantic,
                    vec!["love", "romantic", "sweet", "gentle", "tender"],
                ),
                (Mood::Determined, vec!["determined", "strong", "will", "must"]),
            ],
        }
    }
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}

impl KeywordTables {
    /// Infer the scene type from its actions and dialogue.
    ///
    /// Priority: battle, then social, then romance, then slice of life.
    pub fn classify_scene_type(&self, actions: &[String], dialogue: &[DialogueLine]) -> SceneType {
        let action_text = actions.join(" ").to_lowercase();
        let dialogue_text = dialogue
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        if contains_any(&action_text, &self.battle) {
            SceneType::Battle
        } else if dialogue.len() > actions.len() || contains_any(&dialogue_text, &self.social) {
            SceneType::Social
        } else if contains_any(&dialogue_text, &self.romance) {
            SceneType::Romance
        } else {
            SceneType::SliceOfLife
        }
    }

    /// Infer the mood from a scene's full body text.
    pub fn classify_mood(&self, body: &str) -> Mood {
        let body = body.to_lowercase();
        self.moods
            .iter()
            .find(|(_, keywords)| contains_any(&body, keywords))
            .map(|(mood, _)| *mood)
            .unwrap_or_default()
    }
}
