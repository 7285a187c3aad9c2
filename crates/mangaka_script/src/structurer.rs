//! Scene structurer.

use crate::patterns::FIELD_SEPARATOR;
use crate::{KeywordTables, TagPatterns};
use mangaka_core::{Scene, SceneBlock};

fn or_unknown(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => Scene::UNKNOWN.to_string(),
    }
}

/// Split a scene header into location and time.
///
/// The header splits on the first ` - ` only; either side defaults to
/// `Unknown` when missing or blank.
///
/// ```
/// use mangaka_script::parse_header;
///
/// assert_eq!(
///     parse_header("Dojo - Morning"),
///     ("Dojo".to_string(), "Morning".to_string())
/// );
/// assert_eq!(
///     parse_header("Rooftop"),
///     ("Rooftop".to_string(), "Unknown".to_string())
/// );
/// ```
pub fn parse_header(header: &str) -> (String, String) {
    let mut parts = header.splitn(2, FIELD_SEPARATOR);
    let location = or_unknown(parts.next());
    let time = or_unknown(parts.next());
    (location, time)
}

/// Build a normalized scene from one block.
pub fn structure_scene(
    block: &SceneBlock,
    order: usize,
    patterns: &TagPatterns,
    keywords: &KeywordTables,
) -> Scene {
    let (location, time) = parse_header(&block.header);
    let actions = patterns.actions(&block.body);
    let dialogue = patterns.dialogue(&block.body);

    let scene_type = keywords.classify_scene_type(&actions, &dialogue);
    let mood = keywords.classify_mood(&block.body);

    Scene {
        id: Scene::id_for(order),
        order,
        location,
        time,
        characters: patterns.characters(&block.body),
        actions,
        dialogue,
        scene_type,
        mood,
    }
}
