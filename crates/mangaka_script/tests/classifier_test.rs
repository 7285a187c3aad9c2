//! Tests for keyword classification.

use mangaka_core::{DialogueLine, Mood, SceneType};
use mangaka_script::KeywordTables;

fn actions(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_battle_from_actions_only() {
    let tables = KeywordTables::default();
    // Battle words in dialogue do not count
    let dialogue = vec![DialogueLine::new("Aki", "Let's fight!")];
    assert_eq!(
        tables.classify_scene_type(&actions(&["Aki waits", "Aki stretches"]), &dialogue),
        SceneType::SliceOfLife
    );
    assert_eq!(
        tables.classify_scene_type(&actions(&["Aki KICKS the door"]), &[]),
        SceneType::Battle
    );
}

#[test]
fn test_social_from_dialogue_count() {
    let tables = KeywordTables::default();
    let dialogue = vec![DialogueLine::new("A", "Yes."), DialogueLine::new("B", "No.")];
    assert_eq!(
        tables.classify_scene_type(&actions(&["They sit"]), &dialogue),
        SceneType::Social
    );
}

#[test]
fn test_social_from_keyword() {
    let tables = KeywordTables::default();
    let dialogue = vec![DialogueLine::new("A", "Thank you.")];
    assert_eq!(
        tables.classify_scene_type(&actions(&["A bows"]), &dialogue),
        SceneType::Social
    );
}

#[test]
fn test_social_outranks_romance() {
    let tables = KeywordTables::default();
    let dialogue = vec![DialogueLine::new("A", "Please, I love you.")];
    assert_eq!(
        tables.classify_scene_type(&actions(&["A kneels"]), &dialogue),
        SceneType::Social
    );
}

#[test]
fn test_mood_priority_order() {
    let tables = KeywordTables::default();
    // Intense beats happy
    assert_eq!(tables.classify_mood("A happy battle"), Mood::Intense);
    // Happy beats sad
    assert_eq!(tables.classify_mood("She smiles through tears"), Mood::Happy);
    // Sad beats romantic
    assert_eq!(tables.classify_mood("A sad, gentle goodbye"), Mood::Sad);
    // Romantic beats determined
    assert_eq!(tables.classify_mood("A sweet but strong kiss"), Mood::Romantic);
    assert_eq!(tables.classify_mood("We MUST go"), Mood::Determined);
    assert_eq!(tables.classify_mood("A quiet street"), Mood::Neutral);
}
