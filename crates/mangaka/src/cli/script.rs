//! Parse and prompt command handlers.

use crate::cli::OutputFormat;
use mangaka::{JsonError, Mangaka, MangakaResult, ParsedScript};
use std::path::Path;

/// Parse a script file and print the result.
pub async fn parse_script(app: &Mangaka, file: &Path, format: OutputFormat) -> MangakaResult<()> {
    let (_, parsed) = app.read_script(file).await?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&parsed)
                .map_err(|e| JsonError::new(format!("Failed to serialize script: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Human => print_summary(&parsed),
    }

    Ok(())
}

fn print_summary(parsed: &ParsedScript) {
    println!("📖 {} scene(s)", parsed.total_scenes);
    if !parsed.character_list.is_empty() {
        println!("   Characters: {}", parsed.character_list.join(", "));
    }

    for scene in &parsed.scenes {
        println!();
        println!(
            "[{}] {} - {} ({}, {})",
            scene.order, scene.location, scene.time, scene.scene_type, scene.mood
        );
        for character in &scene.characters {
            if character.description.is_empty() {
                println!("   👤 {}", character.name);
            } else {
                println!("   👤 {} - {}", character.name, character.description);
            }
        }
        for action in &scene.actions {
            println!("   ▶ {}", action);
        }
        for line in &scene.dialogue {
            println!("   💬 {}: \"{}\"", line.speaker, line.text);
        }
    }
}

/// Print compiled prompts for all scenes, or for one.
pub async fn print_prompts(
    app: &Mangaka,
    file: &Path,
    style: Option<&str>,
    scene: Option<usize>,
) -> MangakaResult<()> {
    let (_, parsed) = app.read_script(file).await?;
    let style = app.style(style);

    let scenes = match scene {
        Some(index) => vec![Mangaka::scene(&parsed, index)?],
        None => parsed.scenes.iter().collect(),
    };

    for scene in scenes {
        let compiled = app.compiler().compile(scene, style);
        println!("# {} ({}, model {})", scene.id, style, app.compiler().model_for(style));
        println!("prompt: {}", compiled.prompt);
        println!("negative: {}", compiled.negative_prompt);
        println!();
    }

    Ok(())
}
