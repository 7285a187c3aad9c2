//! Panel and job command handlers.

use mangaka::{GenerationJob, JobStatus, JsonError, Mangaka, MangakaResult};
use std::path::Path;
use uuid::Uuid;

/// Generate one scene's panel and print the result as JSON.
pub async fn generate_panel(
    app: &Mangaka,
    file: &Path,
    scene: usize,
    style: Option<&str>,
) -> MangakaResult<()> {
    let (_, parsed) = app.read_script(file).await?;
    let scene = Mangaka::scene(&parsed, scene)?;

    let result = app.generator().generate_panel(scene, app.style(style)).await;
    if let Some(reason) = &result.error {
        eprintln!("⚠️  Placeholder used: {}", reason);
    }

    let json = serde_json::to_string_pretty(&result)
        .map_err(|e| JsonError::new(format!("Failed to serialize panel: {}", e)))?;
    println!("{}", json);
    Ok(())
}

/// Store a script, run a job over every scene and print the outcome.
pub async fn generate_script(
    app: &Mangaka,
    file: &Path,
    title: Option<&str>,
    style: Option<&str>,
) -> MangakaResult<()> {
    let (text, _) = app.read_script(file).await?;
    let title = match title {
        Some(title) => title.to_string(),
        None => file
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string()),
    };

    let runner = app.runner();
    let script = runner.submit_script(&title, &text, style).await?;
    let job = runner.start(script.id, None).await?;
    println!("🎬 Job {} started for \"{}\" ({} scenes)", job.id, title, script.parsed.total_scenes);

    let job = runner.run(job.id).await?;
    print_job(&job);
    Ok(())
}

/// Print a stored job record.
pub async fn show_status(app: &Mangaka, job_id: Uuid) -> MangakaResult<()> {
    let job = app.runner().status(job_id).await?;
    print_job(&job);
    Ok(())
}

fn print_job(job: &GenerationJob) {
    let icon = match job.status {
        JobStatus::Pending => "⏳",
        JobStatus::Processing => "🔄",
        JobStatus::Completed => "✅",
        JobStatus::Failed => "❌",
    };
    println!("{} Job {}: {}", icon, job.id, job.status);
    println!(
        "   Progress: {:.0}% ({}/{})",
        job.progress * 100.0,
        job.completed_panels,
        job.total_panels.map_or_else(|| "?".to_string(), |t| t.to_string())
    );

    if let Some(message) = &job.error_message {
        println!("   Error: {}", message);
    }

    if let Some(result) = &job.result {
        for panel in &result.panels {
            let note = panel
                .error
                .as_deref()
                .map(|e| format!(" ({})", e))
                .unwrap_or_default();
            println!("   🖼  {} -> {} [{}]{}", panel.scene_id, panel.image_url, panel.source, note);
        }
    }
}
