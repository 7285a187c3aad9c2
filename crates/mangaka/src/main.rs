//! Mangaka CLI binary.
//!
//! This binary provides command-line access to Mangaka's functionality:
//! - Parse scripts into scenes
//! - Print image prompts
//! - Generate single panels or whole-script jobs
//! - Inspect job status

use clap::Parser;
use mangaka::{Mangaka, MangakaConfig};
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{
        Cli, Commands, generate_panel, generate_script, parse_script, print_prompts, show_status,
    };

    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // RUST_LOG wins unless --verbose is given
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => MangakaConfig::from_file(path)?,
        None => MangakaConfig::load()?,
    };
    if let Some(url) = &cli.backend_url {
        config = config.with_backend_url(url);
    }

    let app = Mangaka::new(config)?;

    match cli.command {
        Commands::Parse { file, format } => {
            parse_script(&app, &file, format).await?;
        }

        Commands::Prompt { file, style, scene } => {
            print_prompts(&app, &file, style.as_deref(), scene).await?;
        }

        Commands::Panel { file, scene, style } => {
            generate_panel(&app, &file, scene, style.as_deref()).await?;
        }

        Commands::Generate { file, title, style } => {
            generate_script(&app, &file, title.as_deref(), style.as_deref()).await?;
        }

        Commands::Status { job_id } => {
            show_status(&app, job_id).await?;
        }
    }

    Ok(())
}
