//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use uuid::Uuid;

/// Mangaka - turn tagged manga scripts into scenes, prompts and panels
#[derive(Parser, Debug)]
#[command(name = "mangaka")]
#[command(about = "Turn tagged manga scripts into scenes, prompts and panels", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to ./mangaka.toml, then ~/.config/mangaka/mangaka.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the image backend URL
    #[arg(long, global = true)]
    pub backend_url: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a script and print its scenes
    Parse {
        /// Path to the script file
        file: PathBuf,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Print the image prompts for a script
    Prompt {
        /// Path to the script file
        file: PathBuf,

        /// Visual style (defaults to the configured style)
        #[arg(long)]
        style: Option<String>,

        /// Only this zero-based scene
        #[arg(long)]
        scene: Option<usize>,
    },

    /// Generate the panel for one scene
    Panel {
        /// Path to the script file
        file: PathBuf,

        /// Zero-based scene index
        #[arg(long)]
        scene: usize,

        /// Visual style (defaults to the configured style)
        #[arg(long)]
        style: Option<String>,
    },

    /// Generate panels for every scene of a script
    Generate {
        /// Path to the script file
        file: PathBuf,

        /// Script title (defaults to the file name)
        #[arg(long)]
        title: Option<String>,

        /// Visual style (defaults to the configured style)
        #[arg(long)]
        style: Option<String>,
    },

    /// Show a generation job's status
    Status {
        /// Job id printed by `generate`
        job_id: Uuid,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
