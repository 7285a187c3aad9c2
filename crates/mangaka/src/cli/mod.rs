//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the mangaka binary.

mod commands;
mod generate;
mod script;

pub use commands::{Cli, Commands, OutputFormat};
pub use generate::{generate_panel, generate_script, show_status};
pub use script::{parse_script, print_prompts};
