//! Command-line interface implementation for nodegenx.
//! Provides argument parsing using clap.

use crate::constants::DEFAULT_PROJECT_NAME;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for nodegenx.
#[derive(Parser, Debug)]
#[command(author, version, about = "nodegenx: generate a Node.js backend project", long_about = None)]
pub struct Args {
    /// Project name or folder (use . for the current directory) [default: my-node-backend]
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Use a predefined template (see --list-templates)
    #[arg(short, long, value_name = "NAME")]
    pub template: Option<String>,

    /// Read answers from a JSON or YAML file instead of prompting
    #[arg(long, value_name = "FILE", conflicts_with = "template")]
    pub answers: Option<PathBuf>,

    /// Accept every default answer without prompting
    #[arg(short, long, conflicts_with = "template")]
    pub yes: bool,

    /// List the available templates and exit
    #[arg(long)]
    pub list_templates: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// The requested project name, or the default one.
    pub fn project_name(&self) -> &str {
        self.project_name.as_deref().unwrap_or(DEFAULT_PROJECT_NAME)
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for argument errors
pub fn get_args() -> Args {
    Args::parse()
}
