//! Git repository initialization for generated projects.

use crate::command::{display_command, run_command, CommandExecutor};
use crate::constants::INITIAL_COMMIT_MESSAGE;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use log::{debug, info};
use std::path::Path;

pub const GITIGNORE_TEMPLATE: &str = "gitignore.j2";

/// Writes `.gitignore`, then runs `git init`, `git add .` and the initial commit.
///
/// Stops at the first failure.
///
/// # Errors
/// * `Error::VcsError` naming the step that failed
pub fn initialize_repository(
    renderer: &dyn TemplateRenderer,
    executor: &dyn CommandExecutor,
    project_dir: &Path,
) -> Result<()> {
    let gitignore_error =
        |e: Error| Error::VcsError { command: "write .gitignore".to_string(), reason: e.to_string() };
    let content =
        renderer.render(GITIGNORE_TEMPLATE, &serde_json::json!({})).map_err(gitignore_error)?;
    std::fs::write(project_dir.join(".gitignore"), content)
        .map_err(|e| gitignore_error(Error::IoError(e)))?;

    let steps: [&[&str]; 3] =
        [&["init"], &["add", "."], &["commit", "-m", INITIAL_COMMIT_MESSAGE]];

    info!("Initializing Git repository");
    for step in steps {
        let args: Vec<String> = step.iter().map(|arg| arg.to_string()).collect();
        run_command(executor, "git", &args, project_dir).map_err(|reason| Error::VcsError {
            command: display_command("git", &args),
            reason,
        })?;
    }
    info!("Git repository initialized");

    Ok(())
}

/// Reads `user.name` from the user's git configuration, if any.
pub fn default_author() -> Option<String> {
    let config = git2::Config::open_default()
        .map_err(|e| debug!("Git configuration unavailable: {e}"))
        .ok()?;
    config.get_string("user.name").ok().filter(|name| !name.trim().is_empty())
}
