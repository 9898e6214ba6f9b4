//! Error handling for the nodegenx application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for nodegenx operations.
///
/// Conflicts, unknown templates and rendering failures abort a run. Install and
/// version control failures are recoverable: the orchestrator records them as
/// warnings and still reports the generated files.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The target directory exists (manual mode) or is not empty (preset mode)
    #[error("The folder '{target}' {reason}. Please choose a different name or use '.' for the current directory.")]
    TargetConflictError { target: String, reason: &'static str },

    /// The requested preset does not exist
    #[error("Unknown template: '{name}'. Available templates: {available}.")]
    UnknownTemplateError { name: String, available: String },

    /// A template failed to load or render
    #[error("Failed to render template '{template}': {source}.")]
    RenderError {
        template: String,
        #[source]
        source: minijinja::Error,
    },

    /// A package manager invocation failed
    #[error("Dependency installation failed: {0}.")]
    InstallError(String),

    /// A git command failed
    #[error("Git initialization failed while running '{command}': {reason}.")]
    VcsError { command: String, reason: String },

    /// Represents errors that occur during interactive prompting
    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),

    /// Represents errors that occur while reading or writing JSON documents
    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// Represents invalid configuration values or answers files
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents invalid ignore patterns
    #[error("Ignore pattern error: {0}.")]
    IgnoreError(String),
}

impl Error {
    /// Returns true for failures that must not abort a generation run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::InstallError(_) | Error::VcsError { .. })
    }
}

/// Convenience type alias for Results with nodegenx's [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
