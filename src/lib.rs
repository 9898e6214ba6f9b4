//! nodegenx scaffolds Node.js backend projects.
//! A project is either rendered file by file from a [`config::Configuration`]
//! or copied from a named preset, then optionally provisioned with npm and git.

/// Command-line interface module for the nodegenx application
pub mod cli;

/// External command execution used for npm and git
pub mod command;

/// Project configuration model and answers-file loading
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the nodegenx application
pub mod error;

/// Ignore patterns applied when copying preset trees
pub mod ignore;

/// Dependency derivation and npm installation
pub mod installer;

/// Logger setup
pub mod logger;

/// Target directory checks and file writing
pub mod materializer;

/// Sequencing of manual and preset generation runs
pub mod orchestrator;

/// Named presets and their embedded project trees
pub mod presets;

/// User input and interaction handling
pub mod prompt;

/// Template rendering functionality
pub mod renderer;

/// Mapping from configuration to render tasks
pub mod resolver;

/// Git initialization
pub mod vcs;
