//! External command execution.
//! The dependency installer and the VCS initializer only talk to the outside
//! world through [`CommandExecutor`], so tests can substitute a fake.

use crate::error::Result;
use log::debug;
use std::path::Path;
use std::process::{Command, Stdio};

/// Completion status of an external command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    pub succeeded: bool,
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
}

impl CommandOutcome {
    pub fn success() -> Self {
        Self { succeeded: true, exit_code: Some(0) }
    }

    pub fn failure(exit_code: i32) -> Self {
        Self { succeeded: false, exit_code: Some(exit_code) }
    }
}

/// Trait for running external programs.
pub trait CommandExecutor {
    /// Runs `program` with `args` in `working_dir` and waits for it to exit.
    ///
    /// # Errors
    /// * `Error::IoError` if the program could not be started
    fn execute(&self, program: &str, args: &[String], working_dir: &Path) -> Result<CommandOutcome>;
}

/// Runs commands as child processes that inherit the terminal.
#[derive(Debug, Default)]
pub struct SystemCommandExecutor;

impl SystemCommandExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl CommandExecutor for SystemCommandExecutor {
    fn execute(&self, program: &str, args: &[String], working_dir: &Path) -> Result<CommandOutcome> {
        debug!("Running '{}' in {}", display_command(program, args), working_dir.display());

        // npm and npx are batch scripts on Windows and need the shell to resolve them.
        let mut command = if cfg!(target_os = "windows") {
            let mut command = Command::new("cmd");
            command.arg("/C").arg(program);
            command
        } else {
            Command::new(program)
        };

        let status = command
            .args(args)
            .current_dir(working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        Ok(CommandOutcome { succeeded: status.success(), exit_code: status.code() })
    }
}

/// Formats a command line for log and error messages.
pub fn display_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs a command and turns a failed start or non-zero exit into a message.
pub fn run_command(
    executor: &dyn CommandExecutor,
    program: &str,
    args: &[String],
    working_dir: &Path,
) -> std::result::Result<(), String> {
    match executor.execute(program, args, working_dir) {
        Ok(outcome) if outcome.succeeded => Ok(()),
        Ok(CommandOutcome { exit_code: Some(code), .. }) => Err(format!("exited with status {code}")),
        Ok(_) => Err("terminated by a signal".to_string()),
        Err(e) => Err(e.to_string()),
    }
}
