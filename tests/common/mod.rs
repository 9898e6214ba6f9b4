#![allow(dead_code)]

use nodegenx::command::{CommandExecutor, CommandOutcome};
use nodegenx::error::Result;
use nodegenx::prompt::Prompter;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// A command invocation captured by [`RecordingExecutor`].
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl Invocation {
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Records commands instead of running them. Commands whose command line
/// starts with any of `failing` report exit status 1.
#[derive(Default)]
pub struct RecordingExecutor {
    pub invocations: RefCell<Vec<Invocation>>,
    failing: Vec<String>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(prefixes: &[&str]) -> Self {
        Self { invocations: RefCell::new(Vec::new()), failing: prefixes.iter().map(|p| p.to_string()).collect() }
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.invocations.borrow().iter().map(Invocation::command_line).collect()
    }
}

impl CommandExecutor for RecordingExecutor {
    fn execute(&self, program: &str, args: &[String], working_dir: &Path) -> Result<CommandOutcome> {
        let invocation = Invocation {
            program: program.to_string(),
            args: args.to_vec(),
            working_dir: working_dir.to_path_buf(),
        };
        let line = invocation.command_line();
        self.invocations.borrow_mut().push(invocation);

        if self.failing.iter().any(|prefix| line.starts_with(prefix.as_str())) {
            Ok(CommandOutcome::failure(1))
        } else {
            Ok(CommandOutcome::success())
        }
    }
}

/// One scripted answer for [`ScriptedPrompter`]. `Default` accepts the default.
#[derive(Debug, Clone)]
pub enum Answer {
    Text(&'static str),
    Confirm(bool),
    Select(usize),
    MultiSelect(Vec<usize>),
    Default,
}

/// Replays answers in order; once the script runs out every question gets its default.
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    pub prompts: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self { answers: RefCell::new(answers.into()), prompts: RefCell::new(Vec::new()) }
    }

    fn next(&self, prompt: &str) -> Answer {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.answers.borrow_mut().pop_front().unwrap_or(Answer::Default)
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&self, prompt: &str, default: &str) -> Result<String> {
        Ok(match self.next(prompt) {
            Answer::Text(text) => text.to_string(),
            _ => default.to_string(),
        })
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Ok(match self.next(prompt) {
            Answer::Confirm(value) => value,
            _ => default,
        })
    }

    fn select(&self, prompt: &str, _items: &[&str], default: usize) -> Result<usize> {
        Ok(match self.next(prompt) {
            Answer::Select(index) => index,
            _ => default,
        })
    }

    fn multi_select(&self, prompt: &str, _items: &[&str], defaults: &[bool]) -> Result<Vec<usize>> {
        Ok(match self.next(prompt) {
            Answer::MultiSelect(indices) => indices,
            _ => defaults.iter().enumerate().filter(|(_, c)| **c).map(|(i, _)| i).collect(),
        })
    }
}

/// Lists every file below `root` as sorted, `/`-separated relative paths.
pub fn list_files(root: &Path) -> Vec<String> {
    fn walk(root: &Path, dir: &Path, files: &mut Vec<String>) {
        for entry in std::fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(root, &path, files);
            } else {
                let relative = path.strip_prefix(root).unwrap();
                files.push(relative.to_string_lossy().replace('\\', "/"));
            }
        }
    }

    let mut files = Vec::new();
    walk(root, root, &mut files);
    files.sort();
    files
}
