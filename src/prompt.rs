//! Interactive collection of the project configuration.
//! Questions are asked through the [`Prompter`] trait so the question flow can
//! be driven by dialoguer, by defaults, or by a scripted prompter in tests.

use crate::config::{Configuration, Database, Folder, Language, Middleware};
use crate::error::{Error, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use indexmap::IndexSet;
use log::warn;

/// A source of answers to configuration questions.
pub trait Prompter {
    /// Asks for free text.
    fn text(&self, prompt: &str, default: &str) -> Result<String>;
    /// Asks a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
    /// Asks for one of `items`, returning its index.
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;
    /// Asks for any subset of `items`, returning the selected indices.
    fn multi_select(&self, prompt: &str, items: &[&str], defaults: &[bool]) -> Result<Vec<usize>>;
}

/// Prompter backed by dialoguer's terminal widgets.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self { theme: ColorfulTheme::default() }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&self, prompt: &str, default: &str) -> Result<String> {
        let input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()?;
        Ok(input)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme).with_prompt(prompt).default(default).interact()?)
    }

    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        Ok(Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()?)
    }

    fn multi_select(&self, prompt: &str, items: &[&str], defaults: &[bool]) -> Result<Vec<usize>> {
        Ok(MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .defaults(defaults)
            .interact()?)
    }
}

/// Prompter that accepts every default without asking.
#[derive(Debug, Default)]
pub struct DefaultsPrompter;

impl Prompter for DefaultsPrompter {
    fn text(&self, _prompt: &str, default: &str) -> Result<String> {
        Ok(default.to_string())
    }

    fn confirm(&self, _prompt: &str, default: bool) -> Result<bool> {
        Ok(default)
    }

    fn select(&self, _prompt: &str, _items: &[&str], default: usize) -> Result<usize> {
        Ok(default)
    }

    fn multi_select(&self, _prompt: &str, _items: &[&str], defaults: &[bool]) -> Result<Vec<usize>> {
        Ok(defaults.iter().enumerate().filter(|(_, checked)| **checked).map(|(i, _)| i).collect())
    }
}

/// Parses a port answer, accepting 1 through 65535.
pub fn parse_port(input: &str) -> Option<u16> {
    input.trim().parse::<u16>().ok().filter(|port| *port != 0)
}

fn select_one<T: Copy + PartialEq>(
    prompter: &dyn Prompter,
    prompt: &str,
    options: &[T],
    labels: &[&str],
    default: T,
) -> Result<T> {
    let default_index = options.iter().position(|option| *option == default).unwrap_or(0);
    let index = prompter.select(prompt, labels, default_index)?;
    Ok(options.get(index).copied().unwrap_or(default))
}

fn select_many<T: Copy + Eq + std::hash::Hash>(
    prompter: &dyn Prompter,
    prompt: &str,
    options: &[T],
    labels: &[&str],
    defaults: &IndexSet<T>,
) -> Result<IndexSet<T>> {
    let checked: Vec<bool> = options.iter().map(|option| defaults.contains(option)).collect();
    let selected = prompter.multi_select(prompt, labels, &checked)?;
    Ok(selected.into_iter().filter_map(|index| options.get(index).copied()).collect())
}

/// Asks every configuration question, starting from `defaults`.
///
/// A port outside 1-65535 is asked again.
pub fn prompt_configuration(prompter: &dyn Prompter, defaults: &Configuration) -> Result<Configuration> {
    let project_name = loop {
        let name = prompter.text("Enter your project name:", &defaults.project_name)?;
        if !name.trim().is_empty() {
            break name.trim().to_string();
        }
        if defaults.project_name.trim().is_empty() {
            return Err(Error::ConfigError("project name must not be empty".to_string()));
        }
        warn!("Project name must not be empty");
    };

    let language_labels: Vec<&str> = Language::ALL.iter().map(Language::label).collect();
    let language = select_one(
        prompter,
        "Which language do you want to use?",
        &Language::ALL,
        &language_labels,
        defaults.language,
    )?;

    let database_labels: Vec<&str> = Database::ALL.iter().map(Database::label).collect();
    let database = select_one(
        prompter,
        "Which database do you want to use?",
        &Database::ALL,
        &database_labels,
        defaults.database,
    )?;

    let auth = prompter.confirm("Do you want to include JWT authentication?", defaults.auth)?;

    let middleware_labels: Vec<&str> = Middleware::ALL.iter().map(Middleware::label).collect();
    let middleware = select_many(
        prompter,
        "Which middleware do you want to include?",
        &Middleware::ALL,
        &middleware_labels,
        &defaults.middleware,
    )?;

    let logging = prompter
        .confirm("Do you want to include logging setup (winston/morgan)?", defaults.logging)?;

    let folder_labels: Vec<&str> = Folder::ALL.iter().map(Folder::name).collect();
    let folders = select_many(
        prompter,
        "Select which folders to include in your project structure:",
        &Folder::ALL,
        &folder_labels,
        &defaults.folders,
    )?;

    let linting = prompter.confirm("Do you want to add ESLint and Prettier setup?", defaults.linting)?;
    let docker = prompter.confirm("Do you want to include Docker setup?", defaults.docker)?;
    let git = prompter.confirm("Do you want to initialize a Git repository?", defaults.git)?;
    let install_dependencies = prompter.confirm(
        "Do you want to install Node modules automatically?",
        defaults.install_dependencies,
    )?;

    let port = loop {
        let default_port = defaults.port.to_string();
        let answer = prompter.text("Which port should the server run on?", &default_port)?;
        match parse_port(&answer) {
            Some(port) => break port,
            None if answer.trim() == default_port => {
                return Err(Error::ConfigError(format!("invalid default port {default_port}")));
            }
            None => warn!("Please enter a valid port number (1-65535)"),
        }
    };

    let author = prompter.text("Author name:", &defaults.author)?;
    let version = prompter.text("Project version:", &defaults.version)?;
    let description = prompter.text("Project description:", &defaults.description)?;

    Ok(Configuration {
        project_name,
        language,
        database,
        auth,
        middleware,
        logging,
        folders,
        linting,
        docker,
        git,
        install_dependencies,
        port,
        author,
        version,
        description,
    })
}
