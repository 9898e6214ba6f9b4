//! Project configuration model.
//! A [`Configuration`] is built once at the prompting, answers-file or preset
//! boundary, validated, and then only borrowed by the generation pipeline.

use crate::constants::{CURRENT_DIR_SENTINEL, DEFAULT_PROJECT_NAME};
use crate::error::{Error, Result};
use indexmap::IndexSet;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Source language of the generated project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    JavaScript,
    TypeScript,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::JavaScript, Language::TypeScript];

    pub fn label(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
        }
    }

    /// File name of the application entry point.
    pub fn entry_file(&self) -> &'static str {
        match self {
            Language::JavaScript => "app.js",
            Language::TypeScript => "app.ts",
        }
    }
}

/// Database wired into the generated project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Database {
    #[default]
    MongoDB,
    PostgreSQL,
    None,
}

impl Database {
    pub const ALL: [Database; 3] = [Database::MongoDB, Database::PostgreSQL, Database::None];

    pub fn label(&self) -> &'static str {
        match self {
            Database::MongoDB => "MongoDB",
            Database::PostgreSQL => "PostgreSQL",
            Database::None => "None",
        }
    }
}

/// Optional HTTP middleware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Middleware {
    #[serde(rename = "CORS", alias = "Cors")]
    Cors,
    Helmet,
    #[serde(rename = "Rate Limiting", alias = "RateLimiting")]
    RateLimiting,
}

impl Middleware {
    pub const ALL: [Middleware; 3] = [Middleware::Cors, Middleware::Helmet, Middleware::RateLimiting];

    pub fn label(&self) -> &'static str {
        match self {
            Middleware::Cors => "CORS",
            Middleware::Helmet => "Helmet",
            Middleware::RateLimiting => "Rate Limiting",
        }
    }
}

/// Folder created under `src/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Folder {
    Controllers,
    Routes,
    Middlewares,
    Models,
    Config,
}

impl Folder {
    pub const ALL: [Folder; 5] =
        [Folder::Controllers, Folder::Routes, Folder::Middlewares, Folder::Models, Folder::Config];

    pub fn name(&self) -> &'static str {
        match self {
            Folder::Controllers => "controllers",
            Folder::Routes => "routes",
            Folder::Middlewares => "middlewares",
            Folder::Models => "models",
            Folder::Config => "config",
        }
    }
}

macro_rules! impl_display_with {
    ($($ty:ty => $method:ident),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.$method())
                }
            }
        )*
    };
}

impl_display_with!(Language => label, Database => label, Middleware => label, Folder => name);

/// The full set of choices driving one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    pub project_name: String,
    pub language: Language,
    pub database: Database,
    pub auth: bool,
    pub middleware: IndexSet<Middleware>,
    pub logging: bool,
    pub folders: IndexSet<Folder>,
    pub linting: bool,
    pub docker: bool,
    pub git: bool,
    pub install_dependencies: bool,
    pub port: u16,
    pub author: String,
    pub version: String,
    pub description: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            language: Language::JavaScript,
            database: Database::MongoDB,
            auth: true,
            middleware: IndexSet::new(),
            logging: true,
            folders: Folder::ALL.into_iter().collect(),
            linting: true,
            docker: false,
            git: false,
            install_dependencies: false,
            port: 3000,
            author: String::new(),
            version: "1.0.0".to_string(),
            description: String::new(),
        }
    }
}

impl Configuration {
    /// Checks the invariants every downstream component relies on.
    pub fn validate(&self) -> Result<()> {
        if self.project_name.trim().is_empty() {
            return Err(Error::ConfigError("project name must not be empty".to_string()));
        }
        if self.port == 0 {
            return Err(Error::ConfigError(
                "port must be a number between 1 and 65535".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns true when the project is generated into the working directory itself.
    pub fn uses_current_dir(&self) -> bool {
        is_current_dir(&self.project_name)
    }

    pub fn has_middleware(&self, middleware: Middleware) -> bool {
        self.middleware.contains(&middleware)
    }
}

pub fn is_current_dir(project_name: &str) -> bool {
    project_name == CURRENT_DIR_SENTINEL
}

/// Lower-cases a project name and collapses each run of whitespace into `-`.
pub fn normalize_project_name(name: &str) -> String {
    WHITESPACE_RUN.replace_all(&name.to_lowercase(), "-").into_owned()
}

/// Derives the project name written into generated files.
///
/// For the current-directory sentinel the name comes from the basename of
/// `working_dir`, otherwise from the last component of `project_name`.
pub fn effective_project_name<P: AsRef<Path>>(project_name: &str, working_dir: P) -> Result<String> {
    let source = if is_current_dir(project_name) {
        working_dir.as_ref().file_name()
    } else {
        Path::new(project_name).file_name()
    };

    let base = source.and_then(|name| name.to_str()).ok_or_else(|| {
        Error::ConfigError(format!("cannot derive a project name from '{project_name}'"))
    })?;

    Ok(normalize_project_name(base))
}

/// Parses an answers document into a validated [`Configuration`].
///
/// JSON is tried first, YAML second. Missing keys take their default values.
pub fn parse_answers(content: &str) -> Result<Configuration> {
    let config: Configuration = match serde_json::from_str(content) {
        Ok(config) => config,
        Err(json_err) => {
            debug!("Answers are not valid JSON ({json_err}), trying YAML");
            serde_yaml::from_str(content)
                .map_err(|e| Error::ConfigError(format!("Invalid answers format: {e}")))?
        }
    };
    config.validate()?;
    Ok(config)
}

/// Reads and parses an answers file.
pub fn load_answers<P: AsRef<Path>>(path: P) -> Result<Configuration> {
    let path = path.as_ref();
    debug!("Loading answers from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse_answers(&content)
}
