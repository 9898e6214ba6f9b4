//! Maps a [`Configuration`] to the ordered list of files to render.

use crate::config::{Configuration, Language};
use serde_json::json;
use std::path::PathBuf;

/// How rendered text is written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Trailing whitespace is trimmed and exactly one newline appended
    Trimmed,
    /// Written exactly as rendered
    Verbatim,
}

/// One template to render into one destination file.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderTask {
    /// Template path relative to the embedded template root
    pub template: &'static str,
    /// Destination path relative to the project root
    pub destination: PathBuf,
    /// The only variables visible to the template
    pub bindings: serde_json::Value,
    pub write_mode: WriteMode,
}

impl RenderTask {
    fn new(template: &'static str, destination: &str, bindings: serde_json::Value) -> Self {
        Self {
            template,
            destination: PathBuf::from(destination),
            bindings,
            write_mode: WriteMode::Trimmed,
        }
    }

    fn verbatim(template: &'static str, destination: &str) -> Self {
        Self {
            template,
            destination: PathBuf::from(destination),
            bindings: json!({}),
            write_mode: WriteMode::Verbatim,
        }
    }
}

/// Resolves the render tasks for a manual-mode project.
///
/// `project_name` is the effective project name (see
/// [`crate::config::effective_project_name`]). The result depends on nothing
/// but the arguments.
pub fn resolve(config: &Configuration, project_name: &str) -> Vec<RenderTask> {
    let mut tasks = vec![
        RenderTask::new(
            "config/db.js.j2",
            "src/config/db.js",
            json!({ "database": config.database, "projectName": project_name }),
        ),
        RenderTask::new(
            "models/user.model.js.j2",
            "src/models/user.model.js",
            json!({ "database": config.database }),
        ),
    ];

    if config.auth {
        tasks.push(RenderTask::new(
            "controllers/auth.controller.js.j2",
            "src/controllers/auth.controller.js",
            json!({}),
        ));
        tasks.push(RenderTask::new(
            "middlewares/auth.middleware.js.j2",
            "src/middlewares/auth.middleware.js",
            json!({}),
        ));
        tasks.push(RenderTask::new("routes/auth.routes.js.j2", "src/routes/auth.routes.js", json!({})));
    }

    if config.logging {
        tasks.push(RenderTask::new(
            "config/logger.js.j2",
            "src/config/logger.js",
            json!({ "projectName": project_name }),
        ));
    }

    tasks.push(RenderTask::new(
        "env.j2",
        ".env",
        json!({ "port": config.port, "projectName": project_name }),
    ));

    let (entry_template, entry_destination) = match config.language {
        Language::JavaScript => ("app.js.j2", "src/app.js"),
        Language::TypeScript => ("app.ts.j2", "src/app.ts"),
    };
    tasks.push(RenderTask::new(
        entry_template,
        entry_destination,
        json!({
            "projectName": project_name,
            "middleware": config.middleware,
            "logging": config.logging,
            "linting": config.linting,
            "port": config.port,
            "author": config.author,
            "version": config.version,
            "description": config.description,
            "auth": config.auth,
        }),
    ));

    if config.docker {
        tasks.push(RenderTask::new(
            "docker/Dockerfile.j2",
            "Dockerfile",
            json!({ "language": config.language, "port": config.port }),
        ));
        tasks.push(RenderTask::verbatim("docker/dockerignore.j2", ".dockerignore"));
    }

    tasks.push(RenderTask::new(
        "package.json.j2",
        "package.json",
        json!({
            "projectName": project_name,
            "version": config.version,
            "description": config.description,
            "author": config.author,
            "language": config.language,
            "linting": config.linting,
        }),
    ));

    if config.language == Language::TypeScript {
        tasks.push(RenderTask::new("tsconfig.json.j2", "tsconfig.json", json!({})));
    }

    if config.linting {
        tasks.push(RenderTask::new(
            "linting/eslintrc.js.j2",
            ".eslintrc.js",
            json!({ "language": config.language }),
        ));
        tasks.push(RenderTask::new("linting/prettierrc.j2", ".prettierrc", json!({})));
        tasks.push(RenderTask::verbatim("linting/lintignore.j2", ".eslintignore"));
        tasks.push(RenderTask::verbatim("linting/lintignore.j2", ".prettierignore"));
    }

    tasks
}
