//! Sequences a generation run in manual or preset mode.

use crate::command::CommandExecutor;
use crate::config::Configuration;
use crate::error::{Error, Result};
use crate::ignore::build_ignore_set;
use crate::installer::install_dependencies;
use crate::materializer::{
    copy_preset_tree, ensure_target_available, patch_manifest_name, GenerationMode, Materializer,
    TargetDirectory,
};
use crate::presets::find_preset;
use crate::renderer::TemplateRenderer;
use crate::resolver::resolve;
use crate::vcs::initialize_repository;
use log::{debug, warn};
use std::fmt;
use std::path::{Path, PathBuf};

/// Steps of a generation run, logged as the run advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ValidatingTemplateName,
    CopyingTemplateTree,
    PatchingManifestName,
    Resolving,
    Materializing,
    Installing,
    InitializingVcs,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::ValidatingTemplateName => "validating template name",
            Stage::CopyingTemplateTree => "copying template tree",
            Stage::PatchingManifestName => "patching manifest name",
            Stage::Resolving => "resolving templates",
            Stage::Materializing => "writing files",
            Stage::Installing => "installing dependencies",
            Stage::InitializingVcs => "initializing git",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Outcome of a successful run.
#[derive(Debug)]
pub struct GenerationReport {
    pub project_name: String,
    pub location: PathBuf,
    pub in_place: bool,
    /// Files written, in write order
    pub created: Vec<PathBuf>,
    /// Recoverable failures (installation, git)
    pub warnings: Vec<Error>,
    /// True when dependencies were installed without errors
    pub dependencies_installed: bool,
}

/// Runs project generation against an explicit working directory.
pub struct Orchestrator<'a> {
    renderer: &'a dyn TemplateRenderer,
    executor: &'a dyn CommandExecutor,
    working_dir: PathBuf,
}

impl<'a> Orchestrator<'a> {
    pub fn new<P: AsRef<Path>>(
        renderer: &'a dyn TemplateRenderer,
        executor: &'a dyn CommandExecutor,
        working_dir: P,
    ) -> Self {
        Self { renderer, executor, working_dir: working_dir.as_ref().to_path_buf() }
    }

    fn enter(&self, stage: Stage) {
        debug!("Stage: {stage}");
    }

    /// Checks up front that manual mode could write `project_name`.
    ///
    /// Lets the CLI reject an existing folder before asking any questions.
    /// The full check is repeated when the project is materialized.
    ///
    /// # Errors
    /// * `Error::TargetConflictError` if the folder already exists
    pub fn ensure_manual_target(&self, project_name: &str) -> Result<()> {
        let target = TargetDirectory::resolve(&self.working_dir, project_name)?;
        ensure_target_available(&target, GenerationMode::Manual)
    }

    /// Copies the named preset into `project_name` and patches its manifest name.
    ///
    /// # Errors
    /// * `Error::UnknownTemplateError` if `template` is not a preset
    /// * `Error::TargetConflictError` if the target exists and is not empty
    pub fn generate_from_preset(&self, project_name: &str, template: &str) -> Result<GenerationReport> {
        self.enter(Stage::ValidatingTemplateName);
        let spec = find_preset(template)?;
        let target = TargetDirectory::resolve(&self.working_dir, project_name)?;

        self.enter(Stage::CopyingTemplateTree);
        let ignored = build_ignore_set(&[])?;
        let created = copy_preset_tree(&target, spec.tree, &ignored)?;

        self.enter(Stage::PatchingManifestName);
        patch_manifest_name(&target.path, &target.project_name)?;

        self.enter(Stage::Done);
        Ok(GenerationReport {
            project_name: target.project_name,
            location: target.path,
            in_place: target.in_place,
            created,
            warnings: Vec::new(),
            dependencies_installed: false,
        })
    }

    /// Renders a project from `config`, then optionally installs dependencies
    /// and initializes git.
    ///
    /// Installation and git failures are returned as report warnings.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the configuration is invalid
    /// * `Error::TargetConflictError` if the target already exists
    /// * `Error::RenderError` if a template fails to render
    pub fn generate_from_configuration(&self, config: &Configuration) -> Result<GenerationReport> {
        config.validate()?;
        let target = TargetDirectory::resolve(&self.working_dir, &config.project_name)?;

        self.enter(Stage::Resolving);
        let tasks = resolve(config, &target.project_name);

        self.enter(Stage::Materializing);
        let created = Materializer::new(self.renderer).materialize(&target, &config.folders, &tasks)?;

        let mut warnings = Vec::new();
        let mut dependencies_installed = false;

        if config.install_dependencies {
            self.enter(Stage::Installing);
            // Failed steps are logged by the installer itself.
            match install_dependencies(self.executor, config, &target.path) {
                Ok(()) => dependencies_installed = true,
                Err(e) => warnings.push(e),
            }
        }

        if config.git {
            self.enter(Stage::InitializingVcs);
            if let Err(e) = initialize_repository(self.renderer, self.executor, &target.path) {
                warn!("{e}");
                warnings.push(e);
            }
        }

        self.enter(Stage::Done);
        Ok(GenerationReport {
            project_name: target.project_name,
            location: target.path,
            in_place: target.in_place,
            created,
            warnings,
            dependencies_installed,
        })
    }
}
