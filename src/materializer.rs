//! Writes generated projects to disk.
//! Handles target directory conflicts, rendering of resolved tasks, verbatim
//! copies of preset trees and the package manifest name patch.

use crate::config::{effective_project_name, is_current_dir, Folder};
use crate::constants::PACKAGE_MANIFEST;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use crate::resolver::{RenderTask, WriteMode};
use globset::GlobSet;
use include_dir::{Dir, DirEntry, File};
use indexmap::IndexSet;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// How the project content is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Files rendered one by one from a configuration
    Manual,
    /// A preset tree copied verbatim
    Preset,
}

/// The directory a project is generated into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDirectory {
    pub path: PathBuf,
    /// Effective project name used inside generated files
    pub project_name: String,
    /// True when the working directory itself is reused
    pub in_place: bool,
}

impl TargetDirectory {
    /// Resolves the target for `requested_name` relative to `working_dir`.
    ///
    /// # Errors
    /// * `Error::ConfigError` if no project name can be derived
    pub fn resolve<P: AsRef<Path>>(working_dir: P, requested_name: &str) -> Result<Self> {
        let working_dir = working_dir.as_ref();
        let in_place = is_current_dir(requested_name);
        let path =
            if in_place { working_dir.to_path_buf() } else { working_dir.join(requested_name) };

        Ok(Self {
            path,
            project_name: effective_project_name(requested_name, working_dir)?,
            in_place,
        })
    }
}

fn is_empty_dir(path: &Path) -> Result<bool> {
    if !path.is_dir() {
        return Ok(false);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Ensures the target directory is safe to write to.
///
/// Manual mode requires the directory to not exist, unless it is the working
/// directory itself. Preset mode accepts a missing or empty directory.
///
/// # Errors
/// * `Error::TargetConflictError` if the directory cannot be used
pub fn ensure_target_available(target: &TargetDirectory, mode: GenerationMode) -> Result<()> {
    let conflict = |reason| Error::TargetConflictError {
        target: target.path.display().to_string(),
        reason,
    };

    match mode {
        GenerationMode::Manual if !target.in_place && target.path.exists() => {
            Err(conflict("already exists"))
        }
        GenerationMode::Preset if target.path.exists() && !is_empty_dir(&target.path)? => {
            Err(conflict("already exists and is not empty"))
        }
        _ => Ok(()),
    }
}

fn write_file(dest_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest_path, content).map_err(Error::IoError)
}

/// Applies the write mode of a task to its rendered text.
pub fn finalize_content(rendered: String, mode: WriteMode) -> String {
    match mode {
        WriteMode::Trimmed => format!("{}\n", rendered.trim_end()),
        WriteMode::Verbatim => rendered,
    }
}

/// Renders resolved tasks into a target directory.
pub struct Materializer<'a> {
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> Materializer<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer) -> Self {
        Self { renderer }
    }

    /// Checks the target, renders every task, then writes the project.
    ///
    /// All tasks are rendered before anything touches the disk, so a
    /// rendering failure leaves the target untouched. I/O failures while
    /// writing are not rolled back.
    ///
    /// # Returns
    /// * `Result<Vec<PathBuf>>` - Written files, in task order
    ///
    /// # Errors
    /// * `Error::TargetConflictError` if the target may not be written to
    /// * `Error::RenderError` if any task fails to render
    /// * `Error::IoError` if a directory or file cannot be written
    pub fn materialize(
        &self,
        target: &TargetDirectory,
        folders: &IndexSet<Folder>,
        tasks: &[RenderTask],
    ) -> Result<Vec<PathBuf>> {
        ensure_target_available(target, GenerationMode::Manual)?;

        let rendered = tasks
            .iter()
            .map(|task| {
                debug!("Rendering {} -> {}", task.template, task.destination.display());
                let text = self.renderer.render(task.template, &task.bindings)?;
                Ok((task, finalize_content(text, task.write_mode)))
            })
            .collect::<Result<Vec<_>>>()?;

        if !target.in_place {
            fs::create_dir_all(&target.path)?;
        }
        for folder in folders {
            fs::create_dir_all(target.path.join("src").join(folder.name()))?;
        }

        let mut written = Vec::with_capacity(rendered.len());
        for (task, content) in rendered {
            let dest_path = target.path.join(&task.destination);
            write_file(&dest_path, content.as_bytes())?;
            debug!("Wrote {}", dest_path.display());
            written.push(dest_path);
        }

        Ok(written)
    }
}

fn collect_files<'a>(dir: &'a Dir<'a>, files: &mut Vec<&'a File<'a>>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::Dir(subdir) => collect_files(subdir, files),
            DirEntry::File(file) => files.push(file),
        }
    }
}

/// Copies a preset tree verbatim into the target directory.
///
/// Files matching `ignored` are skipped.
///
/// # Errors
/// * `Error::TargetConflictError` if the target exists and is not empty
/// * `Error::IoError` if a file cannot be written
pub fn copy_preset_tree(
    target: &TargetDirectory,
    tree: &Dir<'_>,
    ignored: &GlobSet,
) -> Result<Vec<PathBuf>> {
    ensure_target_available(target, GenerationMode::Preset)?;

    let mut files = Vec::new();
    collect_files(tree, &mut files);

    let mut relative_files = files
        .into_iter()
        .map(|file| {
            let relative = file.path().strip_prefix(tree.path()).map_err(|_| {
                Error::ConfigError(format!(
                    "preset file has unexpected path: {}",
                    file.path().display()
                ))
            })?;
            Ok((relative.to_path_buf(), file.contents()))
        })
        .collect::<Result<Vec<_>>>()?;
    relative_files.sort_by(|a, b| a.0.cmp(&b.0));

    fs::create_dir_all(&target.path)?;

    let mut written = Vec::with_capacity(relative_files.len());
    for (relative, contents) in relative_files {
        if ignored.is_match(&relative) {
            debug!("Skipping ignored file {}", relative.display());
            continue;
        }
        let dest_path = target.path.join(&relative);
        write_file(&dest_path, contents)?;
        debug!("Copied {}", dest_path.display());
        written.push(dest_path);
    }

    Ok(written)
}

/// Sets the `name` field of the project's package manifest.
///
/// Other fields keep their order. Returns false when there is no manifest.
///
/// # Errors
/// * `Error::JsonError` if the manifest is not a JSON object
pub fn patch_manifest_name<P: AsRef<Path>>(project_root: P, project_name: &str) -> Result<bool> {
    let manifest_path = project_root.as_ref().join(PACKAGE_MANIFEST);
    if !manifest_path.exists() {
        debug!("No {PACKAGE_MANIFEST} to patch in {}", project_root.as_ref().display());
        return Ok(false);
    }

    let content = fs::read_to_string(&manifest_path)?;
    let mut manifest: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&content)?;
    manifest.insert("name".to_string(), serde_json::Value::String(project_name.to_string()));

    let mut patched = serde_json::to_string_pretty(&manifest)?;
    patched.push('\n');
    fs::write(&manifest_path, patched)?;

    Ok(true)
}
