mod common;

use common::list_files;
use indexmap::IndexSet;
use nodegenx::config::{Configuration, Folder, Language};
use nodegenx::error::{Error, Result};
use nodegenx::ignore::build_ignore_set;
use nodegenx::materializer::{
    copy_preset_tree, ensure_target_available, patch_manifest_name, GenerationMode, Materializer,
    TargetDirectory,
};
use nodegenx::presets::find_preset;
use nodegenx::renderer::{MiniJinjaRenderer, TemplateRenderer};
use nodegenx::resolver::resolve;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Renders normally except for one template, which always fails.
struct FailingRenderer {
    inner: MiniJinjaRenderer,
    failing: &'static str,
}

impl TemplateRenderer for FailingRenderer {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        if template == self.failing {
            return Err(Error::RenderError {
                template: template.to_string(),
                source: minijinja::Error::new(minijinja::ErrorKind::InvalidOperation, "boom"),
            });
        }
        self.inner.render(template, context)
    }
}

fn materialize(root: &Path, name: &str, config: &Configuration) -> Result<Vec<PathBuf>> {
    let renderer = MiniJinjaRenderer::new();
    let target = TargetDirectory::resolve(root, name)?;
    let tasks = resolve(config, &target.project_name);
    Materializer::new(&renderer).materialize(&target, &config.folders, &tasks)
}

#[test_log::test]
fn test_materialize_writes_project() {
    let dir = TempDir::new().unwrap();
    let config = Configuration { language: Language::TypeScript, ..Configuration::default() };

    let written = materialize(dir.path(), "orders", &config).unwrap();

    let root = dir.path().join("orders");
    assert_eq!(written.first().unwrap(), &root.join("src/config/db.js"));
    for folder in Folder::ALL {
        assert!(root.join("src").join(folder.name()).is_dir());
    }
    assert!(root.join("src/app.ts").is_file());
    assert!(root.join("tsconfig.json").is_file());

    let env = fs::read_to_string(root.join(".env")).unwrap();
    assert!(env.ends_with("JWT_SECRET=your_jwt_secret\n"));
    assert!(!env.ends_with("\n\n"));

    let ignore = fs::read_to_string(root.join(".eslintignore")).unwrap();
    assert_eq!(ignore, "node_modules\ndist\n");
}

#[test]
fn test_only_selected_folders_are_created() {
    let dir = TempDir::new().unwrap();
    let config = Configuration {
        auth: false,
        logging: false,
        folders: IndexSet::from([Folder::Controllers]),
        ..Configuration::default()
    };

    materialize(dir.path(), "slim", &config).unwrap();

    let src = dir.path().join("slim/src");
    assert!(src.join("controllers").is_dir());
    assert!(!src.join("routes").exists());
    // Folders that receive files exist regardless of the selection.
    assert!(src.join("config/db.js").is_file());
}

#[test]
fn test_materialize_is_deterministic() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let config = Configuration { docker: true, ..Configuration::default() };

    materialize(first.path(), "same", &config).unwrap();
    materialize(second.path(), "same", &config).unwrap();

    assert!(!dir_diff::is_different(first.path(), second.path()).unwrap());
}

#[test]
fn test_existing_target_is_left_alone() {
    let dir = TempDir::new().unwrap();
    let existing = dir.path().join("taken");
    fs::create_dir(&existing).unwrap();
    fs::write(existing.join("notes.txt"), "keep me").unwrap();

    let result = materialize(dir.path(), "taken", &Configuration::default());

    assert!(matches!(result, Err(Error::TargetConflictError { .. })));
    assert_eq!(list_files(&existing), vec!["notes.txt"]);
    assert_eq!(fs::read_to_string(existing.join("notes.txt")).unwrap(), "keep me");
}

#[test]
fn test_render_failure_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = Configuration::default();
    let renderer =
        FailingRenderer { inner: MiniJinjaRenderer::new(), failing: "package.json.j2" };
    let target = TargetDirectory::resolve(dir.path(), "broken").unwrap();
    let tasks = resolve(&config, &target.project_name);

    let result = Materializer::new(&renderer).materialize(&target, &config.folders, &tasks);

    match result {
        Err(Error::RenderError { template, .. }) => assert_eq!(template, "package.json.j2"),
        other => panic!("Expected RenderError, got {other:?}"),
    }
    assert!(!dir.path().join("broken").exists());
}

#[test]
fn test_in_place_target() {
    let dir = TempDir::new().unwrap();
    let working_dir = dir.path().join("Inventory Service");
    fs::create_dir(&working_dir).unwrap();
    fs::write(working_dir.join("README.md"), "# existing").unwrap();

    materialize(&working_dir, ".", &Configuration::default()).unwrap();

    assert!(working_dir.join("README.md").is_file());
    let env = fs::read_to_string(working_dir.join(".env")).unwrap();
    assert!(env.contains("mongodb://localhost:27017/inventory-service"));
}

#[test]
fn test_preset_target_must_be_empty() {
    let dir = TempDir::new().unwrap();
    let target = TargetDirectory::resolve(dir.path(), ".").unwrap();

    assert!(ensure_target_available(&target, GenerationMode::Preset).is_ok());

    fs::write(dir.path().join("file.txt"), "x").unwrap();
    let result = ensure_target_available(&target, GenerationMode::Preset);
    assert!(matches!(
        result,
        Err(Error::TargetConflictError { reason: "already exists and is not empty", .. })
    ));
    // The working directory itself is always usable in manual mode.
    assert!(ensure_target_available(&target, GenerationMode::Manual).is_ok());
}

#[test]
fn test_copy_preset_tree() {
    let dir = TempDir::new().unwrap();
    let empty = dir.path().join("api");
    fs::create_dir(&empty).unwrap();
    let target = TargetDirectory::resolve(dir.path(), "api").unwrap();
    let preset = find_preset("api").unwrap();

    let written = copy_preset_tree(&target, preset.tree, &build_ignore_set(&[]).unwrap()).unwrap();

    assert_eq!(written.len(), list_files(&empty).len());
    assert!(list_files(&empty).contains(&"src/routes/item.routes.js".to_string()));
    assert_eq!(
        fs::read(empty.join("src/app.js")).unwrap(),
        preset.tree.get_file("api/src/app.js").unwrap().contents()
    );
}

#[test]
fn test_copy_preset_tree_skips_ignored() {
    let dir = TempDir::new().unwrap();
    let target = TargetDirectory::resolve(dir.path(), "api").unwrap();
    let preset = find_preset("api").unwrap();
    let ignored = build_ignore_set(&["src/**"]).unwrap();

    copy_preset_tree(&target, preset.tree, &ignored).unwrap();

    assert_eq!(list_files(&target.path), vec![".env", "package.json"]);
}

#[test]
fn test_patch_manifest_name() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{"version": "1.0.0", "name": "old", "scripts": {"start": "node app.js"}}"#,
    )
    .unwrap();

    assert!(patch_manifest_name(dir.path(), "new-name").unwrap());

    let patched = fs::read_to_string(dir.path().join("package.json")).unwrap();
    assert!(patched.ends_with("}\n"));
    // Keys keep their original order.
    let version = patched.find("\"version\"").unwrap();
    let name = patched.find("\"name\"").unwrap();
    let scripts = patched.find("\"scripts\"").unwrap();
    assert!(version < name && name < scripts);
    assert!(patched.contains("\"name\": \"new-name\""));
}

#[test]
fn test_patch_without_manifest() {
    let dir = TempDir::new().unwrap();
    assert!(!patch_manifest_name(dir.path(), "x").unwrap());
}
