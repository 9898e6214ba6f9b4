use nodegenx::error::Error;
use nodegenx::renderer::{template_source, MiniJinjaRenderer, TemplateRenderer};
use serde_json::json;

#[test]
fn test_env_file() {
    let renderer = MiniJinjaRenderer::new();
    let rendered = renderer.render("env.j2", &json!({ "port": 4000, "projectName": "shop" })).unwrap();

    assert_eq!(
        rendered.trim_end(),
        "PORT=4000\nMONGO_URI=mongodb://localhost:27017/shop\nJWT_SECRET=your_jwt_secret"
    );
}

#[test]
fn test_database_stub() {
    let renderer = MiniJinjaRenderer::new();
    let rendered = renderer
        .render("config/db.js.j2", &json!({ "database": "None", "projectName": "shop" }))
        .unwrap();

    assert!(rendered.contains("// shop does not use a database."));
    assert!(rendered.contains("export async function connectDB() {}"));
    assert!(!rendered.contains("mongoose"));
}

#[test]
fn test_mongo_model() {
    let renderer = MiniJinjaRenderer::new();
    let rendered = renderer.render("models/user.model.js.j2", &json!({ "database": "MongoDB" })).unwrap();
    assert!(rendered.contains("mongoose"));
}

#[test]
fn test_manifest_is_valid_json() {
    let renderer = MiniJinjaRenderer::new();
    let context = json!({
        "projectName": "shop",
        "version": "2.0.0",
        "description": "A \"quoted\" description",
        "author": "Jane",
        "language": "TypeScript",
        "linting": true,
    });

    let rendered = renderer.render("package.json.j2", &context).unwrap();
    let manifest: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(manifest["name"], "shop");
    assert_eq!(manifest["description"], "A \"quoted\" description");
    assert_eq!(manifest["scripts"]["build"], "tsc");
    assert_eq!(manifest["scripts"]["lint"], "eslint .");
}

#[test]
fn test_missing_binding() {
    let renderer = MiniJinjaRenderer::new();
    let result = renderer.render("config/logger.js.j2", &json!({}));

    match result {
        Err(Error::RenderError { template, .. }) => assert_eq!(template, "config/logger.js.j2"),
        other => panic!("Expected RenderError, got {other:?}"),
    }
}

#[test]
fn test_template_source() {
    assert!(template_source("gitignore.j2").unwrap().contains("node_modules/"));
    assert!(template_source("nope.j2").is_none());
}
