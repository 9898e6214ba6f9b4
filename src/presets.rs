//! Named project presets.
//! Each preset pairs a pre-built project tree, copied verbatim in preset mode,
//! with the [`Configuration`] that tree corresponds to.

use crate::config::{Configuration, Database, Folder, Language, Middleware};
use crate::error::{Error, Result};
use include_dir::{include_dir, Dir};

static PRESET_TREES: Dir = include_dir!("$CARGO_MANIFEST_DIR/templates/presets");

/// A read-only named preset.
#[derive(Debug, Clone)]
pub struct TemplateSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub configuration: Configuration,
    /// Files copied into the target directory
    pub tree: &'static Dir<'static>,
}

struct PresetDefinition {
    name: &'static str,
    description: &'static str,
    project_name: &'static str,
    language: Language,
    database: Database,
    auth: bool,
    middleware: &'static [Middleware],
    logging: bool,
    folders: &'static [Folder],
    linting: bool,
}

const PRESETS: [PresetDefinition; 11] = [
    PresetDefinition {
        name: "ecommerce",
        description: "Express + MongoDB shop backend with JWT auth and hardened middleware",
        project_name: "my-ecommerce-app",
        language: Language::JavaScript,
        database: Database::MongoDB,
        auth: true,
        middleware: &[Middleware::Cors, Middleware::Helmet, Middleware::RateLimiting],
        logging: true,
        folders: &Folder::ALL,
        linting: true,
    },
    PresetDefinition {
        name: "blog",
        description: "TypeScript + PostgreSQL (Prisma) blog API",
        project_name: "my-blog-app",
        language: Language::TypeScript,
        database: Database::PostgreSQL,
        auth: false,
        middleware: &[Middleware::Cors, Middleware::Helmet],
        logging: true,
        folders: &Folder::ALL,
        linting: true,
    },
    PresetDefinition {
        name: "api",
        description: "Minimal Express REST API without a database",
        project_name: "my-api-service",
        language: Language::JavaScript,
        database: Database::None,
        auth: false,
        middleware: &[Middleware::Cors],
        logging: false,
        folders: &[Folder::Controllers, Folder::Routes],
        linting: false,
    },
    PresetDefinition {
        name: "js-jwt-rest",
        description: "JavaScript REST API with MongoDB and JWT authentication",
        project_name: "js-jwt-rest",
        language: Language::JavaScript,
        database: Database::MongoDB,
        auth: true,
        middleware: &[Middleware::Cors, Middleware::Helmet],
        logging: true,
        folders: &Folder::ALL,
        linting: true,
    },
    PresetDefinition {
        name: "js-rest-swagger",
        description: "JavaScript REST API with MongoDB and Swagger UI docs",
        project_name: "js-rest-swagger",
        language: Language::JavaScript,
        database: Database::MongoDB,
        auth: false,
        middleware: &[Middleware::Cors],
        logging: false,
        folders: &[Folder::Controllers, Folder::Routes, Folder::Models, Folder::Config],
        linting: true,
    },
    PresetDefinition {
        name: "node-oauth-rest",
        description: "Bearer-token REST API with MongoDB users",
        project_name: "node-oauth-rest",
        language: Language::JavaScript,
        database: Database::MongoDB,
        auth: true,
        middleware: &[],
        logging: false,
        folders: &Folder::ALL,
        linting: false,
    },
    PresetDefinition {
        name: "node-prisma-rest",
        description: "JavaScript REST API on PostgreSQL through Prisma",
        project_name: "node-prisma-rest",
        language: Language::JavaScript,
        database: Database::PostgreSQL,
        auth: false,
        middleware: &[],
        logging: false,
        folders: &[Folder::Controllers, Folder::Routes, Folder::Config],
        linting: false,
    },
    PresetDefinition {
        name: "node-serverless-template",
        description: "Serverless Framework functions with a JWT guard",
        project_name: "node-serverless-template",
        language: Language::JavaScript,
        database: Database::None,
        auth: true,
        middleware: &[],
        logging: false,
        folders: &[Folder::Middlewares],
        linting: false,
    },
    PresetDefinition {
        name: "ts-event-driven",
        description: "TypeScript service publishing and consuming in-process events",
        project_name: "ts-event-driven",
        language: Language::TypeScript,
        database: Database::MongoDB,
        auth: false,
        middleware: &[],
        logging: true,
        folders: &[Folder::Controllers, Folder::Middlewares, Folder::Config],
        linting: false,
    },
    PresetDefinition {
        name: "ts-jwt-graphql",
        description: "TypeScript GraphQL API (Apollo) with JWT authentication",
        project_name: "ts-jwt-graphql",
        language: Language::TypeScript,
        database: Database::None,
        auth: true,
        middleware: &[],
        logging: false,
        folders: &[Folder::Middlewares, Folder::Models],
        linting: false,
    },
    PresetDefinition {
        name: "ts-microservice-template",
        description: "TypeScript microservice with routes, controllers and services",
        project_name: "ts-microservice-template",
        language: Language::TypeScript,
        database: Database::None,
        auth: false,
        middleware: &[],
        logging: false,
        folders: &[Folder::Controllers, Folder::Routes],
        linting: false,
    },
];

impl PresetDefinition {
    fn to_spec(&self) -> Result<TemplateSpec> {
        let tree = PRESET_TREES.get_dir(self.name).ok_or_else(|| {
            Error::ConfigError(format!("preset '{}' has no template tree", self.name))
        })?;

        let configuration = Configuration {
            project_name: self.project_name.to_string(),
            language: self.language,
            database: self.database,
            auth: self.auth,
            middleware: self.middleware.iter().copied().collect(),
            logging: self.logging,
            folders: self.folders.iter().copied().collect(),
            linting: self.linting,
            ..Configuration::default()
        };

        Ok(TemplateSpec { name: self.name, description: self.description, configuration, tree })
    }
}

/// Names of every registered preset, in registration order.
pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|preset| preset.name).collect()
}

/// Returns every registered preset.
pub fn presets() -> Result<Vec<TemplateSpec>> {
    PRESETS.iter().map(PresetDefinition::to_spec).collect()
}

/// Looks up a preset by name.
///
/// # Errors
/// * `Error::UnknownTemplateError` naming `name` and listing the valid names
pub fn find_preset(name: &str) -> Result<TemplateSpec> {
    PRESETS
        .iter()
        .find(|preset| preset.name == name)
        .ok_or_else(|| Error::UnknownTemplateError {
            name: name.to_string(),
            available: preset_names().join(", "),
        })?
        .to_spec()
}
