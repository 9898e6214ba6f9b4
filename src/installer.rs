//! Dependency derivation and installation.

use crate::command::{display_command, run_command, CommandExecutor};
use crate::config::{Configuration, Database, Language, Middleware};
use crate::constants::{PACKAGE_MANAGER, PACKAGE_RUNNER};
use crate::error::{Error, Result};
use indexmap::IndexSet;
use log::{info, warn};
use std::path::Path;

/// Packages to install, in installation order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DependencySet {
    pub runtime: IndexSet<&'static str>,
    pub dev: IndexSet<&'static str>,
}

/// Computes the runtime and development packages implied by a configuration.
pub fn derive_dependencies(config: &Configuration) -> DependencySet {
    let mut deps = DependencySet::default();
    deps.runtime.insert("express");

    match config.database {
        Database::MongoDB => {
            deps.runtime.insert("mongoose");
        }
        Database::PostgreSQL => {
            deps.runtime.extend(["@prisma/client", "prisma"]);
        }
        Database::None => {}
    }

    if config.auth {
        deps.runtime.extend(["jsonwebtoken", "bcryptjs", "dotenv"]);
    }

    for middleware in Middleware::ALL {
        if config.has_middleware(middleware) {
            deps.runtime.insert(match middleware {
                Middleware::Cors => "cors",
                Middleware::Helmet => "helmet",
                Middleware::RateLimiting => "express-rate-limit",
            });
        }
    }

    if config.logging {
        deps.runtime.extend(["winston", "morgan"]);
    }

    let typescript = config.language == Language::TypeScript;
    if typescript {
        deps.dev.extend(["typescript", "ts-node-dev", "@types/node", "@types/express"]);
    }

    if config.linting {
        deps.dev.extend(["eslint", "prettier", "eslint-config-prettier", "eslint-plugin-prettier"]);
        if typescript {
            deps.dev.extend(["@typescript-eslint/parser", "@typescript-eslint/eslint-plugin"]);
        }
    }

    deps
}

fn install_args(dev: bool, packages: &IndexSet<&'static str>) -> Vec<String> {
    let mut args = vec!["install".to_string()];
    if dev {
        args.push("-D".to_string());
    }
    args.extend(packages.iter().map(|p| p.to_string()));
    args
}

/// Installs the derived dependencies into `project_dir`.
///
/// Runtime packages, development packages (only when there are any) and, for
/// PostgreSQL, `prisma init` are each attempted even when an earlier step
/// failed.
///
/// # Errors
/// * `Error::InstallError` listing every step that failed
pub fn install_dependencies(
    executor: &dyn CommandExecutor,
    config: &Configuration,
    project_dir: &Path,
) -> Result<()> {
    let deps = derive_dependencies(config);

    let mut steps = vec![(PACKAGE_MANAGER, install_args(false, &deps.runtime))];
    if !deps.dev.is_empty() {
        steps.push((PACKAGE_MANAGER, install_args(true, &deps.dev)));
    }
    if config.database == Database::PostgreSQL {
        steps.push((PACKAGE_RUNNER, vec!["prisma".to_string(), "init".to_string()]));
    }

    let mut failures = Vec::new();
    for (program, args) in steps {
        let command_line = display_command(program, &args);
        info!("Running {command_line}");
        match run_command(executor, program, &args, project_dir) {
            Ok(()) => info!("Finished {command_line}"),
            Err(reason) => {
                warn!("'{command_line}' failed: {reason}");
                failures.push(format!("'{command_line}' {reason}"));
            }
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(Error::InstallError(failures.join("; ")))
    }
}
