//! Common constants used throughout the nodegenx application.

/// Project name used when none is given on the command line
pub const DEFAULT_PROJECT_NAME: &str = "my-node-backend";

/// Project name that means "generate into the current working directory"
pub const CURRENT_DIR_SENTINEL: &str = ".";

/// Package manifest patched after a preset tree is copied
pub const PACKAGE_MANIFEST: &str = "package.json";

/// Package manager used for dependency installation
pub const PACKAGE_MANAGER: &str = "npm";

/// Runner used for one-shot scaffolding tools
pub const PACKAGE_RUNNER: &str = "npx";

/// Message of the first commit created by the VCS initializer
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// Files skipped when copying a preset tree
pub const DEFAULT_IGNORE_PATTERNS: [&str; 2] = ["**/.DS_Store", "**/Thumbs.db"];
