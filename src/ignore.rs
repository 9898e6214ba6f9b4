//! Ignore patterns for preset template trees.
//! Operating-system clutter that ends up next to template files is never
//! copied into a generated project.

use crate::constants::DEFAULT_IGNORE_PATTERNS;
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Builds a glob set from the default patterns plus `extra`.
///
/// # Errors
/// * `Error::IgnoreError` if any pattern is invalid
///
/// # Example
/// ```
/// let ignored = nodegenx::ignore::build_ignore_set(&["**/*.swp"]).unwrap();
/// assert!(ignored.is_match("src/.DS_Store"));
/// assert!(ignored.is_match("src/app.js.swp"));
/// assert!(!ignored.is_match("src/app.js"));
/// ```
pub fn build_ignore_set(extra: &[&str]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in DEFAULT_IGNORE_PATTERNS.iter().chain(extra) {
        builder.add(
            Glob::new(pattern)
                .map_err(|e| Error::IgnoreError(format!("invalid pattern '{pattern}': {e}")))?,
        );
    }
    builder.build().map_err(|e| Error::IgnoreError(e.to_string()))
}
