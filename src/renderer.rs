//! Template renderer for nodegenx.
//! Project templates are compiled into the binary and rendered with MiniJinja.
use crate::error::{Error, Result};
use include_dir::{include_dir, Dir};
use minijinja::{Environment, UndefinedBehavior};

static PROJECT_TEMPLATES: Dir = include_dir!("$CARGO_MANIFEST_DIR/templates/project");

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders the template stored at `template` with the given context.
    ///
    /// # Arguments
    /// * `template` - Path of the template, relative to the template root
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template text
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine backed by the embedded project templates.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer that loads templates from the embedded template tree.
    ///
    /// Undefined variables are errors, so a template can only see the
    /// bindings it was explicitly given.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_loader(|name| Ok(template_source(name)));
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders an embedded template using MiniJinja.
    ///
    /// # Errors
    /// * `Error::RenderError` if the template is missing, fails to parse or
    ///   fails to render
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let render_error = |source| Error::RenderError { template: template.to_string(), source };

        let tmpl = self.env.get_template(template).map_err(render_error)?;
        tmpl.render(context).map_err(render_error)
    }
}

/// Returns the raw text of an embedded project template.
pub fn template_source(name: &str) -> Option<String> {
    PROJECT_TEMPLATES.get_file(name).and_then(|file| file.contents_utf8()).map(str::to_owned)
}
