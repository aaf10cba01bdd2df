use crate::domain::{RenderContext, TemplateError};

/// Trait for rendering named templates.
///
/// Keeps the template engine (minijinja) out of the domain layer. The domain
/// validates the context against each template's placeholder schema before
/// calling `render`.
pub trait TemplateRenderer {
    /// Render the registered template `template_name` with `context`.
    fn render(&self, template_name: &str, context: &RenderContext) -> Result<String, TemplateError>;
}
