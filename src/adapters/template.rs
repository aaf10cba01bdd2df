use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value};

use crate::domain::templates::ALL_TEMPLATES;
use crate::domain::{RenderContext, TemplateError};
use crate::ports::TemplateRenderer;

static TEMPLATE_ASSET_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Template renderer using Minijinja.
///
/// Templates are embedded at build time and registered under their file
/// name (e.g. `suite.rc.j2`).
pub struct MinijinjaTemplateRenderer {
    env: Environment<'static>,
}

impl MinijinjaTemplateRenderer {
    pub fn new() -> Result<Self, TemplateError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);

        for file in TEMPLATE_ASSET_DIR.files() {
            let path = file.path();
            let name = path.to_str().ok_or_else(|| TemplateError::Register {
                template: path.to_string_lossy().to_string(),
                reason: "template name is not UTF-8".to_string(),
            })?;
            if !name.ends_with(".j2") {
                continue;
            }
            let source = file.contents_utf8().ok_or_else(|| TemplateError::Register {
                template: name.to_string(),
                reason: "template is not UTF-8".to_string(),
            })?;
            env.add_template(name, source).map_err(|err| template_register_error(name, err))?;
        }

        for spec in ALL_TEMPLATES {
            if env.get_template(spec.name).is_err() {
                return Err(TemplateError::UnknownTemplate(spec.name.to_string()));
            }
        }

        Ok(Self { env })
    }
}

impl TemplateRenderer for MinijinjaTemplateRenderer {
    fn render(&self, template_name: &str, context: &RenderContext) -> Result<String, TemplateError> {
        let template = self
            .env
            .get_template(template_name)
            .map_err(|_| TemplateError::UnknownTemplate(template_name.to_string()))?;

        template
            .render(Value::from_serialize(context))
            .map_err(|err| template_render_error(template_name, err))
    }
}

fn template_register_error(template_name: &str, err: impl std::fmt::Display) -> TemplateError {
    TemplateError::Register { template: template_name.to_string(), reason: err.to_string() }
}

fn template_render_error(template_name: &str, err: impl std::fmt::Display) -> TemplateError {
    TemplateError::Render { template: template_name.to_string(), reason: err.to_string() }
}
