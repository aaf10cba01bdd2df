//! Template schema and the two-stage render of the suite artifacts.
//!
//! Each template declares the placeholders it needs. The context is checked
//! against that list before the engine runs, so a missing value is reported
//! by name instead of producing a half-filled file.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::domain::paths;
use crate::domain::{RenderedArtifact, ResolvedParameters};
use crate::ports::TemplateRenderer;

/// Template errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{template}' requires placeholder '{placeholder}' which is not set")]
    MissingPlaceholder { template: String, placeholder: String },

    #[error("Template '{0}' is not registered")]
    UnknownTemplate(String),

    #[error("Failed to register template '{template}': {reason}")]
    Register { template: String, reason: String },

    #[error("Failed to render template '{template}': {reason}")]
    Render { template: String, reason: String },
}

/// A value available to templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ContextValue {
    Text(String),
    List(Vec<String>),
}

/// Variables passed to a template render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderContext {
    variables: BTreeMap<String, ContextValue>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context holding every resolved parameter plus the launcher path.
    ///
    /// `batch_directives` is not included; it is produced by the first
    /// render stage.
    pub fn from_parameters(params: &ResolvedParameters) -> Self {
        Self::new()
            .with_text("max_index", params.max_index.to_string())
            .with_text("max_concurrent_jobs", params.max_concurrent_jobs.to_string())
            .with_text("exec_time_limit", &params.exec_time_limit)
            .with_text("abrun_exec", params.abrun_exec.display().to_string())
            .with_text("app_name", &params.app_name)
            .with_text("python_exec", params.python_exec.display().to_string())
            .with_text("fragment_base_path", params.fragment_base_path.display().to_string())
            .with_text("result_dir", params.result_dir.display().to_string())
            .with_text("batch_system", &params.batch_system)
            .with_text("working_dir", params.working_dir.display().to_string())
            .with_text("launcher_path", paths::launcher(&params.working_dir).display().to_string())
            .with_text("stitch_script", params.stitch_script.display().to_string())
            .with_text("plot_script", params.plot_script.display().to_string())
            .with_text("suite_title", &params.suite_title)
            .with_list("modules", params.modules.clone())
    }

    pub fn with_text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, ContextValue::Text(value.into()));
        self
    }

    pub fn with_list(mut self, name: impl Into<String>, values: Vec<String>) -> Self {
        self.insert(name, ContextValue::List(values));
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: ContextValue) {
        self.variables.insert(name.into(), value);
    }

    pub fn remove(&mut self, name: &str) -> Option<ContextValue> {
        self.variables.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }
}

/// A registered template and the placeholders it requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateSpec {
    pub name: &'static str,
    pub placeholders: &'static [&'static str],
}

impl TemplateSpec {
    /// Fail on the first required placeholder missing from `context`.
    pub fn check(&self, context: &RenderContext) -> Result<(), TemplateError> {
        match self.placeholders.iter().find(|name| !context.contains(name)) {
            Some(missing) => Err(TemplateError::MissingPlaceholder {
                template: self.name.to_string(),
                placeholder: missing.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn render<R: TemplateRenderer + ?Sized>(
        &self,
        renderer: &R,
        context: &RenderContext,
    ) -> Result<String, TemplateError> {
        self.check(context)?;
        renderer.render(self.name, context)
    }
}

/// `[[root]]` block with batch system and resource directives.
pub const BATCH_DIRECTIVES: TemplateSpec = TemplateSpec {
    name: "batch_directives.j2",
    placeholders: &["batch_system", "exec_time_limit"],
};

/// Per-job launcher script.
pub const LAUNCHER: TemplateSpec = TemplateSpec {
    name: "rsn_run.sh.j2",
    placeholders: &["python_exec", "modules", "abrun_exec", "app_name", "fragment_base_path"],
};

/// Cylc suite definition.
pub const SUITE: TemplateSpec = TemplateSpec {
    name: "suite.rc.j2",
    placeholders: &[
        "suite_title",
        "max_index",
        "max_concurrent_jobs",
        "batch_directives",
        "launcher_path",
        "python_exec",
        "stitch_script",
        "plot_script",
        "result_dir",
    ],
};

/// Every template the renderer must provide.
pub const ALL_TEMPLATES: [TemplateSpec; 3] = [BATCH_DIRECTIVES, LAUNCHER, SUITE];

/// Render the launcher script and the suite definition.
///
/// The batch block is rendered first and handed to the suite template as an
/// opaque string; it is empty when batch scheduling is off.
pub fn render_artifacts<R: TemplateRenderer + ?Sized>(
    renderer: &R,
    params: &ResolvedParameters,
) -> Result<Vec<RenderedArtifact>, TemplateError> {
    let mut context = RenderContext::from_parameters(params);

    let batch_directives = if params.use_batch_scheduler {
        BATCH_DIRECTIVES.render(renderer, &context)?
    } else {
        String::new()
    };
    context.insert("batch_directives", ContextValue::Text(batch_directives));

    let launcher = LAUNCHER.render(renderer, &context)?;
    let suite = SUITE.render(renderer, &context)?;

    Ok(vec![
        RenderedArtifact {
            path: paths::launcher(&params.working_dir),
            content: launcher,
            executable: true,
        },
        RenderedArtifact { path: paths::suite(&params.working_dir), content: suite, executable: false },
    ])
}
