pub mod artifact;
pub mod error;
pub mod fragments;
pub mod parameters;
pub mod paths;
pub mod templates;

pub use artifact::RenderedArtifact;
pub use error::{AppError, PathKind};
pub use fragments::FragmentSet;
pub use parameters::{ParameterOverrides, ParameterResolver, ResolvedParameters};
pub use templates::{ContextValue, RenderContext, TemplateError, TemplateSpec, render_artifacts};
