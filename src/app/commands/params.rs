//! Params command: show the resolved parameter set without writing anything.

use crate::app::AppContext;
use crate::domain::{AppError, ParameterOverrides, ResolvedParameters};
use crate::ports::{ArtifactStore, InputFilesystem, SiteConfigSource, TemplateRenderer};

use super::prepare::prepare;

pub fn execute<S, F, R, A>(
    ctx: &AppContext<S, F, R, A>,
    overrides: &ParameterOverrides,
) -> Result<ResolvedParameters, AppError>
where
    S: SiteConfigSource,
    F: InputFilesystem,
    R: TemplateRenderer,
    A: ArtifactStore,
{
    prepare(ctx.site(), ctx.inputs(), ctx.cwd(), overrides).map(|prepared| prepared.params)
}

/// Render resolved parameters as TOML for display.
pub fn to_toml(params: &ResolvedParameters) -> Result<String, AppError> {
    toml::to_string(params).map_err(|err| AppError::Format(err.to_string()))
}
