//! Fragments command: report what discovery sees in the result directory.

use crate::app::AppContext;
use crate::domain::{AppError, FragmentSet, ParameterOverrides, ParameterResolver};
use crate::ports::{ArtifactStore, InputFilesystem, SiteConfigSource, TemplateRenderer};

use super::prepare::existing_result_dir;

pub fn execute<S, F, R, A>(
    ctx: &AppContext<S, F, R, A>,
    overrides: &ParameterOverrides,
) -> Result<FragmentSet, AppError>
where
    S: SiteConfigSource,
    F: InputFilesystem,
    R: TemplateRenderer,
    A: ArtifactStore,
{
    let resolver = ParameterResolver::new(overrides, ctx.site(), ctx.cwd());
    let result_dir = existing_result_dir(&resolver, ctx.inputs())?;
    FragmentSet::discover(ctx.inputs(), &result_dir)
}
