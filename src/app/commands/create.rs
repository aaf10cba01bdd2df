//! Create command: generate the launcher script and the Cylc suite.

use std::path::PathBuf;

use tracing::info;

use crate::app::AppContext;
use crate::domain::{AppError, FragmentSet, ParameterOverrides, ResolvedParameters, render_artifacts};
use crate::ports::{ArtifactStore, InputFilesystem, SiteConfigSource, TemplateRenderer};

use super::prepare::prepare;

/// Outcome of a create operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOutcome {
    pub fragments: FragmentSet,
    pub params: ResolvedParameters,
    pub launcher: PathBuf,
    pub suite: PathBuf,
}

/// Resolve, render and emit both artifacts.
///
/// Nothing is written unless every earlier step succeeded.
pub fn execute<S, F, R, A>(
    ctx: &AppContext<S, F, R, A>,
    overrides: &ParameterOverrides,
) -> Result<CreateOutcome, AppError>
where
    S: SiteConfigSource,
    F: InputFilesystem,
    R: TemplateRenderer,
    A: ArtifactStore,
{
    let prepared = prepare(ctx.site(), ctx.inputs(), ctx.cwd(), overrides)?;
    let artifacts = render_artifacts(ctx.renderer(), &prepared.params)?;
    let launcher = artifacts[0].path.clone();
    let suite = artifacts[1].path.clone();

    ctx.store().commit(&artifacts)?;
    info!(
        "generated suite for {} fragment(s) in {}",
        prepared.fragments.count(),
        prepared.params.working_dir.display()
    );

    Ok(CreateOutcome { fragments: prepared.fragments, params: prepared.params, launcher, suite })
}
