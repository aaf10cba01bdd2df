//! Steps shared by `create` and `params` before anything is rendered.

use std::path::{Path, PathBuf};

use crate::domain::{
    AppError, FragmentSet, ParameterOverrides, ParameterResolver, PathKind, ResolvedParameters,
};
use crate::ports::{InputFilesystem, SiteConfigSource};

pub(crate) struct Prepared {
    pub fragments: FragmentSet,
    pub params: ResolvedParameters,
}

/// Verify the required inputs, then discover fragments and resolve parameters.
///
/// The result directory is checked before the executable so a missing
/// directory always wins (exit status 1 over 2).
pub(crate) fn prepare<S, F>(
    site: &S,
    inputs: &F,
    cwd: &Path,
    overrides: &ParameterOverrides,
) -> Result<Prepared, AppError>
where
    S: SiteConfigSource,
    F: InputFilesystem,
{
    let resolver = ParameterResolver::new(overrides, site, cwd);

    let result_dir = existing_result_dir(&resolver, inputs)?;

    let abrun_exec = resolver.abrun_exec()?;
    if !inputs.exists(&abrun_exec) {
        return Err(AppError::PathNotFound { kind: PathKind::Executable, path: abrun_exec });
    }

    let fragments = FragmentSet::discover(inputs, &result_dir)?;

    let params = resolver.resolve(&fragments)?;
    Ok(Prepared { fragments, params })
}

pub(crate) fn existing_result_dir<S, F>(
    resolver: &ParameterResolver<'_, S>,
    inputs: &F,
) -> Result<PathBuf, AppError>
where
    S: SiteConfigSource,
    F: InputFilesystem,
{
    let result_dir = resolver.result_dir()?;
    if !inputs.is_dir(&result_dir) {
        return Err(AppError::PathNotFound { kind: PathKind::ResultDirectory, path: result_dir });
    }
    Ok(result_dir)
}
