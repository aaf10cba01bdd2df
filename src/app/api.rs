//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{
    FilesystemArtifactStore, FilesystemInputs, MinijinjaTemplateRenderer, TomlSiteConfig,
};
use crate::app::{
    AppContext,
    commands::{create, fragments, params},
    config::load_site_config,
};

pub use crate::app::commands::create::CreateOutcome;
pub use crate::domain::{AppError, FragmentSet, ParameterOverrides, ResolvedParameters};

type FilesystemContext =
    AppContext<TomlSiteConfig, FilesystemInputs, MinijinjaTemplateRenderer, FilesystemArtifactStore>;

/// Create an `AppContext` rooted at `cwd`.
fn create_context(cwd: PathBuf, config: Option<&Path>) -> Result<FilesystemContext, AppError> {
    let site = load_site_config(&cwd, config)?;
    let renderer = MinijinjaTemplateRenderer::new()?;
    Ok(AppContext::new(site, FilesystemInputs::new(), renderer, FilesystemArtifactStore::new(), cwd))
}

/// Generate the launcher script and suite definition from the current directory.
pub fn create(
    overrides: &ParameterOverrides,
    config: Option<&Path>,
) -> Result<CreateOutcome, AppError> {
    create_at(std::env::current_dir()?, overrides, config)
}

/// Generate the launcher script and suite definition with `cwd` as the
/// anchor for relative paths.
pub fn create_at(
    cwd: impl Into<PathBuf>,
    overrides: &ParameterOverrides,
    config: Option<&Path>,
) -> Result<CreateOutcome, AppError> {
    let ctx = create_context(cwd.into(), config)?;
    create::execute(&ctx, overrides)
}

/// Resolve parameters without writing anything.
pub fn params(
    overrides: &ParameterOverrides,
    config: Option<&Path>,
) -> Result<ResolvedParameters, AppError> {
    params_at(std::env::current_dir()?, overrides, config)
}

/// Resolve parameters with `cwd` as the anchor for relative paths.
pub fn params_at(
    cwd: impl Into<PathBuf>,
    overrides: &ParameterOverrides,
    config: Option<&Path>,
) -> Result<ResolvedParameters, AppError> {
    let ctx = create_context(cwd.into(), config)?;
    params::execute(&ctx, overrides)
}

/// Format resolved parameters as TOML.
pub fn params_to_toml(resolved: &ResolvedParameters) -> Result<String, AppError> {
    params::to_toml(resolved)
}

/// Discover fragments in the result directory.
pub fn fragments(
    overrides: &ParameterOverrides,
    config: Option<&Path>,
) -> Result<FragmentSet, AppError> {
    fragments_at(std::env::current_dir()?, overrides, config)
}

/// Discover fragments with `cwd` as the anchor for relative paths.
pub fn fragments_at(
    cwd: impl Into<PathBuf>,
    overrides: &ParameterOverrides,
    config: Option<&Path>,
) -> Result<FragmentSet, AppError> {
    let ctx = create_context(cwd.into(), config)?;
    fragments::execute(&ctx, overrides)
}
