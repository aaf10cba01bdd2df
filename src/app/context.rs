use std::path::{Path, PathBuf};

use crate::ports::{ArtifactStore, InputFilesystem, SiteConfigSource, TemplateRenderer};

/// Application context holding dependencies for command execution.
pub struct AppContext<S, F, R, A>
where
    S: SiteConfigSource,
    F: InputFilesystem,
    R: TemplateRenderer,
    A: ArtifactStore,
{
    site: S,
    inputs: F,
    renderer: R,
    store: A,
    cwd: PathBuf,
}

impl<S, F, R, A> AppContext<S, F, R, A>
where
    S: SiteConfigSource,
    F: InputFilesystem,
    R: TemplateRenderer,
    A: ArtifactStore,
{
    /// Create a new application context. `cwd` anchors relative paths.
    pub fn new(site: S, inputs: F, renderer: R, store: A, cwd: impl Into<PathBuf>) -> Self {
        Self { site, inputs, renderer, store, cwd: cwd.into() }
    }

    /// Get a reference to the site configuration.
    pub fn site(&self) -> &S {
        &self.site
    }

    /// Get a reference to the input filesystem.
    pub fn inputs(&self) -> &F {
        &self.inputs
    }

    /// Get a reference to the template renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Get a reference to the artifact store.
    pub fn store(&self) -> &A {
        &self.store
    }

    /// Directory relative paths are resolved against.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }
}
