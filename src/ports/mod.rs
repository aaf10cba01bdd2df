mod artifact_store;
mod input_filesystem;
mod site_config;
mod template_renderer;

pub use artifact_store::ArtifactStore;
pub use input_filesystem::InputFilesystem;
pub use site_config::{SiteConfigSource, SiteLookupError, SiteValue};
pub use template_renderer::TemplateRenderer;
