pub mod filesystem;
pub mod site_config;
pub mod template;

pub use filesystem::{FilesystemArtifactStore, FilesystemInputs};
pub use site_config::TomlSiteConfig;
pub use template::MinijinjaTemplateRenderer;
