//! Site configuration loading.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::adapters::TomlSiteConfig;
use crate::domain::AppError;
use crate::domain::paths;

/// Site config picked up from the working directory when `--config` is absent.
pub const SITE_CONFIG_FILE: &str = "rsn.toml";

/// Load the site configuration.
///
/// An explicit path must exist and parse. Without one, `rsn.toml` in `cwd`
/// is used if present; otherwise the site layer is empty.
pub fn load_site_config(cwd: &Path, explicit: Option<&Path>) -> Result<TomlSiteConfig, AppError> {
    let path = match explicit {
        Some(path) => paths::absolutize(cwd, path),
        None => {
            let candidate = cwd.join(SITE_CONFIG_FILE);
            if !candidate.is_file() {
                debug!("no site config at {}", candidate.display());
                return Ok(TomlSiteConfig::empty());
            }
            candidate
        }
    };

    let content = fs::read_to_string(&path).map_err(|err| {
        AppError::SiteConfig(format!("cannot read {}: {}", path.display(), err))
    })?;
    debug!("loaded site config from {}", path.display());
    TomlSiteConfig::parse(&content)
}
