//! Read-only access to site-level defaults.
//!
//! The site file groups keys into named sections (`[afterburner]`,
//! `[general]`). Consumers only need lookup by `(section, key)`; the file
//! format belongs to the adapter.

use thiserror::Error;

/// A value read from the site configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteValue {
    /// Scalar rendered to text (strings verbatim, numbers and booleans formatted).
    Scalar(String),
    /// Array of scalars.
    List(Vec<String>),
}

/// Lookup failure for a single key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteLookupError {
    #[error("key '{section}.{key}' is not set")]
    MissingKey { section: String, key: String },

    #[error("key '{section}.{key}' holds a {found}, expected a scalar or an array of scalars")]
    UnsupportedValue { section: String, key: String, found: &'static str },
}

/// Port for site configuration lookups.
pub trait SiteConfigSource {
    /// Look up `key` inside `section`.
    fn get(&self, section: &str, key: &str) -> Result<SiteValue, SiteLookupError>;
}
