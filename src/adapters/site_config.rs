//! TOML-backed site configuration.
//!
//! ```toml
//! [afterburner]
//! abrun_exec = "/opt/afterburner/bin/abrun.sh"
//! app_name = "NetcdfModelMonitor"
//!
//! [general]
//! max_concurrent_jobs = 4
//! python_exec = "/usr/bin/python3"
//! modules = ["PROJ", "UDUNITS"]
//! ```

use toml::{Table, Value};

use crate::domain::AppError;
use crate::ports::{SiteConfigSource, SiteLookupError, SiteValue};

/// Site configuration parsed from a TOML document.
///
/// An empty instance stands for "no site file"; every lookup reports a
/// missing key.
#[derive(Debug, Clone, Default)]
pub struct TomlSiteConfig {
    sections: Table,
}

impl TomlSiteConfig {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse and validate site configuration from TOML content.
    ///
    /// Every top-level entry must be a section table.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let sections: Table = toml::from_str(content)?;
        if let Some((name, value)) = sections.iter().find(|(_, value)| !value.is_table()) {
            return Err(AppError::SiteConfig(format!(
                "top-level key '{}' must be a section table, found {}",
                name,
                value.type_str()
            )));
        }
        Ok(Self { sections })
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl SiteConfigSource for TomlSiteConfig {
    fn get(&self, section: &str, key: &str) -> Result<SiteValue, SiteLookupError> {
        let missing = || SiteLookupError::MissingKey {
            section: section.to_string(),
            key: key.to_string(),
        };
        let value = self
            .sections
            .get(section)
            .and_then(Value::as_table)
            .and_then(|table| table.get(key))
            .ok_or_else(missing)?;

        let unsupported = |found: &'static str| SiteLookupError::UnsupportedValue {
            section: section.to_string(),
            key: key.to_string(),
            found,
        };

        match value {
            Value::Array(items) => items
                .iter()
                .map(|item| scalar_text(item).ok_or_else(|| unsupported(item.type_str())))
                .collect::<Result<Vec<_>, _>>()
                .map(SiteValue::List),
            other => scalar_text(other).map(SiteValue::Scalar).ok_or_else(|| unsupported(other.type_str())),
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Integer(i) => Some(i.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::Boolean(b) => Some(b.to_string()),
        Value::Datetime(d) => Some(d.to_string()),
        Value::Array(_) | Value::Table(_) => None,
    }
}
