//! Test double for `SiteConfigSource`.

use std::collections::BTreeMap;

use crate::ports::{SiteConfigSource, SiteLookupError, SiteValue};

#[derive(Clone, Debug, Default)]
pub struct FakeSiteConfig {
    values: BTreeMap<(String, String), SiteValue>,
}

impl FakeSiteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, section: &str, key: &str, value: &str) -> Self {
        self.values.insert((section.into(), key.into()), SiteValue::Scalar(value.into()));
        self
    }

    pub fn with_list(mut self, section: &str, key: &str, values: &[&str]) -> Self {
        let values = values.iter().map(|v| v.to_string()).collect();
        self.values.insert((section.into(), key.into()), SiteValue::List(values));
        self
    }
}

impl SiteConfigSource for FakeSiteConfig {
    fn get(&self, section: &str, key: &str) -> Result<SiteValue, SiteLookupError> {
        self.values.get(&(section.to_string(), key.to_string())).cloned().ok_or_else(|| {
            SiteLookupError::MissingKey { section: section.to_string(), key: key.to_string() }
        })
    }
}
