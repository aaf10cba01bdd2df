//! Fragments command implementation.

use std::path::Path;

use crate::domain::{AppError, ParameterOverrides};

pub fn run_fragments(overrides: &ParameterOverrides, config: Option<&Path>) -> Result<(), AppError> {
    let set = crate::app::api::fragments(overrides, config)?;

    if set.is_empty() {
        println!("ℹ️ No fragments found");
    } else {
        println!("✅ Found {} fragment(s) with base {}", set.count(), set.base_path().display());
    }
    Ok(())
}
