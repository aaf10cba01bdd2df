//! Create command implementation.

use std::path::Path;

use crate::domain::{AppError, ParameterOverrides};

pub fn run_create(overrides: &ParameterOverrides, config: Option<&Path>) -> Result<(), AppError> {
    let outcome = crate::app::api::create(overrides, config)?;

    println!("✅ Run script is {}", outcome.launcher.display());
    println!("✅ Cylc suite file is {}", outcome.suite.display());
    Ok(())
}
