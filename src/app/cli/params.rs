//! Params command implementation.

use std::path::Path;

use crate::domain::{AppError, ParameterOverrides};

pub fn run_params(overrides: &ParameterOverrides, config: Option<&Path>) -> Result<(), AppError> {
    let resolved = crate::app::api::params(overrides, config)?;
    print!("{}", crate::app::api::params_to_toml(&resolved)?);
    Ok(())
}
