//! rsn-suite: generate a Cylc suite that runs one afterburner job per
//! indexed configuration fragment, then stitches and plots the results.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{
    CreateOutcome, create, create_at, fragments, fragments_at, params, params_at, params_to_toml,
};
pub use domain::{AppError, FragmentSet, ParameterOverrides, ResolvedParameters};
