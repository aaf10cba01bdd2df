pub mod create;
pub mod fragments;
pub mod params;
mod prepare;
