#[path = "../harness/mod.rs"]
mod harness;

mod create;
mod exit_codes;
