//! Command-line interface.

mod args;
pub mod build;
pub mod query;
pub mod validate;

pub use args::{BuildArgs, Cli, Commands, QueryArgs};
