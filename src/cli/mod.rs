//! Command-line interface module.

mod args;
pub mod check;
pub mod crossref;
pub mod decorate;

pub use args::{Cli, Commands, CrossRefArgs, DecorateArgs};
