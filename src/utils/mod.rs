//! Utility modules shared by the commands.

pub mod files;
mod plural;

pub use plural::{plural_count, plural_s};
