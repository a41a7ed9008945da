//! Decor - post-build decorator for static documentation pages.
//!
//! Runs over rendered HTML and, for every page that includes the decorator
//! script, injects the disclaimer, builds the table of contents, styles
//! tables and resolves citation, glossary and cross-reference links.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;
mod page;
mod pipeline;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::DecorConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.command.verbose());

    match &cli.command {
        Commands::Decorate { args } => {
            let config = DecorConfig::load(&cli.config)?;
            cli::decorate::decorate_site(args, &config)
        }
        Commands::Crossref { args } => {
            let config = DecorConfig::load(&cli.config)?;
            cli::crossref::generate_crossref(args, &config)
        }
        Commands::Check { files, .. } => cli::check::check_files(files),
    }
}
