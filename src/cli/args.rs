//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Decorator for statically generated documentation pages
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: decor.toml, searched upward from cwd)
    #[arg(short = 'C', long, default_value = "decor.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Decorate rendered pages in place
    #[command(visible_alias = "d")]
    Decorate {
        #[command(flatten)]
        args: DecorateArgs,
    },

    /// Generate the cross-reference table from Markdown sources
    #[command(visible_alias = "x")]
    Crossref {
        #[command(flatten)]
        args: CrossRefArgs,
    },

    /// Report non-ASCII characters in source files
    #[command(visible_alias = "c")]
    Check {
        /// Files to check. If omitted, reads stdin.
        #[arg(value_hint = clap::ValueHint::FilePath)]
        files: Vec<PathBuf>,

        /// Enable verbose output for debugging
        #[arg(short = 'V', long)]
        verbose: bool,
    },
}

impl Commands {
    /// Whether the subcommand asked for `--verbose`.
    pub fn verbose(&self) -> bool {
        match self {
            Self::Decorate { args } => args.verbose,
            Self::Crossref { args } => args.verbose,
            Self::Check { verbose, .. } => *verbose,
        }
    }
}

/// Decorate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct DecorateArgs {
    /// Pages or directories to decorate. If omitted, decorates the configured site.
    /// Use `-` to read paths from stdin.
    #[arg(value_name = "PATH", value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Decorate without writing any page
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Crossref command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CrossRefArgs {
    /// Write the table to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_flag_is_kept() {
        let err = Cli::try_parse_from(["decor", "-V"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_parse_decorate() {
        let cli = Cli::try_parse_from(["decor", "decorate", "-V", "-n", "_site/a", "_site/b"]).unwrap();
        assert!(cli.command.verbose());
        let Commands::Decorate { args } = cli.command else {
            panic!("expected decorate");
        };
        assert!(args.dry_run);
        assert_eq!(args.paths, [PathBuf::from("_site/a"), PathBuf::from("_site/b")]);
    }

    #[test]
    fn test_parse_aliases() {
        let cli = Cli::try_parse_from(["decor", "x", "--pretty", "-o", "crossref.json"]).unwrap();
        let Commands::Crossref { args } = cli.command else {
            panic!("expected crossref");
        };
        assert!(args.pretty);
        assert_eq!(args.output, Some(PathBuf::from("crossref.json")));

        assert!(!args.verbose);

        let cli = Cli::try_parse_from(["decor", "c", "--verbose"]).unwrap();
        assert!(cli.command.verbose());
        assert!(matches!(cli.command, Commands::Check { files, .. } if files.is_empty()));
    }

    #[test]
    fn test_default_config_name() {
        let cli = Cli::try_parse_from(["decor", "--color", "never", "d"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("decor.toml"));
        assert_eq!(cli.color, ColorChoice::Never);
    }
}
