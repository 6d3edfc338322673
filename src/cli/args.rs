//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::link::LinkStrategy;

/// Skill-Ops - hydrate agent skill namespaces from local clones
#[derive(Parser, Debug)]
#[command(name = "skill-ops")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if skill-ops was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a new Skill-Ops manifest in this repository
    #[command(
        long_about = "Initialize a new Skill-Ops manifest in this repository.\n\n\
            Creates <path>/skill-ops.json with a single local namespace named \
            'repo' and seeds <path>/.gitignore with hydration exclusions. \
            Fails if a manifest already exists at that path."
    )]
    Init {
        /// Path to create the .agent directory
        #[arg(long, default_value = ".agent")]
        path: PathBuf,
    },

    /// Read the manifest and create links for remote namespaces
    #[command(
        long_about = "Read the Skill-Ops manifest and materialize each remote \
            namespace's target path as a link to its registered clone.\n\n\
            Namespaces whose remote has no registered clone, or whose target \
            already exists as a plain directory, are skipped with a warning."
    )]
    Hydrate {
        /// Replace existing targets even when they are not symlinks
        #[arg(short, long)]
        force: bool,

        /// Override the default linking strategy
        #[arg(short = 's', long = "link-strategy", value_enum)]
        link_strategy: Option<StrategyArg>,
    },

    /// List all available skills categorized by namespace
    List,

    /// Check hydrated namespaces for broken links
    Validate,
}

/// Command-line spelling of a link strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Symlink,
    Junction,
    Copy,
}

impl From<StrategyArg> for LinkStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Symlink => LinkStrategy::Symlink,
            StrategyArg::Junction => LinkStrategy::Junction,
            StrategyArg::Copy => LinkStrategy::Copy,
        }
    }
}
