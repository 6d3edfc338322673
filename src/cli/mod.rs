//! cli
//!
//! Command-line interface layer for Skill-Ops.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Format output; core modules never print
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! handlers in [`commands`], which call into [`crate::core`] with explicit
//! paths. All filesystem decisions live in core.

pub mod args;
pub mod commands;

pub use args::Cli;

use anyhow::Result;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = commands::Context {
        cwd: cli.cwd.clone(),
        quiet: cli.quiet,
    };

    commands::dispatch(cli.command, &ctx)
}
